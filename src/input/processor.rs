//! Folds raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (cursor reference,
//! held navigation keys, pending deltas) and the key-binding map. It is the
//! only thing that sits between raw window events and
//! [`CameraController::update`](crate::camera::CameraController::update).

use glam::Vec2;

use super::event::InputEvent;
use super::frame::FrameInput;
use super::keyboard::NavAction;
use super::mouse::CursorTracker;
use crate::options::KeybindingOptions;

/// Accumulates [`InputEvent`]s into a [`FrameInput`].
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(event);
///
/// // Once per frame:
/// let matrices = camera.update(dt, input_processor.frame_input_mut(), aspect);
/// ```
pub struct InputProcessor {
    /// Absolute cursor tracking.
    cursor: CursorTracker,
    /// Deltas and held keys since the last camera update.
    frame: FrameInput,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: CursorTracker::new(),
            frame: FrameInput::default(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released so a remapped key
    /// cannot stay stuck down.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.frame.keys.clear();
    }

    /// Input accumulated since the last camera update.
    #[must_use]
    pub fn frame_input(&self) -> &FrameInput {
        &self.frame
    }

    /// Mutable accumulator, handed to the camera once per frame.
    pub fn frame_input_mut(&mut self) -> &mut FrameInput {
        &mut self.frame
    }

    /// Reset the absolute-cursor reference to `(x, y)`.
    ///
    /// Call after warping the OS cursor back to the window centre so the
    /// warp itself is not read as motion.
    pub fn recenter(&mut self, x: f32, y: f32) {
        self.cursor.recenter(Vec2::new(x, y));
    }

    /// Process a raw input event.
    ///
    /// Returns the navigation action a key event mapped to, if any, so
    /// hosts can tell which key presses the camera consumed.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavAction> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.cursor.handle_position(Vec2::new(x, y));
                self.add_cursor_delta(delta);
                None
            }
            InputEvent::CursorDelta { dx, dy } => {
                self.add_cursor_delta(Vec2::new(dx, dy));
                None
            }
            InputEvent::Key { code, pressed } => {
                let action = self.key_bindings.lookup(&code)?;
                self.frame.keys.set(action.bit(), pressed);
                Some(action)
            }
            InputEvent::Scroll { delta } => {
                if delta.is_finite() {
                    self.frame.scroll_delta += delta;
                }
                None
            }
            InputEvent::FocusLost => {
                self.frame.keys.clear();
                self.cursor.forget();
                None
            }
        }
    }

    fn add_cursor_delta(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.frame.cursor_delta += delta;
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NavKeys;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
        }
    }

    #[test]
    fn cursor_moves_accumulate_between_frames() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let _ = input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 9.0 });
        let _ = input.handle_event(InputEvent::CursorDelta { dx: 1.0, dy: 3.0 });
        assert_eq!(input.frame_input().cursor_delta, Vec2::new(5.0, 2.0));

        input.frame_input_mut().reset_deltas();
        assert_eq!(input.frame_input().cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn bound_keys_set_and_clear_bits() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(key("KeyW", true)), Some(NavAction::Forward));
        assert_eq!(
            input.handle_event(key("ArrowRight", true)),
            Some(NavAction::StrafeRight)
        );
        assert_eq!(
            input.frame_input().keys,
            NavKeys::from_bits(NavKeys::FORWARD | NavKeys::RIGHT)
        );

        let _ = input.handle_event(key("KeyW", false));
        assert_eq!(input.frame_input().keys, NavKeys::from_bits(NavKeys::RIGHT));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(key("KeyZ", true)), None);
        assert_eq!(input.frame_input().keys, NavKeys::NONE);
    }

    #[test]
    fn keys_survive_delta_reset() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(key("ArrowUp", true));
        let _ = input.handle_event(InputEvent::Scroll { delta: 2.0 });
        input.frame_input_mut().reset_deltas();
        assert!(input.frame_input().keys.forward());
        assert_eq!(input.frame_input().scroll_delta, 0.0);
    }

    #[test]
    fn non_finite_deltas_are_dropped() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::Scroll { delta: f32::NAN });
        let _ = input.handle_event(InputEvent::CursorDelta {
            dx: f32::INFINITY,
            dy: 0.0,
        });
        assert_eq!(*input.frame_input(), FrameInput::default());
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(key("KeyA", true));
        let _ = input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        let _ = input.handle_event(InputEvent::FocusLost);
        assert_eq!(input.frame_input().keys, NavKeys::NONE);

        // Reference was forgotten: the next sample is not a jump.
        let _ = input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 5.0 });
        assert_eq!(input.frame_input().cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn rebinding_releases_held_keys() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(key("KeyS", true));
        input.set_key_bindings(KeybindingOptions::default());
        assert_eq!(input.frame_input().keys, NavKeys::NONE);
    }
}
