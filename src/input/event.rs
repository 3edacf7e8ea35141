/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into the per-frame [`FrameInput`](super::FrameInput).
///
/// # Example
///
/// ```
/// use meshcam::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::Key { code: "KeyW".into(), pressed: true });
/// assert!(input.frame_input().keys.forward());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Raw relative pointer motion (e.g. from a captured cursor).
    CursorDelta {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels (down is positive).
        dy: f32,
    },
    /// Key pressed or released.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = away from the user, zooms in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The window lost keyboard focus; held keys will never see a release.
    FocusLost,
}
