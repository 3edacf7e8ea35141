use glam::Vec2;

use super::keyboard::NavKeys;

/// Input accumulated between two camera updates.
///
/// Cursor and scroll deltas are consumed (zeroed) by
/// [`CameraController::update`](crate::camera::CameraController::update);
/// `keys` is level state and persists until the keys are released.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Cursor displacement in pixels since the last update (down is
    /// positive).
    pub cursor_delta: Vec2,
    /// Navigation keys currently held.
    pub keys: NavKeys,
    /// Accumulated scroll since the last update (positive zooms in).
    pub scroll_delta: f32,
}

impl FrameInput {
    /// Input with the given values.
    #[must_use]
    pub const fn new(cursor_delta: Vec2, keys: NavKeys, scroll_delta: f32) -> Self {
        Self {
            cursor_delta,
            keys,
            scroll_delta,
        }
    }

    /// Zero the per-frame deltas, keeping held keys.
    pub fn reset_deltas(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}
