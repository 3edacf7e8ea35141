use glam::Vec2;

/// Converts absolute cursor samples into displacement since the previous
/// sample.
pub(crate) struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    pub(crate) const fn new() -> Self {
        Self { last: None }
    }

    /// Record a new cursor position and return the displacement since the
    /// last one. The first sample only establishes the reference.
    pub(crate) fn handle_position(&mut self, pos: Vec2) -> Vec2 {
        let delta = self.last.map_or(Vec2::ZERO, |last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Reset the reference point, e.g. after the host warps the OS cursor
    /// back to the window centre.
    pub(crate) fn recenter(&mut self, pos: Vec2) {
        self.last = Some(pos);
    }

    /// Forget the reference so the next sample produces no motion.
    pub(crate) fn forget(&mut self) {
        self.last = None;
    }
}
