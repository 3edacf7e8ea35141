use serde::{Deserialize, Serialize};

/// Camera navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = ["ArrowUp", "KeyW"]
/// strafe_left = ["ArrowLeft", "KeyA"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Move along the look direction.
    Forward,
    /// Move against the look direction.
    Backward,
    /// Strafe to the camera's left.
    StrafeLeft,
    /// Strafe to the camera's right.
    StrafeRight,
}

impl NavAction {
    /// Every action, in bit order.
    pub const ALL: [Self; 4] = [
        Self::Forward,
        Self::Backward,
        Self::StrafeLeft,
        Self::StrafeRight,
    ];

    /// The [`NavKeys`] bit this action sets while held.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Forward => NavKeys::FORWARD,
            Self::Backward => NavKeys::BACKWARD,
            Self::StrafeLeft => NavKeys::LEFT,
            Self::StrafeRight => NavKeys::RIGHT,
        }
    }
}

/// Bitmask of navigation keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NavKeys {
    /// Raw bitfield of pressed keys.
    pub bits: u8,
}

impl NavKeys {
    /// Move forward.
    pub const FORWARD: u8 = 1 << 0;
    /// Move backward.
    pub const BACKWARD: u8 = 1 << 1;
    /// Strafe left.
    pub const LEFT: u8 = 1 << 2;
    /// Strafe right.
    pub const RIGHT: u8 = 1 << 3;

    /// No keys held.
    pub const NONE: Self = Self { bits: 0 };

    /// Wrap a raw bitfield.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Whether any bit of `key` is held.
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self, key: u8) -> bool {
        self.bits & key != 0
    }

    /// Press or release `key`.
    #[inline]
    pub fn set(&mut self, key: u8, pressed: bool) {
        if pressed {
            self.bits |= key;
        } else {
            self.bits &= !key;
        }
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Forward held.
    #[inline]
    #[must_use]
    pub const fn forward(&self) -> bool {
        self.is_pressed(Self::FORWARD)
    }

    /// Backward held.
    #[inline]
    #[must_use]
    pub const fn backward(&self) -> bool {
        self.is_pressed(Self::BACKWARD)
    }

    /// Strafe-left held.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> bool {
        self.is_pressed(Self::LEFT)
    }

    /// Strafe-right held.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> bool {
        self.is_pressed(Self::RIGHT)
    }
}
