use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hard limits for any configured field of view. The projection is only
/// well-defined strictly between 0° and 180°.
pub const FOV_LIMITS: (f32, f32) = (1.0, 179.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Fly-camera start pose, projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial horizontal angle in radians (π looks down -Z).
    #[schemars(skip)]
    pub horizontal_angle: f32,
    /// Initial vertical angle in radians (0 is level).
    #[schemars(skip)]
    pub vertical_angle: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Narrowest field of view reachable by zooming, in degrees.
    #[schemars(title = "Min Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fov_min: f32,
    /// Widest field of view reachable by zooming, in degrees.
    #[schemars(title = "Max Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fov_max: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Look sensitivity in radians per pixel of cursor motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub mouse_sensitivity: f32,
    /// Field-of-view change in degrees per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            horizontal_angle: std::f32::consts::PI,
            vertical_angle: 0.0,
            fovy: 45.0,
            fov_min: 1.0,
            fov_max: 120.0,
            znear: 0.1,
            zfar: 100.0,
            move_speed: 3.0,
            mouse_sensitivity: 0.005,
            zoom_speed: 5.0,
        }
    }
}

impl CameraOptions {
    /// The zoom range, sanitized into [`FOV_LIMITS`] with `min <= max`.
    ///
    /// Non-finite bounds fall back to the hard limits.
    #[must_use]
    pub fn fov_range(&self) -> (f32, f32) {
        let (floor, ceil) = FOV_LIMITS;
        let lo = finite_or(self.fov_min, floor).clamp(floor, ceil);
        let hi = finite_or(self.fov_max, ceil).clamp(lo, ceil);
        (lo, hi)
    }

    /// The starting field of view, clamped into [`fov_range`](Self::fov_range).
    #[must_use]
    pub fn initial_fovy(&self) -> f32 {
        let (lo, hi) = self.fov_range();
        finite_or(self.fovy, Self::default().fovy).clamp(lo, hi)
    }

    /// Near/far planes, repaired if they cannot form a valid frustum.
    #[must_use]
    pub fn clip_planes(&self) -> (f32, f32) {
        let defaults = Self::default();
        if self.znear.is_finite()
            && self.zfar.is_finite()
            && self.znear > 0.0
            && self.zfar > self.znear
        {
            (self.znear, self.zfar)
        } else {
            log::warn!(
                "invalid clip planes near={} far={}, using defaults",
                self.znear,
                self.zfar
            );
            (defaults.znear, defaults.zfar)
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
