use glam::{Mat4, Vec3};
use web_time::Instant;

use crate::options::CameraOptions;

/// Continuously evolving fly-camera state.
///
/// Orientation is owned by two angles rather than a quaternion so that
/// mouse-look maps linearly onto state: the horizontal angle turns about
/// world Y, the vertical angle tilts the look direction up or down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading in radians; `0` looks down +Z, `π` down -Z. Mouse-look
    /// keeps it in `[0, 2π]`.
    pub horizontal_angle: f32,
    /// Elevation in radians; positive looks up. Mouse-look folds it into
    /// `[-π, π]` but does not clamp it, so the camera can pitch past
    /// vertical.
    pub vertical_angle: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Time of the latest frame if it came from a timestamped update;
    /// `None` after a plain update.
    pub last_update: Option<Instant>,
}

impl CameraState {
    /// Starting state described by `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::from_array(options.position),
            horizontal_angle: options.horizontal_angle,
            vertical_angle: options.vertical_angle,
            fovy: options.initial_fovy(),
            last_update: None,
        }
    }

    /// Unit look direction (spherical to Cartesian).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        Vec3::new(cos_v * sin_h, sin_v, cos_v * cos_h)
    }

    /// Unit right vector: the heading turned 90° clockwise in the
    /// horizontal plane. Always level.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let (sin_r, cos_r) =
            (self.horizontal_angle - std::f32::consts::FRAC_PI_2).sin_cos();
        Vec3::new(sin_r, 0.0, cos_r)
    }

    /// Up vector, `right × forward`.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// View matrix looking from `position` toward `position + forward`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    /// Perspective projection with OpenGL clip depth (`[-1, 1]`).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy.to_radians(), aspect, znear, zfar)
    }
}

/// Projection and view matrices for one frame, column-major and
/// right-handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// Perspective projection.
    pub projection: Mat4,
    /// World-to-eye transform.
    pub view: Mat4,
}

impl CameraMatrices {
    /// Combined `projection * view`, for callers that upload a single
    /// transform.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding both camera matrices and camera metadata.
pub struct CameraUniform {
    /// Perspective projection matrix.
    pub projection: [[f32; 4]; 4],
    /// View matrix (kept separate for eye-space lighting).
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl CameraUniform {
    /// Pack matrices and state for upload.
    #[must_use]
    pub fn new(matrices: &CameraMatrices, state: &CameraState) -> Self {
        Self {
            projection: matrices.projection.to_cols_array_2d(),
            view: matrices.view.to_cols_array_2d(),
            position: state.position.to_array(),
            fovy: state.fovy,
        }
    }
}
