use std::f32::consts::{PI, TAU};

use web_time::Instant;

use crate::camera::core::{CameraMatrices, CameraState, CameraUniform};
use crate::input::FrameInput;
use crate::options::CameraOptions;

/// First-person fly camera driven once per frame by accumulated input.
///
/// Mouse-look turns the camera, held navigation keys move it along its own
/// forward/right axes, and scrolling zooms by narrowing the field of view.
pub struct CameraController {
    state: CameraState,
    options: CameraOptions,
    fov_range: (f32, f32),
    clip: (f32, f32),
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Controller with default [`CameraOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&CameraOptions::default())
    }

    /// Controller starting at the pose described by `options`.
    ///
    /// Non-finite or non-positive speeds and non-finite start values are
    /// replaced by their defaults; the zoom range and clip planes are
    /// sanitized so every frame yields a usable projection.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let options = sanitize(options);
        Self {
            state: CameraState::from_options(&options),
            fov_range: options.fov_range(),
            clip: options.clip_planes(),
            options,
        }
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// The (sanitized) options this controller runs with.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Return to the configured starting pose.
    pub fn reset(&mut self) {
        self.state = CameraState::from_options(&self.options);
    }

    /// Advance the camera by one frame and derive its matrices.
    ///
    /// `elapsed` is the frame duration in seconds; zero, negative or
    /// non-finite values give a zero-duration frame (look and zoom still
    /// apply, position does not move). Cursor and scroll deltas in `input`
    /// are zeroed afterwards; held keys are left alone.
    ///
    /// Clears [`CameraState::last_update`], so a following
    /// [`update_at`](Self::update_at) starts a fresh timeline instead of
    /// re-applying time this call already covered.
    pub fn update(
        &mut self,
        elapsed: f32,
        input: &mut FrameInput,
        aspect: f32,
    ) -> CameraMatrices {
        self.state.last_update = None;
        self.advance(elapsed, input);
        self.matrices(aspect)
    }

    /// [`update`](Self::update) with the frame duration measured from the
    /// previous timestamped update. The first call, and the first call
    /// after a plain `update`, is a zero-duration frame.
    pub fn update_at(
        &mut self,
        now: Instant,
        input: &mut FrameInput,
        aspect: f32,
    ) -> CameraMatrices {
        let elapsed = self
            .state
            .last_update
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.advance(elapsed, input);
        self.state.last_update = Some(now);
        self.matrices(aspect)
    }

    fn advance(&mut self, elapsed: f32, input: &mut FrameInput) {
        let dt = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            0.0
        };

        if input.cursor_delta.is_finite() {
            let look = input.cursor_delta * self.options.mouse_sensitivity;
            self.state.horizontal_angle =
                (self.state.horizontal_angle - look.x).rem_euclid(TAU);
            self.state.vertical_angle = wrap_signed(self.state.vertical_angle - look.y);
        }

        let step = dt * self.options.move_speed;
        if step > 0.0 {
            let forward = self.state.forward();
            let right = self.state.right();
            let keys = input.keys;
            if keys.forward() {
                self.state.position += forward * step;
            }
            if keys.backward() {
                self.state.position -= forward * step;
            }
            if keys.right() {
                self.state.position += right * step;
            }
            if keys.left() {
                self.state.position -= right * step;
            }
        }

        if input.scroll_delta.is_finite() {
            let (lo, hi) = self.fov_range;
            self.state.fovy = (self.state.fovy
                - self.options.zoom_speed * input.scroll_delta)
                .clamp(lo, hi);
        }

        input.reset_deltas();
    }

    /// Matrices for the current state without advancing it.
    ///
    /// A non-finite or non-positive `aspect` is treated as `1.0`.
    #[must_use]
    pub fn matrices(&self, aspect: f32) -> CameraMatrices {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let (znear, zfar) = self.clip;
        CameraMatrices {
            projection: self.state.projection_matrix(aspect, znear, zfar),
            view: self.state.view_matrix(),
        }
    }

    /// Uniform block for the current state.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform::new(&self.matrices(aspect), &self.state)
    }
}

/// Angle folded into `[-π, π]`; values already inside are returned as is.
fn wrap_signed(angle: f32) -> f32 {
    if (-PI..=PI).contains(&angle) {
        angle
    } else {
        (angle + PI).rem_euclid(TAU) - PI
    }
}

fn sanitize(options: &CameraOptions) -> CameraOptions {
    let defaults = CameraOptions::default();
    let mut out = options.clone();

    // Rates must be positive.
    let rates = [
        (&mut out.move_speed, defaults.move_speed, "move_speed"),
        (
            &mut out.mouse_sensitivity,
            defaults.mouse_sensitivity,
            "mouse_sensitivity",
        ),
        (&mut out.zoom_speed, defaults.zoom_speed, "zoom_speed"),
    ];
    for (value, fallback, name) in rates {
        if !(value.is_finite() && *value > 0.0) {
            log::warn!("camera option {name} is {value}, using {fallback}");
            *value = fallback;
        }
    }

    let angles = [
        (
            &mut out.horizontal_angle,
            defaults.horizontal_angle,
            "horizontal_angle",
        ),
        (
            &mut out.vertical_angle,
            defaults.vertical_angle,
            "vertical_angle",
        ),
    ];
    for (value, fallback, name) in angles {
        if !value.is_finite() {
            log::warn!("camera option {name} is {value}, using {fallback}");
            *value = fallback;
        }
    }

    if !out.position.iter().all(|c| c.is_finite()) {
        log::warn!("camera position {:?} is not finite, using default", out.position);
        out.position = defaults.position;
    }
    out
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec2, Vec3};
    use web_time::Duration;

    use super::*;
    use crate::input::NavKeys;

    const EPS: f32 = 1e-4;
    const ASPECT: f32 = 4.0 / 3.0;

    fn keys(bits: u8) -> FrameInput {
        FrameInput::new(Vec2::ZERO, NavKeys::from_bits(bits), 0.0)
    }

    #[test]
    fn zero_input_leaves_state_and_matrices_unchanged() {
        let mut camera = CameraController::new();
        let before = *camera.state();
        let first = camera.update(0.016, &mut FrameInput::default(), ASPECT);
        let second = camera.update(0.016, &mut FrameInput::default(), ASPECT);
        assert_eq!(*camera.state(), before);
        assert_eq!(first, second);
        assert_eq!(first, camera.matrices(ASPECT));
    }

    #[test]
    fn forward_key_moves_along_look_direction() {
        let mut camera = CameraController::new();
        let _ = camera.update(1.0, &mut keys(NavKeys::FORWARD), ASPECT);
        // 3 units/s down -Z from (0, 0, 5).
        assert!(camera
            .state()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPS));
    }

    #[test]
    fn strafe_and_backward_follow_basis() {
        let mut camera = CameraController::new();
        let _ = camera.update(0.5, &mut keys(NavKeys::RIGHT), ASPECT);
        assert!(camera
            .state()
            .position
            .abs_diff_eq(Vec3::new(1.5, 0.0, 5.0), EPS));

        let _ = camera.update(
            0.5,
            &mut keys(NavKeys::LEFT | NavKeys::BACKWARD),
            ASPECT,
        );
        assert!(camera
            .state()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 6.5), EPS));
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let mut camera = CameraController::new();
        let start = camera.state().position;
        let _ = camera.update(1.0, &mut keys(NavKeys::FORWARD | NavKeys::RIGHT), ASPECT);
        let travelled = (camera.state().position - start).length();
        assert!((travelled - 3.0 * std::f32::consts::SQRT_2).abs() < EPS);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut camera = CameraController::new();
        let start = camera.state().position;
        let _ = camera.update(
            1.0,
            &mut keys(NavKeys::FORWARD | NavKeys::BACKWARD),
            ASPECT,
        );
        assert!(camera.state().position.abs_diff_eq(start, EPS));
    }

    #[test]
    fn degenerate_elapsed_does_not_move() {
        let mut camera = CameraController::new();
        let start = camera.state().position;
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let _ = camera.update(dt, &mut keys(NavKeys::FORWARD), ASPECT);
            assert_eq!(camera.state().position, start, "dt {dt}");
        }
    }

    #[test]
    fn cursor_right_turns_right_and_down_looks_down() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::new(Vec2::new(100.0, 40.0), NavKeys::NONE, 0.0);
        let _ = camera.update(0.016, &mut input, ASPECT);

        let s = camera.state();
        assert!((s.horizontal_angle - (PI - 0.5)).abs() < EPS);
        assert!((s.vertical_angle + 0.2).abs() < EPS);
        assert!(s.forward().x > 0.0);
        assert!(s.forward().y < 0.0);
    }

    #[test]
    fn deltas_are_consumed_by_update() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::new(Vec2::new(10.0, 0.0), NavKeys::NONE, 1.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        assert_eq!(input.cursor_delta, Vec2::ZERO);
        assert_eq!(input.scroll_delta, 0.0);

        let after_first = *camera.state();
        let _ = camera.update(0.016, &mut input, ASPECT);
        assert_eq!(*camera.state(), after_first);
    }

    #[test]
    fn held_keys_persist_across_updates() {
        let mut camera = CameraController::new();
        let mut input = keys(NavKeys::FORWARD);
        let _ = camera.update(0.5, &mut input, ASPECT);
        let _ = camera.update(0.5, &mut input, ASPECT);
        assert!(input.keys.forward());
        assert!((camera.state().position.z - 2.0).abs() < EPS);
    }

    #[test]
    fn scroll_in_stabilizes_at_min_fov() {
        let mut camera = CameraController::new();
        for _ in 0..100 {
            let mut input = FrameInput::new(Vec2::ZERO, NavKeys::NONE, 3.0);
            let _ = camera.update(0.016, &mut input, ASPECT);
        }
        assert_eq!(camera.state().fovy, 1.0);
    }

    #[test]
    fn scroll_out_stabilizes_at_max_fov() {
        let mut camera = CameraController::new();
        for _ in 0..100 {
            let mut input = FrameInput::new(Vec2::ZERO, NavKeys::NONE, -3.0);
            let _ = camera.update(0.016, &mut input, ASPECT);
        }
        assert_eq!(camera.state().fovy, 120.0);
        assert!(camera.matrices(ASPECT).projection.is_finite());
    }

    #[test]
    fn unbounded_option_range_still_stays_below_180() {
        let mut camera = CameraController::from_options(&CameraOptions {
            fov_min: 0.0,
            fov_max: 500.0,
            ..Default::default()
        });
        let mut input = FrameInput::new(Vec2::ZERO, NavKeys::NONE, -1000.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        assert_eq!(camera.state().fovy, 179.0);

        let mut input = FrameInput::new(Vec2::ZERO, NavKeys::NONE, 1000.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        assert_eq!(camera.state().fovy, 1.0);
    }

    #[test]
    fn projection_uses_current_fov_and_aspect() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::new(Vec2::ZERO, NavKeys::NONE, 1.0);
        let m = camera.update(0.016, &mut input, 16.0 / 9.0);
        let expected =
            Mat4::perspective_rh_gl(40.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        assert!(m.projection.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn bad_aspect_falls_back_to_square() {
        let camera = CameraController::new();
        assert_eq!(camera.matrices(0.0), camera.matrices(1.0));
        assert_eq!(camera.matrices(f32::NAN), camera.matrices(1.0));
    }

    #[test]
    fn view_matrix_follows_position() {
        let mut camera = CameraController::new();
        let m = camera.update(1.0, &mut keys(NavKeys::FORWARD), ASPECT);
        let eye = camera.state().position;
        assert!(m.view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn timestamped_updates_measure_elapsed() {
        let mut camera = CameraController::new();
        let t0 = Instant::now();
        let mut input = keys(NavKeys::FORWARD);

        let _ = camera.update_at(t0, &mut input, ASPECT);
        assert!((camera.state().position.z - 5.0).abs() < EPS);
        assert_eq!(camera.state().last_update, Some(t0));

        let t1 = t0 + Duration::from_millis(500);
        let _ = camera.update_at(t1, &mut input, ASPECT);
        assert!((camera.state().position.z - 3.5).abs() < EPS);

        // A timestamp from the past is a zero-duration frame.
        let _ = camera.update_at(t0, &mut input, ASPECT);
        assert!((camera.state().position.z - 3.5).abs() < EPS);
    }

    #[test]
    fn reset_restores_start_pose() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::new(Vec2::new(5.0, 5.0), NavKeys::from_bits(NavKeys::LEFT), 2.0);
        let _ = camera.update(1.0, &mut input, ASPECT);
        camera.reset();
        assert_eq!(
            *camera.state(),
            CameraState::from_options(&CameraOptions::default())
        );
    }

    #[test]
    fn non_finite_options_are_replaced() {
        let camera = CameraController::from_options(&CameraOptions {
            move_speed: f32::NAN,
            zoom_speed: f32::INFINITY,
            position: [f32::NAN, 0.0, 0.0],
            ..Default::default()
        });
        assert_eq!(camera.options().move_speed, 3.0);
        assert_eq!(camera.options().zoom_speed, 5.0);
        assert_eq!(camera.state().position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn plain_update_restarts_the_timestamped_timeline() {
        let mut camera = CameraController::new();
        let t0 = Instant::now();
        let mut input = keys(NavKeys::FORWARD);

        let _ = camera.update_at(t0, &mut input, ASPECT);
        for _ in 0..60 {
            let _ = camera.update(1.0 / 60.0, &mut input, ASPECT);
        }
        assert_eq!(camera.state().last_update, None);
        assert!((camera.state().position.z - 2.0).abs() < 1e-3);

        // The 60 frames above already covered this second.
        let t1 = t0 + Duration::from_millis(1016);
        let _ = camera.update_at(t1, &mut input, ASPECT);
        assert!((camera.state().position.z - 2.0).abs() < 1e-3);
        assert_eq!(camera.state().last_update, Some(t1));

        let _ = camera.update_at(t1 + Duration::from_millis(500), &mut input, ASPECT);
        assert!((camera.state().position.z - 0.5).abs() < 1e-3);
    }

    #[test]
    fn long_sessions_keep_angles_bounded_and_precise() {
        let mut camera = CameraController::new();
        for _ in 0..1000 {
            let mut input = FrameInput::new(Vec2::new(20_000.0, -7_000.0), NavKeys::NONE, 0.0);
            let _ = camera.update(0.016, &mut input, ASPECT);
        }
        let s = *camera.state();
        assert!((0.0..=TAU).contains(&s.horizontal_angle));
        assert!((-PI..=PI).contains(&s.vertical_angle));

        let mut input = FrameInput::new(Vec2::new(1.0, 0.0), NavKeys::NONE, 0.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        let turned = s.horizontal_angle - camera.state().horizontal_angle;
        assert!((turned.rem_euclid(TAU) - 0.005).abs() < 1e-5);
    }

    #[test]
    fn wrapped_angles_keep_the_same_view() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::new(Vec2::new(0.0, -700.0), NavKeys::NONE, 0.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        let wrapped = *camera.state();
        let unwrapped = CameraState {
            vertical_angle: 3.5,
            ..CameraState::from_options(&CameraOptions::default())
        };
        assert!((wrapped.vertical_angle - (3.5 - TAU)).abs() < EPS);
        assert!(wrapped.forward().abs_diff_eq(unwrapped.forward(), EPS));
        assert!(wrapped.up().abs_diff_eq(unwrapped.up(), EPS));
    }

    #[test]
    fn non_positive_rates_are_replaced() {
        let mut camera = CameraController::from_options(&CameraOptions {
            move_speed: -3.0,
            mouse_sensitivity: -0.005,
            zoom_speed: 0.0,
            ..Default::default()
        });
        assert_eq!(camera.options().move_speed, 3.0);
        assert_eq!(camera.options().mouse_sensitivity, 0.005);
        assert_eq!(camera.options().zoom_speed, 5.0);

        let mut input = FrameInput::new(Vec2::new(100.0, 0.0), NavKeys::NONE, 1.0);
        let _ = camera.update(0.016, &mut input, ASPECT);
        assert!(camera.state().forward().x > 0.0);
        assert_eq!(camera.state().fovy, 40.0);

        let _ = camera.update(1.0, &mut keys(NavKeys::FORWARD), ASPECT);
        let travelled = (camera.state().position - Vec3::new(0.0, 0.0, 5.0)).length();
        assert!((travelled - 3.0).abs() < EPS);
    }

    #[test]
    fn independent_controllers_do_not_share_state() {
        let mut a = CameraController::new();
        let b = CameraController::new();
        let _ = a.update(1.0, &mut keys(NavKeys::FORWARD), ASPECT);
        assert_ne!(a.state().position, b.state().position);
    }
}
