//! Avatar kinematics: one parameterized integrator for every room.
//!
//! Two movement flavors share the vertical (jump/gravity) integration and
//! the world-bounds clamp:
//! - `Vehicle`: throttle accumulates into a signed scalar speed, decayed by
//!   a per-frame multiplicative friction factor and steered by heading.
//! - `Walker`: camera-relative WASD with sprint and stamina.

use glam::Vec3;

use crate::engine::config::{AvatarKind, MoverTuning};
use crate::engine::user_input::{Action, InputState};

/// Per-frame kinematic state of the controllable avatar.
#[derive(Debug, Clone, Copy)]
pub struct AvatarState {
    pub position: Vec3,
    /// Heading yaw, CCW-positive, forward = (sin yaw, 0, cos yaw).
    pub yaw: f32,
    /// Signed scalar speed along the heading. Walkers report their current
    /// planar speed here; vehicles own it as their primary state.
    pub speed: f32,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub stamina: f32,
}

impl AvatarState {
    pub fn at_spawn(tuning: &MoverTuning) -> Self {
        Self {
            position: Vec3::from(tuning.spawn),
            yaw: tuning.spawn_yaw,
            speed: 0.0,
            vertical_velocity: 0.0,
            grounded: true,
            stamina: tuning.stamina_max,
        }
    }

    /// Snap back to spawn with all motion zeroed (portal hit).
    pub fn reset(&mut self, tuning: &MoverTuning) {
        *self = Self::at_spawn(tuning);
    }
}

/// Kinematic integrator, parameterized by per-room tuning.
#[derive(Debug)]
pub struct Mover {
    kind: AvatarKind,
    tuning: MoverTuning,
}

impl Mover {
    pub fn new(kind: AvatarKind, tuning: MoverTuning) -> Self {
        Self { kind, tuning }
    }

    pub fn kind(&self) -> AvatarKind {
        self.kind
    }

    pub fn tuning(&self) -> &MoverTuning {
        &self.tuning
    }

    /// Advance `state` by one frame.
    ///
    /// `camera_yaw` supplies the movement basis for walkers; vehicles steer
    /// by their own heading and ignore it. Non-finite or negative `dt`
    /// frames are skipped.
    pub fn integrate(&self, state: &mut AvatarState, input: &InputState, dt: f32, camera_yaw: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }

        match self.kind {
            AvatarKind::Vehicle => self.integrate_vehicle(state, input, dt),
            AvatarKind::Walker => self.integrate_walker(state, input, dt, camera_yaw),
        }
        self.integrate_vertical(state, input, dt);
        self.clamp_to_bounds(state);
    }

    fn integrate_vehicle(&self, state: &mut AvatarState, input: &InputState, dt: f32) {
        let t = &self.tuning;

        // Throttle accumulates per frame and friction decays per frame;
        // only the position step below is time-scaled. The rooms were tuned
        // against this frame-rate-coupled accumulation.
        if input.is_down(Action::Forward) {
            state.speed += t.acceleration;
        }
        if input.is_down(Action::Backward) {
            state.speed -= t.acceleration;
        }
        state.speed = (state.speed * t.friction).clamp(t.min_speed, t.max_speed);

        // Steering flattens out as |speed| approaches max; reversing flips
        // the turn direction like a real car.
        let mut steer = 0.0;
        if input.is_down(Action::Left) {
            steer += 1.0;
        }
        if input.is_down(Action::Right) {
            steer -= 1.0;
        }
        if steer != 0.0 && state.speed.abs() > 1e-4 {
            let ratio = (state.speed.abs() / t.max_speed.abs().max(1e-4)).min(1.0);
            let damp = (1.0 - t.steer_damping * ratio).max(0.0);
            state.yaw = wrap_angle(state.yaw + steer * state.speed.signum() * t.steer_gain * damp * dt);
        }

        let (s, c) = state.yaw.sin_cos();
        state.position.x += s * state.speed * dt;
        state.position.z += c * state.speed * dt;
    }

    fn integrate_walker(
        &self,
        state: &mut AvatarState,
        input: &InputState,
        dt: f32,
        camera_yaw: f32,
    ) {
        let t = &self.tuning;

        let mut mx = 0.0f32;
        let mut mz = 0.0f32;
        if input.is_down(Action::Forward) {
            mz += 1.0;
        }
        if input.is_down(Action::Backward) {
            mz -= 1.0;
        }
        if input.is_down(Action::Right) {
            mx += 1.0;
        }
        if input.is_down(Action::Left) {
            mx -= 1.0;
        }

        let len = (mx * mx + mz * mz).sqrt();
        let moving = len > f32::EPSILON && len.is_finite();

        // Stamina drains only while actually sprint-moving.
        let sprinting = input.is_down(Action::Sprint) && moving && state.stamina > 0.0;
        if sprinting {
            state.stamina = (state.stamina - t.stamina_drain * dt).max(0.0);
        } else {
            state.stamina = (state.stamina + t.stamina_regen * dt).min(t.stamina_max);
        }

        if moving {
            let (mx, mz) = (mx / len, mz / len);
            let (s, c) = camera_yaw.sin_cos();
            let fwd = Vec3::new(s, 0.0, c);
            let right = Vec3::new(c, 0.0, -s);

            let speed = t.walk_speed * if sprinting { t.sprint_multiplier } else { 1.0 };
            state.position += (right * mx + fwd * mz) * speed * dt;
            state.yaw = wrap_angle(camera_yaw);
            state.speed = speed;
        } else {
            state.speed = 0.0;
        }
    }

    fn integrate_vertical(&self, state: &mut AvatarState, input: &InputState, dt: f32) {
        let t = &self.tuning;

        if state.grounded {
            state.position.y = t.ground_height;
            if input.just_pressed(Action::Jump) {
                state.vertical_velocity = t.jump_impulse;
                state.grounded = false;
                state.position.y += state.vertical_velocity * dt;
            }
        } else {
            state.vertical_velocity -= t.gravity * dt;
            state.position.y += state.vertical_velocity * dt;
            if state.position.y <= t.ground_height {
                state.position.y = t.ground_height;
                state.vertical_velocity = 0.0;
                state.grounded = true;
            }
        }
    }

    fn clamp_to_bounds(&self, state: &mut AvatarState) {
        let t = &self.tuning;
        state.position.x = state.position.x.clamp(t.bounds_min[0], t.bounds_max[0]);
        state.position.z = state.position.z.clamp(t.bounds_min[1], t.bounds_max[1]);
    }
}

/// Wrap to (-PI, PI].
pub(crate) fn wrap_angle(a: f32) -> f32 {
    let mut x = a;
    while x > std::f32::consts::PI {
        x -= std::f32::consts::TAU;
    }
    while x < -std::f32::consts::PI {
        x += std::f32::consts::TAU;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::MoverTuning;

    const DT: f32 = 1.0 / 60.0;

    fn vehicle() -> Mover {
        Mover::new(AvatarKind::Vehicle, MoverTuning::default())
    }

    fn walker() -> Mover {
        Mover::new(AvatarKind::Walker, MoverTuning::default())
    }

    fn held(actions: &[Action]) -> InputState {
        let mut input = InputState::default();
        for &a in actions {
            input.press(a);
        }
        input.begin_frame();
        input
    }

    #[test]
    fn friction_decays_speed_within_the_exponential_bound() {
        let mover = vehicle();
        let mut state = AvatarState::at_spawn(mover.tuning());
        state.speed = mover.tuning().max_speed;
        let input = InputState::default();

        let mut prev = state.speed;
        for n in 1..=90 {
            mover.integrate(&mut state, &input, DT, 0.0);
            assert!(state.speed < prev, "speed must strictly decrease");
            assert!(state.speed > 0.0, "pure multiplicative friction never hits zero");
            let bound = mover.tuning().max_speed * mover.tuning().friction.powi(n);
            assert!(state.speed <= bound + 1e-4);
            prev = state.speed;
        }
    }

    #[test]
    fn held_forward_saturates_at_max_speed() {
        let mover = vehicle();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let input = held(&[Action::Forward]);

        // Per-frame accumulate+friction has fixed point accel*f/(1-f), far
        // above max_speed for the default tuning, so the clamp dominates.
        for _ in 0..120 {
            mover.integrate(&mut state, &input, DT, 0.0);
        }
        assert!((state.speed - mover.tuning().max_speed).abs() < 1e-4);
    }

    #[test]
    fn position_never_leaves_world_bounds() {
        let mover = vehicle();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let input = held(&[Action::Forward]);

        // Drive straight for far longer than the room is deep.
        for _ in 0..3000 {
            mover.integrate(&mut state, &input, DT, 0.0);
            let t = mover.tuning();
            assert!(state.position.x >= t.bounds_min[0] && state.position.x <= t.bounds_max[0]);
            assert!(state.position.z >= t.bounds_min[1] && state.position.z <= t.bounds_max[1]);
        }
        assert_eq!(state.position.z, mover.tuning().bounds_max[1]);
    }

    #[test]
    fn steering_flattens_as_speed_approaches_max() {
        let tuning = MoverTuning::default();
        let mover = Mover::new(AvatarKind::Vehicle, tuning.clone());
        let input = held(&[Action::Left]);

        let mut slow = AvatarState::at_spawn(&tuning);
        slow.speed = tuning.max_speed * 0.25;
        let mut fast = slow;
        fast.speed = tuning.max_speed;

        mover.integrate(&mut slow, &input, DT, 0.0);
        mover.integrate(&mut fast, &input, DT, 0.0);

        assert!(slow.yaw > 0.0, "left turn increases yaw");
        assert!(fast.yaw > 0.0);
        assert!(fast.yaw < slow.yaw, "turning is harder when fast");
    }

    #[test]
    fn reversing_flips_the_turn_direction() {
        let tuning = MoverTuning::default();
        let mover = Mover::new(AvatarKind::Vehicle, tuning.clone());
        let input = held(&[Action::Left]);

        let mut state = AvatarState::at_spawn(&tuning);
        state.speed = tuning.min_speed; // backing up
        mover.integrate(&mut state, &input, DT, 0.0);
        assert!(state.yaw < 0.0);
    }

    #[test]
    fn walker_diagonal_is_not_faster() {
        let mover = walker();
        let straight_input = held(&[Action::Forward]);
        let diagonal_input = held(&[Action::Forward, Action::Right]);

        let mut straight = AvatarState::at_spawn(mover.tuning());
        let mut diagonal = AvatarState::at_spawn(mover.tuning());
        mover.integrate(&mut straight, &straight_input, DT, 0.0);
        mover.integrate(&mut diagonal, &diagonal_input, DT, 0.0);

        let spawn = Vec3::from(mover.tuning().spawn);
        let ds = (straight.position - spawn).length();
        let dd = (diagonal.position - spawn).length();
        assert!((ds - dd).abs() < 1e-5);
    }

    #[test]
    fn walker_moves_relative_to_camera_yaw() {
        let mover = walker();
        let input = held(&[Action::Forward]);
        let mut state = AvatarState::at_spawn(mover.tuning());
        let start = state.position;

        let yaw = std::f32::consts::FRAC_PI_2; // camera looks toward +X
        mover.integrate(&mut state, &input, DT, yaw);

        assert!(state.position.x > start.x);
        assert!((state.position.z - start.z).abs() < 1e-5);
        assert!((state.yaw - yaw).abs() < 1e-6);
    }

    #[test]
    fn sprint_drains_stamina_and_rest_regenerates_it() {
        let mover = walker();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let sprint = held(&[Action::Forward, Action::Sprint]);

        for _ in 0..60 {
            mover.integrate(&mut state, &sprint, DT, 0.0);
        }
        let drained = state.stamina;
        assert!(drained < mover.tuning().stamina_max);
        assert!(state.speed > mover.tuning().walk_speed);

        let idle = InputState::default();
        for _ in 0..600 {
            mover.integrate(&mut state, &idle, DT, 0.0);
        }
        assert_eq!(state.stamina, mover.tuning().stamina_max);
    }

    #[test]
    fn empty_stamina_disables_the_sprint_bonus() {
        let mover = walker();
        let mut state = AvatarState::at_spawn(mover.tuning());
        state.stamina = 0.0;
        let sprint = held(&[Action::Forward, Action::Sprint]);

        mover.integrate(&mut state, &sprint, DT, 0.0);
        assert_eq!(state.speed, mover.tuning().walk_speed);
    }

    #[test]
    fn jump_lifts_off_and_lands_with_zero_vertical_velocity() {
        let mover = walker();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let mut input = InputState::default();
        input.press(Action::Jump);

        mover.integrate(&mut state, &input, DT, 0.0);
        assert!(!state.grounded);
        assert!(state.position.y > mover.tuning().ground_height);
        assert_eq!(state.vertical_velocity, mover.tuning().jump_impulse);

        // Holding Space must not re-jump; a ballistic arc takes about
        // 2 * impulse / gravity seconds, pad generously.
        input.begin_frame();
        let frames = (3.0 * mover.tuning().jump_impulse / mover.tuning().gravity / DT) as usize;
        for _ in 0..frames {
            mover.integrate(&mut state, &input, DT, 0.0);
        }
        assert!(state.grounded);
        assert_eq!(state.position.y, mover.tuning().ground_height);
        assert_eq!(state.vertical_velocity, 0.0);
    }

    #[test]
    fn grounded_iff_resting_on_ground_height() {
        let mover = walker();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let mut input = InputState::default();
        input.press(Action::Jump);

        for _ in 0..240 {
            mover.integrate(&mut state, &input, DT, 0.0);
            assert_eq!(
                state.grounded,
                state.position.y == mover.tuning().ground_height
            );
            assert!(state.position.y >= mover.tuning().ground_height);
            input.begin_frame();
        }
    }

    #[test]
    fn bad_dt_frames_are_skipped() {
        let mover = vehicle();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let input = held(&[Action::Forward]);
        let before = state;

        mover.integrate(&mut state, &input, f32::NAN, 0.0);
        mover.integrate(&mut state, &input, -1.0, 0.0);

        assert_eq!(state.position, before.position);
        assert_eq!(state.speed, before.speed);
    }

    #[test]
    fn reset_returns_to_spawn() {
        let mover = vehicle();
        let mut state = AvatarState::at_spawn(mover.tuning());
        let input = held(&[Action::Forward]);
        for _ in 0..30 {
            mover.integrate(&mut state, &input, DT, 0.0);
        }
        state.reset(mover.tuning());
        assert_eq!(state.position, Vec3::from(mover.tuning().spawn));
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.yaw, mover.tuning().spawn_yaw);
        assert!(state.grounded);
    }
}
