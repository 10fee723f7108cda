//! Tuning constants shared by the pursuit and lane-runner controllers.
//!
//! These values are the defaults baked into the controller configs; callers
//! override them per instance through [`crate::pursuit::PursuitConfig`] and
//! [`crate::lane_runner::LaneRunnerConfig`].

/// Base chase speed of the pursuer in units per second.
pub const PURSUIT_BASE_SPEED: f32 = 7.0;
/// Distance at which the pursuer counts as having caught its target.
pub const CATCH_DISTANCE: f32 = 1.5;
/// Distance the pursuer keeps behind the target along its forward axis.
pub const PURSUIT_FOLLOW_DISTANCE: f32 = 4.0;
/// Speed multiplier applied while the pursuer is catching up.
pub const CATCH_UP_MULTIPLIER: f32 = 1.5;
/// Height plane the pursuer is locked to.
pub const PURSUIT_FIXED_Y: f32 = 0.0;
/// Per-second rate for blending the pursuer's orientation toward the
/// target's. The per-tick fraction is `rate * delta_time`, clamped to one.
pub const ROTATION_BLEND_RATE: f32 = 10.0;

/// X coordinate of the left lane.
pub const LEFT_LANE_X: f32 = -3.0;
/// X coordinate of the centre lane. Runners spawn here.
pub const CENTRE_LANE_X: f32 = 0.0;
/// X coordinate of the right lane.
pub const RIGHT_LANE_X: f32 = 3.0;
/// Per-second rate of the lateral lane-change lag filter.
pub const LANE_CHANGE_SPEED: f32 = 10.0;
/// Distance the runner keeps behind the target along the forward (Z) axis.
pub const RUNNER_FOLLOW_DISTANCE: f32 = 5.0;
/// Forward speed the runner starts at, in units per second.
pub const BASE_FORWARD_SPEED: f32 = 8.0;
/// Cap on the runner's forward speed.
pub const MAX_FORWARD_SPEED: f32 = 15.0;
/// Forward speed gained per second until the cap is reached.
pub const SPEED_INCREASE_RATE: f32 = 0.5;
