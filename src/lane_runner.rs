//! Lane-runner controller chasing a target across three discrete lanes.
//!
//! The runner picks whichever lane is nearest the target's lateral position,
//! eases into it with a first-order lag filter, and holds a fixed distance
//! behind the target on the forward axis while its speed ramps up to a cap.

use glam::Vec3;
use log::debug;
use serde::Serialize;

use crate::constants::{
    BASE_FORWARD_SPEED, CENTRE_LANE_X, LANE_CHANGE_SPEED, LEFT_LANE_X, MAX_FORWARD_SPEED,
    RIGHT_LANE_X, RUNNER_FOLLOW_DISTANCE, SPEED_INCREASE_RATE,
};
use crate::pose::TargetPose;
use crate::vector_math::blend_fraction;

/// Static tuning parameters for a [`LaneRunnerController`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LaneRunnerConfig {
    /// X coordinates of the left, centre, and right lanes.
    pub lanes: [f32; 3],
    /// Per-second rate of the lateral lag filter.
    pub lane_change_speed: f32,
    /// Distance maintained behind the target on the Z axis.
    pub follow_distance: f32,
    /// Forward speed at spawn and after a reset.
    pub base_forward_speed: f32,
    /// Cap on the forward speed ramp.
    pub max_forward_speed: f32,
    /// Forward speed gained per second.
    pub speed_increase_rate: f32,
}

impl Default for LaneRunnerConfig {
    fn default() -> Self {
        Self {
            lanes: [LEFT_LANE_X, CENTRE_LANE_X, RIGHT_LANE_X],
            lane_change_speed: LANE_CHANGE_SPEED,
            follow_distance: RUNNER_FOLLOW_DISTANCE,
            base_forward_speed: BASE_FORWARD_SPEED,
            max_forward_speed: MAX_FORWARD_SPEED,
            speed_increase_rate: SPEED_INCREASE_RATE,
        }
    }
}

impl LaneRunnerConfig {
    /// X coordinate of the left lane.
    #[must_use]
    pub const fn left_lane(&self) -> f32 {
        self.lanes[0]
    }

    /// X coordinate of the centre lane.
    #[must_use]
    pub const fn centre_lane(&self) -> f32 {
        self.lanes[1]
    }

    /// X coordinate of the right lane.
    #[must_use]
    pub const fn right_lane(&self) -> f32 {
        self.lanes[2]
    }
}

/// Chases a target along the track while snapping to discrete lanes.
#[derive(Clone, Debug, Serialize)]
pub struct LaneRunnerController {
    config: LaneRunnerConfig,
    position: Vec3,
    target_lane_x: f32,
    current_forward_speed: f32,
}

impl LaneRunnerController {
    /// Creates a runner at `spawn_position`, aimed at the centre lane and
    /// moving at base forward speed.
    #[must_use]
    pub const fn new(config: LaneRunnerConfig, spawn_position: Vec3) -> Self {
        Self {
            config,
            position: spawn_position,
            target_lane_x: config.lanes[1],
            current_forward_speed: config.base_forward_speed,
        }
    }

    /// Advances the runner by one tick and returns its new position.
    ///
    /// Update order matches the original behaviour: lane selection, forward
    /// motion, lateral easing, then the speed ramp. With no target the tick
    /// is a no-op.
    pub fn tick(&mut self, delta_time: f32, target: Option<&TargetPose>) -> Vec3 {
        debug_assert!(delta_time >= 0.0, "delta_time must be non-negative");
        let Some(pose) = target else {
            return self.position;
        };

        self.select_lane(pose.position.x);
        self.advance(delta_time, pose.position.z);
        self.ease_into_lane(delta_time);
        self.ramp_speed(delta_time);

        self.position
    }

    /// Picks the lane nearest to `target_x`.
    ///
    /// Ties against the centre lane go to the outer lane, left taking
    /// precedence: left wins a left/centre tie, right wins a right/centre
    /// tie but never displaces an already selected left.
    fn select_lane(&mut self, target_x: f32) {
        let to_left = (target_x - self.config.left_lane()).abs();
        let to_centre = (target_x - self.config.centre_lane()).abs();
        let to_right = (target_x - self.config.right_lane()).abs();

        let chosen = if to_left <= to_centre && to_left < to_right {
            self.config.left_lane()
        } else if to_right <= to_centre {
            self.config.right_lane()
        } else {
            self.config.centre_lane()
        };
        if (chosen - self.target_lane_x).abs() > f32::EPSILON {
            debug!("lane change: {} -> {chosen}", self.target_lane_x);
        }
        self.target_lane_x = chosen;
    }

    /// Advances along Z, clamped so the runner never passes the hold point
    /// `target_z - follow_distance`. Once at or ahead of it the position
    /// snaps exactly onto it, which moves the runner backward when the
    /// target decelerates.
    fn advance(&mut self, delta_time: f32, target_z: f32) {
        let hold_z = target_z - self.config.follow_distance;
        if self.position.z < hold_z {
            let stepped = self.position.z + self.current_forward_speed * delta_time;
            self.position.z = stepped.min(hold_z);
        } else {
            self.position.z = hold_z;
        }
    }

    /// First-order lag toward the selected lane. Y is never touched.
    fn ease_into_lane(&mut self, delta_time: f32) {
        let fraction = blend_fraction(self.config.lane_change_speed, delta_time);
        self.position.x += (self.target_lane_x - self.position.x) * fraction;
    }

    /// Ramps forward speed toward the cap; never decreases it.
    fn ramp_speed(&mut self, delta_time: f32) {
        if self.current_forward_speed < self.config.max_forward_speed {
            self.current_forward_speed = (self.current_forward_speed
                + self.config.speed_increase_rate * delta_time)
                .min(self.config.max_forward_speed);
        }
    }

    /// Resets the forward speed back to its base value.
    pub fn reset_speed(&mut self) {
        self.current_forward_speed = self.config.base_forward_speed;
    }

    /// Current runner position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// X coordinate of the lane the runner is easing into.
    #[must_use]
    pub const fn target_lane_x(&self) -> f32 {
        self.target_lane_x
    }

    /// Current forward speed in units per second.
    #[must_use]
    pub const fn current_forward_speed(&self) -> f32 {
        self.current_forward_speed
    }
}
