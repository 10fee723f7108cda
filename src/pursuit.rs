//! Pursuit controller steering a follower toward a point behind its target.
//!
//! The controller is pure per-tick logic: it owns its position and
//! orientation, is fed a [`TargetPose`] snapshot each tick, and reports
//! whether the target was caught. Height is locked to a configured plane so
//! the follower never drifts vertically.

use glam::{Quat, Vec3};
use log::info;
use serde::Serialize;

use crate::constants::{
    CATCH_DISTANCE, CATCH_UP_MULTIPLIER, PURSUIT_BASE_SPEED, PURSUIT_FIXED_Y,
    PURSUIT_FOLLOW_DISTANCE, ROTATION_BLEND_RATE,
};
use crate::pose::TargetPose;
use crate::vector_math::{blend_fraction, planar_distance, step_towards};

/// Static tuning parameters for a [`PursuitController`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PursuitConfig {
    /// Movement speed in units per second while not boosted.
    pub base_speed: f32,
    /// Planar distance at which the target counts as caught.
    pub catch_distance: f32,
    /// Distance maintained behind the target along its forward axis.
    pub follow_distance: f32,
    /// Multiplier applied to `base_speed` while boosted.
    pub catch_up_multiplier: f32,
    /// Height plane the follower is locked to.
    pub fixed_y: f32,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            base_speed: PURSUIT_BASE_SPEED,
            catch_distance: CATCH_DISTANCE,
            follow_distance: PURSUIT_FOLLOW_DISTANCE,
            catch_up_multiplier: CATCH_UP_MULTIPLIER,
            fixed_y: PURSUIT_FIXED_Y,
        }
    }
}

/// Result of one pursuit tick.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PursuitOutput {
    /// Follower position after the tick.
    pub position: Vec3,
    /// Follower orientation after the tick.
    pub rotation: Quat,
    /// Whether the follower is within catch distance of the target.
    ///
    /// Level-triggered: reported every tick the condition holds. Callers
    /// that react once must latch it themselves.
    pub caught: bool,
    /// Planar distance to the target after the move, infinite when the
    /// tick had no target.
    pub distance: f32,
}

/// Steers a follower toward a point offset behind a moving target.
#[derive(Clone, Debug, Serialize)]
pub struct PursuitController {
    config: PursuitConfig,
    position: Vec3,
    rotation: Quat,
    current_speed: f32,
    boosted: bool,
}

impl PursuitController {
    /// Creates a controller at `spawn_position` with the follower's height
    /// snapped onto the configured plane.
    #[must_use]
    pub fn new(config: PursuitConfig, spawn_position: Vec3, spawn_rotation: Quat) -> Self {
        let position = Vec3::new(spawn_position.x, config.fixed_y, spawn_position.z);
        Self {
            config,
            position,
            rotation: spawn_rotation,
            current_speed: config.base_speed,
            boosted: false,
        }
    }

    /// Advances the follower by one tick.
    ///
    /// Moves toward a point `follow_distance` behind the target along its
    /// forward axis (on the fixed-Y plane), by at most
    /// `current_speed * delta_time`, then blends the orientation toward the
    /// target's. With no target the tick is a no-op: state is unchanged and
    /// no catch is reported.
    pub fn tick(&mut self, delta_time: f32, target: Option<&TargetPose>) -> PursuitOutput {
        debug_assert!(delta_time >= 0.0, "delta_time must be non-negative");
        let Some(pose) = target else {
            return PursuitOutput {
                position: self.position,
                rotation: self.rotation,
                caught: false,
                distance: f32::INFINITY,
            };
        };

        let mut desired = pose.position - pose.forward * self.config.follow_distance;
        desired.y = self.config.fixed_y;

        self.position = step_towards(self.position, desired, self.current_speed * delta_time);
        self.rotation = self
            .rotation
            .slerp(pose.rotation, blend_fraction(ROTATION_BLEND_RATE, delta_time));

        let distance = planar_distance(self.position, pose.position, self.config.fixed_y);
        let caught = distance <= self.config.catch_distance;
        if caught {
            info!("target caught at distance {distance:.2}");
        }

        PursuitOutput {
            position: self.position,
            rotation: self.rotation,
            caught,
            distance,
        }
    }

    /// Switches to catch-up speed. Idempotent.
    pub fn boost(&mut self) {
        self.boosted = true;
        self.current_speed = self.config.base_speed * self.config.catch_up_multiplier;
    }

    /// Restores base speed. Idempotent regardless of prior boost state.
    pub fn normalize(&mut self) {
        self.boosted = false;
        self.current_speed = self.config.base_speed;
    }

    /// Current follower position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current follower orientation.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Current movement speed in units per second.
    #[must_use]
    pub const fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Whether catch-up boost is active.
    #[must_use]
    pub const fn is_boosted(&self) -> bool {
        self.boosted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_at(position: Vec3) -> TargetPose {
        TargetPose::new(position, Quat::IDENTITY, Vec3::Z)
    }

    #[test]
    fn spawn_height_snaps_to_fixed_plane() {
        let controller = PursuitController::new(
            PursuitConfig::default(),
            Vec3::new(1.0, 5.0, -2.0),
            Quat::IDENTITY,
        );
        assert_eq!(controller.position().y, 0.0);
    }

    #[test]
    fn tick_without_target_is_a_no_op() {
        let mut controller =
            PursuitController::new(PursuitConfig::default(), Vec3::ZERO, Quat::IDENTITY);
        let before = controller.position();
        let out = controller.tick(1.0, None);
        assert_eq!(out.position, before);
        assert!(!out.caught);
    }

    #[test]
    fn step_clamps_onto_desired_point() {
        // base speed 7 covers the 6 units to the desired point in one tick
        let mut controller =
            PursuitController::new(PursuitConfig::default(), Vec3::ZERO, Quat::IDENTITY);
        let target = pose_at(Vec3::new(0.0, 0.0, 10.0));
        let out = controller.tick(1.0, Some(&target));
        assert!((out.position.z - 6.0).abs() < 1e-5);
        assert!((out.position.x).abs() < 1e-5);
    }

    #[test]
    fn boost_and_normalize_toggle_speed() {
        let config = PursuitConfig::default();
        let mut controller = PursuitController::new(config, Vec3::ZERO, Quat::IDENTITY);
        controller.boost();
        assert!(controller.is_boosted());
        assert!((controller.current_speed() - 10.5).abs() < 1e-6);
        controller.boost();
        assert!((controller.current_speed() - 10.5).abs() < 1e-6);
        controller.normalize();
        assert!(!controller.is_boosted());
        assert!((controller.current_speed() - config.base_speed).abs() < 1e-6);
    }

    #[test]
    fn catch_reported_within_threshold() {
        let mut controller =
            PursuitController::new(PursuitConfig::default(), Vec3::ZERO, Quat::IDENTITY);
        let target = pose_at(Vec3::new(0.0, 0.0, 1.0));
        let out = controller.tick(0.0, Some(&target));
        assert!(out.caught);
        assert!((out.distance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_infinite_without_a_target() {
        let mut controller =
            PursuitController::new(PursuitConfig::default(), Vec3::ZERO, Quat::IDENTITY);
        let out = controller.tick(1.0, None);
        assert!(out.distance.is_infinite());
    }
}
