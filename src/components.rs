//! ECS component types used by the chase simulation.
//! Thin wrappers binding the pure controllers to entities, plus the marker
//! identifying the entity being chased.
use bevy::prelude::*;
use serde::Serialize;

use crate::lane_runner::LaneRunnerController;
use crate::pursuit::PursuitController;

/// Marks the single entity the controllers chase.
#[derive(Component, Debug, Default, Serialize)]
pub struct ChaseTarget;

/// Entity driven by a [`PursuitController`].
#[derive(Component, Debug, Serialize)]
pub struct Pursuer {
    /// The pure controller owning this entity's motion state.
    pub controller: PursuitController,
}

/// Entity driven by a [`LaneRunnerController`].
#[derive(Component, Debug, Serialize)]
pub struct LaneRunner {
    /// The pure controller owning this entity's motion state.
    pub controller: LaneRunnerController,
}
