//! Systems bridging Bevy ECS transforms with the pure controllers.

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use log::debug;

use crate::components::{ChaseTarget, LaneRunner, Pursuer};
use crate::game_state::PlayerCaught;
use crate::pose::TargetPose;

use super::{ChaseSyncError, ChaseSyncErrorContext};

/// Samples the single [`ChaseTarget`] transform for this tick.
///
/// A missing target is benign and yields `None`; more than one target is a
/// wiring mistake reported through a [`ChaseSyncError`] event.
fn sample_target(
    target_query: &Query<'_, '_, &Transform, With<ChaseTarget>>,
    commands: &mut Commands<'_, '_>,
) -> Option<TargetPose> {
    match target_query.single() {
        Ok(transform) => Some(TargetPose::from_transform(transform)),
        Err(QuerySingleError::NoEntities(_)) => None,
        Err(QuerySingleError::MultipleEntities(_)) => {
            commands.trigger(ChaseSyncError::new(
                ChaseSyncErrorContext::Tick,
                "more than one ChaseTarget entity",
            ));
            None
        }
    }
}

/// Ticks every [`Pursuer`] toward the chase target and mirrors the result
/// back onto its `Transform`, raising [`PlayerCaught`] on caught ticks.
pub fn tick_pursuit_system(
    time: Res<Time>,
    target_query: Query<&Transform, With<ChaseTarget>>,
    mut pursuer_query: Query<(Entity, &mut Pursuer, &mut Transform), Without<ChaseTarget>>,
    mut commands: Commands,
) {
    let pose = sample_target(&target_query, &mut commands);
    let delta = time.delta_secs();

    for (entity, mut pursuer, mut transform) in &mut pursuer_query {
        let output = pursuer.controller.tick(delta, pose.as_ref());
        transform.translation = output.position;
        transform.rotation = output.rotation;
        if output.caught {
            debug!(
                "pursuer {entity:?} caught the target at distance {:.2}",
                output.distance
            );
            commands.trigger(PlayerCaught {
                pursuer: entity,
                distance: output.distance,
            });
        }
    }
}

/// Ticks every [`LaneRunner`] and mirrors the new position back onto its
/// `Transform`. Orientation is left alone; runners always face down-track.
pub fn tick_lane_runner_system(
    time: Res<Time>,
    target_query: Query<&Transform, With<ChaseTarget>>,
    mut runner_query: Query<(&mut LaneRunner, &mut Transform), Without<ChaseTarget>>,
    mut commands: Commands,
) {
    let pose = sample_target(&target_query, &mut commands);
    let delta = time.delta_secs();

    for (mut runner, mut transform) in &mut runner_query {
        transform.translation = runner.controller.tick(delta, pose.as_ref());
    }
}
