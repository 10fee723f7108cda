//! Synchronisation layer driving the pure controllers from Bevy ECS.
//!
//! This module re-exports the plugin and the per-tick systems that bridge
//! `Transform` data to [`crate::pursuit`] and [`crate::lane_runner`].

mod plugin;
mod systems;

pub(crate) use plugin::log_chase_sync_error;
pub use plugin::{ChasePlugin, ChaseSyncError, ChaseSyncErrorContext};
pub use systems::{tick_lane_runner_system, tick_pursuit_system};
