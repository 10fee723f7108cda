//! Bevy plugin wiring the chase tick systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::error;
use thiserror::Error;

use super::{tick_lane_runner_system, tick_pursuit_system};

/// Context carried by [`ChaseSyncError`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseSyncErrorContext {
    /// Failure surfaced while initialising a plugin.
    Init,
    /// Failure surfaced while ticking the controllers.
    Tick,
}

/// Event raised when chase synchronisation hits an error path.
///
/// Observers log these events so diagnostics stay visible in headless runs
/// where no render-side error reporting exists.
#[derive(Event, Debug, Clone, Error)]
#[error("{context:?}: {detail}")]
pub struct ChaseSyncError {
    /// Where the failure occurred.
    pub context: ChaseSyncErrorContext,
    /// Description of the underlying error.
    pub detail: String,
}

impl ChaseSyncError {
    /// Convenience constructor used by systems to emit error events.
    pub fn new(context: ChaseSyncErrorContext, detail: impl Into<String>) -> Self {
        Self {
            context,
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_chase_sync_error(event: On<ChaseSyncError>) {
    let ChaseSyncError { context, detail } = event.event();
    error!("chase sync error during {context:?}: {detail}");
}

/// Bevy plugin installing the per-tick controller systems.
#[derive(Default)]
pub struct ChasePlugin;

impl Plugin for ChasePlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_chase_sync_error);
        app.add_systems(
            Update,
            (tick_pursuit_system, tick_lane_runner_system).chain(),
        );
    }
}
