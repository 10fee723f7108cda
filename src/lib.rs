//! Library crate providing the Strider chase simulation.
//!
//! Two pure per-tick motion controllers — a pursuit follower and a
//! lane-snapping runner — plus a HUD widget model kept in sync with
//! game-state publishers. A thin Bevy plugin layer drives the controllers
//! from `Transform` data and routes notifications through observers; the
//! controllers themselves never touch the ECS.
pub mod chase_sync;
pub mod components;
pub mod constants;
pub mod game_state;
pub mod lane_runner;
pub mod logging;
pub mod pose;
pub mod pursuit;
pub mod ui;
pub mod ui_sync;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use chase_sync::{ChasePlugin, ChaseSyncError, ChaseSyncErrorContext};
pub use components::{ChaseTarget, LaneRunner, Pursuer};
pub use game_state::{
    CoinCountChanged, GameEnd, GameSession, HealthChanged, HighScoreBeaten, PauseRequested,
    PlayerCaught, PlayerState, ScoreChanged,
};
pub use lane_runner::{LaneRunnerConfig, LaneRunnerController};
pub use logging::init as init_logging;
pub use pose::TargetPose;
pub use pursuit::{PursuitConfig, PursuitController, PursuitOutput};
pub use ui::UiModel;
pub use ui_sync::{UiObservers, UiPlugin};
pub use vector_math::{blend_fraction, planar_distance, step_towards};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use strider::prelude::*;
    //! ```

    pub use crate::chase_sync::ChasePlugin;
    pub use crate::components::{ChaseTarget, LaneRunner, Pursuer};
    pub use crate::game_state::{GameSession, PlayerCaught, PlayerState};
    pub use crate::lane_runner::{LaneRunnerConfig, LaneRunnerController};
    pub use crate::pose::TargetPose;
    pub use crate::pursuit::{PursuitConfig, PursuitController};
    pub use crate::ui::UiModel;
    pub use crate::ui_sync::UiPlugin;
}
