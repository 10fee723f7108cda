//! Game-state publishers and the notifications they raise.
//!
//! [`PlayerState`] and [`GameSession`] are the pull-based sources the HUD
//! reads from; the event types below are their push-based notifications,
//! delivered synchronously through Bevy observers. Mutators on the resources
//! only change state — raising the matching event is the caller's job, which
//! keeps delivery at most once per occurrence.

use bevy::prelude::{Entity, Event, Resource};
use log::info;
use serde::Serialize;

/// Published player state: health and collected coins.
#[derive(Resource, Clone, Copy, Debug, Serialize)]
pub struct PlayerState {
    /// Remaining health points, one heart each.
    pub health: u32,
    /// Coins collected this run.
    pub coin_count: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: 3,
            coin_count: 0,
        }
    }
}

/// Published session state: score, high-score bookkeeping, and pause flag.
#[derive(Resource, Clone, Copy, Debug, Default, Serialize)]
pub struct GameSession {
    /// Current score.
    pub score: u64,
    /// Best score from previous runs.
    pub high_score: u64,
    /// Set once the current score has exceeded `high_score`.
    pub high_score_beaten: bool,
    /// Whether the session is paused.
    pub paused: bool,
    /// Set when the run has ended.
    pub over: bool,
}

impl GameSession {
    /// One-way pause entry point delegated to by the HUD's pause control.
    pub fn pause(&mut self) {
        info!("game paused");
        self.paused = true;
    }
}

/// Raised after the player's health decreased.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthChanged;

/// Raised after the player's coin count changed.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCountChanged;

/// Raised after the score changed; carries the new value.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreChanged {
    /// Score after the change.
    pub score: u64,
}

/// Raised the moment the current score first exceeds the stored high score.
#[derive(Event, Debug, Clone, Copy)]
pub struct HighScoreBeaten;

/// Raised when the run ends.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameEnd;

/// Raised when the pause control is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct PauseRequested;

/// Raised by the pursuit layer every tick a pursuer is within catch range.
///
/// Level-triggered with no de-duplication; listeners reacting once must
/// latch it themselves.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerCaught {
    /// The pursuer that reached the target.
    pub pursuer: Entity,
    /// Planar distance to the target on the tick the catch was reported.
    pub distance: f32,
}
