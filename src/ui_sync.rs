//! Observers keeping the HUD widget model in sync with the publishers.
//!
//! [`UiPlugin`] refuses to wire anything when a publisher resource is
//! missing: the handlers assume the sources exist, so a partial binding
//! would fail later in stranger ways. The failure surfaces as a
//! [`ChaseSyncError`] init event and the plugin installs no model.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::info;

use crate::chase_sync::{log_chase_sync_error, ChasePlugin, ChaseSyncError, ChaseSyncErrorContext};
use crate::game_state::{
    CoinCountChanged, GameEnd, GameSession, HealthChanged, HighScoreBeaten, PauseRequested,
    PlayerState, ScoreChanged,
};
use crate::ui::UiModel;

/// Observer entities registered by [`UiPlugin`], kept for explicit
/// unsubscription.
#[derive(Resource, Debug, Default)]
pub struct UiObservers(Vec<Entity>);

impl UiObservers {
    /// Despawns every registered observer, detaching the HUD from its
    /// publishers. The model keeps its last state.
    pub fn unsubscribe(&mut self, world: &mut World) {
        info!("detaching {} HUD observers", self.0.len());
        for observer in self.0.drain(..) {
            world.despawn(observer);
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_health_changed(_: On<HealthChanged>, player: Res<PlayerState>, mut model: ResMut<UiModel>) {
    model.apply_health(player.health);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_coin_count_changed(
    _: On<CoinCountChanged>,
    player: Res<PlayerState>,
    mut model: ResMut<UiModel>,
) {
    model.set_coins(player.coin_count);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_score_changed(event: On<ScoreChanged>, mut model: ResMut<UiModel>) {
    model.set_score(event.event().score);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_high_score_beaten(_: On<HighScoreBeaten>, mut model: ResMut<UiModel>) {
    model.mark_high_score();
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_game_end(_: On<GameEnd>, mut model: ResMut<UiModel>) {
    model.hide();
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_pause_requested(_: On<PauseRequested>, mut session: ResMut<GameSession>) {
    session.pause();
}

/// Bevy plugin binding the HUD model to the game-state publishers.
#[derive(Default)]
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<ChasePlugin>() {
            app.add_observer(log_chase_sync_error);
        }

        if !app.world().contains_resource::<PlayerState>()
            || !app.world().contains_resource::<GameSession>()
        {
            app.world_mut().trigger(ChaseSyncError::new(
                ChaseSyncErrorContext::Init,
                "UiPlugin requires PlayerState and GameSession publishers",
            ));
            return;
        }

        // Initial paint from the publishers' current snapshot.
        let player = *app.world().resource::<PlayerState>();
        let session = *app.world().resource::<GameSession>();
        let mut model = UiModel::default();
        model.apply_health(player.health);
        model.set_coins(player.coin_count);
        model.set_score(session.score);
        app.insert_resource(model);

        let observers = vec![
            app.world_mut().add_observer(on_health_changed).id(),
            app.world_mut().add_observer(on_coin_count_changed).id(),
            app.world_mut().add_observer(on_score_changed).id(),
            app.world_mut().add_observer(on_high_score_beaten).id(),
            app.world_mut().add_observer(on_game_end).id(),
            app.world_mut().add_observer(on_pause_requested).id(),
        ];
        app.insert_resource(UiObservers(observers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_without_publishers_installs_no_model() {
        let mut app = App::new();
        app.add_plugins(UiPlugin);
        assert!(!app.world().contains_resource::<UiModel>());
        assert!(!app.world().contains_resource::<UiObservers>());
    }

    #[rstest]
    fn plugin_seeds_model_from_publisher_snapshot() {
        let mut app = App::new();
        app.insert_resource(PlayerState {
            health: 2,
            coin_count: 7,
        });
        app.insert_resource(GameSession {
            score: 120,
            ..GameSession::default()
        });
        app.add_plugins(UiPlugin);
        let model = app.world().resource::<UiModel>();
        assert_eq!(model.hearts.active().len(), 2);
        assert_eq!(model.coins.text, "7");
        assert_eq!(model.score.text, "120");
    }
}
