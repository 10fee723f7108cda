//! Tests for the HUD binding plugin: observer wiring, idempotent handlers,
//! pause delegation, and the fatal missing-publisher case.

use bevy::prelude::*;
use strider::game_state::{
    CoinCountChanged, GameEnd, GameSession, HealthChanged, HighScoreBeaten, PauseRequested,
    PlayerState, ScoreChanged,
};
use strider::ui::{UiModel, RECORD_TEXT_COLOR};
use strider::ui_sync::{UiObservers, UiPlugin};

fn bound_app() -> App {
    let mut app = App::new();
    app.insert_resource(PlayerState::default());
    app.insert_resource(GameSession::default());
    app.add_plugins(UiPlugin);
    app
}

#[test]
fn missing_publishers_abort_the_binding() {
    let mut app = App::new();
    app.insert_resource(PlayerState::default());
    // GameSession deliberately absent
    app.add_plugins(UiPlugin);
    assert!(!app.world().contains_resource::<UiModel>());
}

#[test]
fn health_notification_rebuilds_the_heart_bar() {
    let mut app = bound_app();
    app.world_mut().resource_mut::<PlayerState>().health = 1;
    app.world_mut().trigger(HealthChanged);
    let model = app.world().resource::<UiModel>();
    assert_eq!(model.hearts.active().len(), 1);
    assert!(model.hearts.active().iter().all(|heart| heart.visible));
}

#[test]
fn coin_notification_pulls_the_current_count() {
    let mut app = bound_app();
    app.world_mut().resource_mut::<PlayerState>().coin_count = 12;
    app.world_mut().trigger(CoinCountChanged);
    assert_eq!(app.world().resource::<UiModel>().coins.text, "12");
}

#[test]
fn score_notification_carries_its_payload() {
    let mut app = bound_app();
    app.world_mut().trigger(ScoreChanged { score: 314 });
    assert_eq!(app.world().resource::<UiModel>().score.text, "314");
}

#[test]
fn high_score_notification_shows_banner_and_recolours_score() {
    let mut app = bound_app();
    app.world_mut().trigger(HighScoreBeaten);
    app.world_mut().trigger(HighScoreBeaten);
    let model = app.world().resource::<UiModel>();
    assert!(model.new_high_banner.visible);
    assert_eq!(model.score.color, RECORD_TEXT_COLOR);
}

#[test]
fn game_end_hides_the_hud_root() {
    let mut app = bound_app();
    app.world_mut().trigger(GameEnd);
    assert!(!app.world().resource::<UiModel>().root_visible);
}

#[test]
fn pause_request_delegates_to_the_session() {
    let mut app = bound_app();
    app.world_mut().trigger(PauseRequested);
    assert!(app.world().resource::<GameSession>().paused);
}

#[test]
fn unsubscribing_detaches_every_handler() {
    let mut app = bound_app();
    let mut observers = app
        .world_mut()
        .remove_resource::<UiObservers>()
        .expect("missing UiObservers");
    observers.unsubscribe(app.world_mut());

    app.world_mut().trigger(ScoreChanged { score: 999 });
    app.world_mut().trigger(GameEnd);
    let model = app.world().resource::<UiModel>();
    assert_ne!(model.score.text, "999");
    assert!(model.root_visible);
}
