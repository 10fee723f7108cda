//! Headless demo driver for the Strider chase simulation.
//!
//! Runs a scripted chase at a fixed timestep: the target runs down the
//! track weaving between lanes, turns around late in the run, and the
//! boosted pursuer catches it, ending the run and hiding the HUD.
use std::time::Duration;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use clap::Parser;
use log::info;

use strider::prelude::*;
use strider::{init_logging, GameEnd, HighScoreBeaten, ScoreChanged};

/// Seconds advanced per simulation tick.
const TICK_SECONDS: f32 = 1.0 / 60.0;
/// Forward speed of the scripted target in units per second.
const TARGET_SPEED: f32 = 9.0;
/// Sim time at which the target turns to face its pursuer.
const SHOWDOWN_AT: f32 = 8.0;

/// A lane-runner pursuit simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Maximum number of simulation ticks to run
    #[arg(short, long, default_value_t = 900)]
    ticks: u32,
}

/// Moves the target along its forward axis, weaving across the lanes.
fn drive_target(time: Res<Time>, mut query: Query<&mut Transform, With<ChaseTarget>>) {
    for mut transform in &mut query {
        let step = transform.forward().as_vec3() * TARGET_SPEED * time.delta_secs();
        transform.translation += step;
        transform.translation.x = 3.0 * (time.elapsed_secs() * 0.8).sin();
    }
}

/// Scores the run by distance travelled and raises score notifications.
fn award_score(
    mut session: ResMut<GameSession>,
    query: Query<&Transform, With<ChaseTarget>>,
    mut commands: Commands,
) {
    let Ok(transform) = query.single() else {
        return;
    };
    let score = transform.translation.z.max(0.0) as u64;
    if score != session.score {
        session.score = score;
        commands.trigger(ScoreChanged { score });
        if !session.high_score_beaten && score > session.high_score {
            session.high_score_beaten = true;
            commands.trigger(HighScoreBeaten);
        }
    }
}

/// One-shot script: late in the run the target turns around and the
/// pursuer gets its catch-up boost.
fn script_showdown(
    time: Res<Time>,
    mut done: Local<bool>,
    mut targets: Query<&mut Transform, With<ChaseTarget>>,
    mut pursuers: Query<&mut Pursuer>,
) {
    if *done || time.elapsed_secs() < SHOWDOWN_AT {
        return;
    }
    *done = true;
    for mut transform in &mut targets {
        transform.look_to(Vec3::NEG_Z, Vec3::Y);
    }
    for mut pursuer in &mut pursuers {
        pursuer.controller.boost();
    }
    info!("target turned to face its pursuer");
}

/// Ends the run the first time a pursuer reports a catch.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn end_run_on_catch(
    event: On<PlayerCaught>,
    mut session: ResMut<GameSession>,
    mut commands: Commands,
) {
    if !session.over {
        let PlayerCaught { pursuer, distance } = event.event();
        info!("pursuer {pursuer:?} ended the run at distance {distance:.2}");
        session.over = true;
        commands.trigger(GameEnd);
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new();
    app.init_resource::<Time>()
        .insert_resource(PlayerState::default())
        .insert_resource(GameSession {
            high_score: 25,
            ..GameSession::default()
        })
        .add_plugins(ChasePlugin)
        .add_plugins(UiPlugin)
        .add_systems(Update, (drive_target, award_score, script_showdown))
        .add_observer(end_run_on_catch);

    app.world_mut().spawn((
        ChaseTarget,
        Transform::from_xyz(0.0, 0.0, 10.0).looking_to(Vec3::Z, Vec3::Y),
    ));
    app.world_mut().spawn((
        Pursuer {
            controller: PursuitController::new(
                PursuitConfig::default(),
                Vec3::ZERO,
                Quat::IDENTITY,
            ),
        },
        Transform::default(),
    ));
    app.world_mut().spawn((
        LaneRunner {
            controller: LaneRunnerController::new(
                LaneRunnerConfig::default(),
                Vec3::new(0.0, 0.0, -5.0),
            ),
        },
        Transform::from_xyz(0.0, 0.0, -5.0),
    ));

    for _ in 0..args.ticks {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(TICK_SECONDS));
        app.update();
        if app.world().resource::<GameSession>().over {
            break;
        }
    }

    let session = app.world().resource::<GameSession>();
    let model = app.world().resource::<UiModel>();
    info!(
        "run finished: score {}, high score beaten: {}, HUD visible: {}, caught: {}",
        session.score, session.high_score_beaten, model.root_visible, session.over
    );
}
