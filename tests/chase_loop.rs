//! Full-loop tests running the chase plugin inside a Bevy app with a
//! manually advanced clock.

use std::time::Duration;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use strider::prelude::*;

#[derive(Resource, Default)]
struct CaughtLog {
    count: u32,
    last_distance: f32,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn record_catches(event: On<PlayerCaught>, mut log: ResMut<CaughtLog>) {
    log.count += 1;
    log.last_distance = event.event().distance;
}

fn chase_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.init_resource::<CaughtLog>();
    app.add_plugins(ChasePlugin);
    app.add_observer(record_catches);
    app
}

fn tick(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

fn spawn_pursuer(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Pursuer {
                controller: PursuitController::new(
                    PursuitConfig::default(),
                    position,
                    Quat::IDENTITY,
                ),
            },
            Transform::from_translation(position),
        ))
        .id()
}

#[test]
fn pursuer_settles_at_the_follow_point_behind_the_target() {
    let mut app = chase_app();
    app.world_mut().spawn((
        ChaseTarget,
        Transform::from_xyz(0.0, 0.0, 10.0).looking_to(Vec3::Z, Vec3::Y),
    ));
    let pursuer = spawn_pursuer(&mut app, Vec3::ZERO);

    for _ in 0..20 {
        tick(&mut app, 0.1);
    }

    let transform = app
        .world()
        .get::<Transform>(pursuer)
        .expect("missing Transform");
    // forward is +Z, so the follow point sits at z = 10 - 4 = 6
    assert!((transform.translation.z - 6.0).abs() < 1e-3);
}

#[test]
fn caught_event_is_level_triggered() {
    let mut app = chase_app();
    app.world_mut()
        .spawn((ChaseTarget, Transform::from_xyz(0.0, 0.0, 1.0)));
    spawn_pursuer(&mut app, Vec3::ZERO);

    tick(&mut app, 0.0);
    assert_eq!(app.world().resource::<CaughtLog>().count, 1);
    tick(&mut app, 0.0);
    tick(&mut app, 0.0);
    let log = app.world().resource::<CaughtLog>();
    assert_eq!(log.count, 3);
    // event payload carries the planar distance measured on the catch tick
    assert!((log.last_distance - 1.0).abs() < 1e-5);
}

#[test]
fn no_target_means_no_motion_and_no_events() {
    let mut app = chase_app();
    let pursuer = spawn_pursuer(&mut app, Vec3::new(1.0, 0.0, 2.0));
    for _ in 0..5 {
        tick(&mut app, 0.1);
    }
    let transform = app
        .world()
        .get::<Transform>(pursuer)
        .expect("missing Transform");
    assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 2.0));
    assert_eq!(app.world().resource::<CaughtLog>().count, 0);
}

#[test]
fn boosted_pursuer_closes_faster_than_a_normal_one() {
    let mut app = chase_app();
    app.world_mut().spawn((
        ChaseTarget,
        Transform::from_xyz(0.0, 0.0, 60.0).looking_to(Vec3::Z, Vec3::Y),
    ));
    let normal = spawn_pursuer(&mut app, Vec3::ZERO);
    let boosted = spawn_pursuer(&mut app, Vec3::ZERO);
    if let Some(mut pursuer) = app.world_mut().get_mut::<Pursuer>(boosted) {
        pursuer.controller.boost();
    }

    for _ in 0..10 {
        tick(&mut app, 0.1);
    }

    let normal_z = app
        .world()
        .get::<Transform>(normal)
        .expect("missing Transform")
        .translation
        .z;
    let boosted_z = app
        .world()
        .get::<Transform>(boosted)
        .expect("missing Transform")
        .translation
        .z;
    assert!(boosted_z > normal_z);
}
