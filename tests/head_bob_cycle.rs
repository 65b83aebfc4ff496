use std::time::Duration;

use bevy::prelude::*;
use head_bob::core::components::{Health, MovementInput, PlayerMotor};
use head_bob::core::events::HeadBobTransition;
use head_bob::core::head_bob_plugin::HeadBobPlugin;
use head_bob::core::head_bobber::{HeadBobber, MotionState};
use head_bob::management::settings::HeadBobSettings;
use head_bob::systems::head_bob::HeadBobSet;

const REST: Vec3 = Vec3::new(0.0, 1.6, 0.0);
const FRAME: f32 = 1.0 / 60.0;

#[derive(Resource, Default)]
struct SeenTransitions(Vec<HeadBobTransition>);

fn record_transitions(
    mut reader: EventReader<HeadBobTransition>,
    mut seen: ResMut<SeenTransitions>,
) {
    seen.0.extend(reader.read().copied());
}

fn test_app(health: f32) -> (App, Entity, Entity) {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<Time<Virtual>>()
        .init_resource::<SeenTransitions>()
        .add_plugins(HeadBobPlugin)
        .add_systems(Update, record_transitions.after(HeadBobSet));

    let mut camera = Entity::PLACEHOLDER;
    let player = app
        .world_mut()
        .spawn((
            PlayerMotor {
                grounded: true,
                move_direction: Vec3::new(0.0, 0.0, 1.0),
                ..default()
            },
            Health { current: health },
            Transform::default(),
        ))
        .with_children(|parent| {
            camera = parent
                .spawn((HeadBobber::default(), Transform::from_translation(REST)))
                .id();
        })
        .id();

    (app, player, camera)
}

fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(FRAME));
        app.update();
    }
}

fn set_intent(app: &mut App, vertical: f32) {
    app.world_mut().resource_mut::<MovementInput>().vertical = vertical;
}

fn camera_translation(app: &App, camera: Entity) -> Vec3 {
    app.world().get::<Transform>(camera).unwrap().translation
}

#[test]
fn start_move_stop_returns_to_rest() {
    let (mut app, _, camera) = test_app(100.0);

    step(&mut app, 1);
    assert_eq!(
        app.world().get::<HeadBobber>(camera).unwrap().rest_position(),
        Some(REST)
    );
    assert_eq!(camera_translation(&app, camera), REST);

    set_intent(&mut app, 1.0);
    step(&mut app, 120);
    assert_ne!(camera_translation(&app, camera), REST);
    assert!(camera_translation(&app, camera).y >= REST.y - 1e-6);
    assert_eq!(
        app.world().get::<HeadBobber>(camera).unwrap().motion_state(),
        MotionState::Active
    );

    set_intent(&mut app, 0.0);
    step(&mut app, 40);
    assert_eq!(camera_translation(&app, camera), REST);

    let bobber = app.world().get::<HeadBobber>(camera).unwrap();
    assert_eq!(bobber.motion_state(), MotionState::Idle);
    assert!(!bobber.is_stopping());
    assert_eq!(bobber.rest_position(), Some(REST));

    let seen = &app.world().resource::<SeenTransitions>().0;
    assert_eq!(
        seen.as_slice(),
        &[
            HeadBobTransition::Started { camera },
            HeadBobTransition::Stopping { camera },
            HeadBobTransition::Settled { camera },
        ]
    );
}

#[test]
fn disabled_setting_freezes_camera_and_state() {
    let (mut app, _, camera) = test_app(100.0);
    step(&mut app, 1);
    set_intent(&mut app, 1.0);
    step(&mut app, 10);

    app.world_mut().resource_mut::<HeadBobSettings>().enabled = false;
    let before = camera_translation(&app, camera);
    let phase = app.world().get::<HeadBobber>(camera).unwrap().phase();

    step(&mut app, 10);
    assert_eq!(camera_translation(&app, camera), before);
    assert_eq!(app.world().get::<HeadBobber>(camera).unwrap().phase(), phase);
}

#[test]
fn paused_time_freezes_camera() {
    let (mut app, _, camera) = test_app(100.0);
    step(&mut app, 1);
    set_intent(&mut app, 1.0);
    step(&mut app, 10);

    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    let before = camera_translation(&app, camera);
    step(&mut app, 10);
    assert_eq!(camera_translation(&app, camera), before);
}

#[test]
fn dead_character_does_not_bob() {
    let (mut app, _, camera) = test_app(0.5);
    step(&mut app, 1);
    set_intent(&mut app, 1.0);
    step(&mut app, 30);

    assert_eq!(camera_translation(&app, camera), REST);
    assert_eq!(
        app.world().get::<HeadBobber>(camera).unwrap().motion_state(),
        MotionState::Idle
    );
}

#[test]
fn airborne_character_stays_at_rest() {
    let (mut app, player, camera) = test_app(100.0);
    app.world_mut().get_mut::<PlayerMotor>(player).unwrap().grounded = false;
    set_intent(&mut app, 1.0);
    step(&mut app, 30);

    assert_eq!(camera_translation(&app, camera), REST);
    assert!(app.world().resource::<SeenTransitions>().0.is_empty());
}

#[test]
fn running_style_is_picked_up_from_motor() {
    let (mut app, player, camera) = test_app(100.0);
    app.world_mut().get_mut::<PlayerMotor>(player).unwrap().running = true;
    app.world_mut().resource_mut::<HeadBobSettings>().bob_scalar = 2.0;
    set_intent(&mut app, 1.0);
    step(&mut app, 1);

    let bobber = app.world().get::<HeadBobber>(camera).unwrap();
    assert_eq!(bobber.style(), head_bob::core::bob_style::BobStyle::Running);
    assert_eq!(bobber.amplitudes(), Vec2::new(0.18, 0.22));
}
