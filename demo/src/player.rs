use bevy::app::{App, Plugin};
use bevy::prelude::*;
use head_bob::core::components::{Health, MainCamera, MovementInput, PlayerMotor};
use head_bob::core::head_bobber::HeadBobber;

use crate::input_manager::InputStates;

const WALK_SPEED: f32 = 3.0;
const RUN_SPEED: f32 = 6.0;
const CROUCH_SPEED: f32 = 1.5;
const RIDE_SPEED: f32 = 8.0;
const JUMP_VELOCITY: f32 = 4.5;
const GRAVITY: f32 = 9.81;
const LOOK_SENSITIVITY: f32 = 0.003;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MotorSet;

#[derive(Component, Default)]
pub(crate) struct VerticalVelocity(f32);

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, spawn_world)
            .add_systems(Update, (look_system, motor_system).chain().in_set(MotorSet));
    }
}

fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(200.0, 200.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.45, 0.3))),
        Name::new("Ground"),
    ));

    // Some reference pillars so the bob is visible against the scenery
    let pillar = meshes.add(Cuboid::new(0.5, 3.0, 0.5));
    let pillar_material = materials.add(Color::srgb(0.6, 0.55, 0.5));
    for i in -5..=5 {
        commands.spawn((
            Mesh3d(pillar.clone()),
            MeshMaterial3d(pillar_material.clone()),
            Transform::from_xyz(i as f32 * 4.0, 1.5, -10.0),
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 30000.0,
            color: Color::srgba(171.0 / 255.0, 183.0 / 255.0, 255.0 / 255.0, 1.0),
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
    ));

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            PlayerMotor {
                grounded: true,
                ..default()
            },
            Health::default(),
            VerticalVelocity::default(),
            Name::new("Player"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 1.6, 0.0),
                HeadBobber::default(),
                MainCamera,
                Name::new("MainCamera"),
            ));
        });
}

fn look_system(
    input: Res<InputStates>,
    mut player_query: Query<&mut Transform, (With<PlayerMotor>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<PlayerMotor>)>,
) {
    let Ok(mut player) = player_query.get_single_mut() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };

    player.rotate_y(-input.look_delta.x * LOOK_SENSITIVITY);

    let (_, pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
    let pitch = (pitch - input.look_delta.y * LOOK_SENSITIVITY).clamp(-1.5, 1.5);
    camera.rotation = Quat::from_rotation_x(pitch);
}

fn motor_system(
    time: Res<Time>,
    movement: Res<MovementInput>,
    input: Res<InputStates>,
    mut query: Query<(&mut Transform, &mut PlayerMotor, &mut VerticalVelocity)>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut motor, mut vertical) in &mut query {
        motor.running = input.run_held && !input.riding;
        motor.crouching = input.crouch_held && !input.riding;
        motor.riding = input.riding;

        let speed = if motor.riding {
            RIDE_SPEED
        } else if motor.running {
            RUN_SPEED
        } else if motor.crouching {
            CROUCH_SPEED
        } else {
            WALK_SPEED
        };

        let wish = Vec3::new(movement.horizontal, 0.0, -movement.vertical).normalize_or_zero();
        let horizontal = transform.rotation * wish * speed;

        if motor.grounded && input.jump_pressed {
            vertical.0 = JUMP_VELOCITY;
            motor.grounded = false;
        }
        if !motor.grounded {
            vertical.0 -= GRAVITY * dt;
        }

        motor.move_direction = Vec3::new(horizontal.x, vertical.0, horizontal.z);
        transform.translation += motor.move_direction * dt;

        if transform.translation.y <= 0.0 {
            transform.translation.y = 0.0;
            vertical.0 = 0.0;
            motor.grounded = true;
        }
    }
}
