use bevy::app::Plugin;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use head_bob::core::components::MovementInput;
use head_bob::management::settings::HeadBobSettings;

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<InputStates>()
            .add_systems(Update, (input_management_system, toggle_system));
    }
}

#[derive(Default, Resource)]
pub(crate) struct InputStates {
    pub run_held: bool,
    pub crouch_held: bool,
    pub riding: bool,
    pub jump_pressed: bool,
    pub look_delta: Vec2,
}

fn axis(keys: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if keys.pressed(negative) {
        value -= 1.0;
    }
    if keys.pressed(positive) {
        value += 1.0;
    }
    value
}

fn input_management_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut movement: ResMut<MovementInput>,
    mut input: ResMut<InputStates>,
) {
    movement.horizontal = axis(&keys, KeyCode::KeyA, KeyCode::KeyD);
    movement.vertical = axis(&keys, KeyCode::KeyS, KeyCode::KeyW);

    input.run_held = keys.pressed(KeyCode::ShiftLeft);
    input.crouch_held = keys.pressed(KeyCode::ControlLeft);
    input.jump_pressed = keys.just_pressed(KeyCode::Space);
    input.look_delta = mouse_motion.delta;
    if keys.just_pressed(KeyCode::KeyR) {
        input.riding = !input.riding;
        info!("Riding: {}", input.riding);
    }
}

fn toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<HeadBobSettings>,
    mut time: ResMut<Time<Virtual>>,
) {
    if keys.just_pressed(KeyCode::KeyB) {
        settings.enabled = !settings.enabled;
        info!("Head bobbing enabled: {}", settings.enabled);
    }
    if keys.just_pressed(KeyCode::KeyP) {
        if time.is_paused() {
            time.unpause();
        } else {
            time.pause();
        }
        info!("Paused: {}", time.is_paused());
    }
}
