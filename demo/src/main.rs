use std::path::PathBuf;

use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use head_bob::core::head_bob_plugin::HeadBobPlugin;
use head_bob::management::settings::HeadBobSettingsPath;
use head_bob::systems::head_bob::HeadBobSet;

mod input_manager;
mod player;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,head_bob=debug".to_string(),
                level: bevy::log::Level::WARN,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Head Bob Testing".into(),
                    resolution: (1024.0, 768.0).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    app.insert_resource(AmbientLight {
        color: Color::srgba(154.0 / 255.0, 166.0 / 255.0, 254.0 / 255.0, 1.0),
        brightness: 75.0,
    });

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    // Setup head bobbing, reading user settings from disk
    app.insert_resource(HeadBobSettingsPath(PathBuf::from("assets/config/head_bob.ron")));
    app.add_plugins(HeadBobPlugin);

    // Setup input system
    app.add_plugins(crate::input_manager::InputPlugin);

    // Setup player; the motor has to run before the bob reads it
    app.add_plugins(crate::player::PlayerPlugin);
    app.configure_sets(Update, HeadBobSet.after(crate::player::MotorSet));

    app.run();
}
