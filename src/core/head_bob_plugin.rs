use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::bob_style::BobStyle;
use crate::core::components::{Health, MovementInput, PlayerMotor};
use crate::core::events::HeadBobTransition;
use crate::core::head_bobber::HeadBobber;
use crate::management::settings::{load_head_bob_settings, HeadBobSettings};
use crate::systems::head_bob::{capture_rest_positions, head_bob_system, HeadBobSet};

pub struct HeadBobPlugin;

impl Plugin for HeadBobPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<HeadBobSettings>()
            .init_resource::<MovementInput>()
            .add_event::<HeadBobTransition>()
            .register_type::<HeadBobSettings>()
            .register_type::<MovementInput>()
            .register_type::<HeadBobber>()
            .register_type::<BobStyle>()
            .register_type::<PlayerMotor>()
            .register_type::<Health>()
            .add_systems(Startup, load_head_bob_settings)
            .add_systems(
                Update,
                (capture_rest_positions, head_bob_system)
                    .chain()
                    .in_set(HeadBobSet),
            );
    }
}
