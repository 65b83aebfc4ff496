use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

// Locomotion state written by the character controller. The head bobber only reads it.
#[derive(Component, Clone, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerMotor {
    pub grounded: bool,
    pub running: bool,
    pub crouching: bool,
    pub riding: bool,
    pub move_direction: Vec3,
}

impl PlayerMotor {
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.move_direction.x, self.move_direction.z).length()
    }
}

#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
}

impl Health {
    pub fn is_alive(&self) -> bool {
        self.current >= 1.0
    }
}

impl Default for Health {
    fn default() -> Self {
        Health { current: 100.0 }
    }
}

/// Raw movement axes for the current frame, filled by whatever polls the input devices.
#[derive(Resource, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct MovementInput {
    pub horizontal: f32,
    pub vertical: f32,
}

impl MovementInput {
    pub fn has_intent(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }
}
