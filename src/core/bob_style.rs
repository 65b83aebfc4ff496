use bevy::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BobStyle {
    Crouching,
    #[default]
    Walking,
    Running,
    Horse,
}

impl BobStyle {
    /// Picks a style from motor flags. Running wins over crouching, crouching over riding.
    pub fn classify(running: bool, crouching: bool, riding: bool) -> Self {
        if running {
            BobStyle::Running
        } else if crouching {
            BobStyle::Crouching
        } else if riding {
            BobStyle::Horse
        } else {
            BobStyle::Walking
        }
    }

    // x = side sway, y = vertical bounce
    pub fn base_amplitudes(self) -> Vec2 {
        match self {
            // shifting legs, pushing up off each one
            BobStyle::Crouching => Vec2::new(0.08, 0.07),
            // balanced side to side, mostly head bounce
            BobStyle::Walking => Vec2::new(0.045, 0.062),
            // both legs pushing off, lots of leaning
            BobStyle::Running => Vec2::new(0.09, 0.11),
            // four legs, most of the force pushes the rider up
            BobStyle::Horse => Vec2::new(0.03, 0.115),
        }
    }

    pub fn amplitudes(self, scalar: f32) -> Vec2 {
        self.base_amplitudes() * scalar
    }
}
