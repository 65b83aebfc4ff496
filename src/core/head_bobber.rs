use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::prelude::*;

use crate::core::bob_style::BobStyle;
use crate::core::components::{MovementInput, PlayerMotor};

/// Seconds spent easing the camera back to rest after movement stops.
pub const END_BLEND_MAX: f32 = 0.5;
/// Phase distance over which the bob ramps in after movement starts.
pub const BEGIN_BLEND_MAX: f32 = PI;
pub const DEFAULT_BOB_SPEED: f32 = 1.2;

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Active,
    Stopping,
}

/// Everything the bobber needs to know about the current frame.
pub struct FrameContext<'a> {
    pub motor: &'a PlayerMotor,
    pub input: MovementInput,
    pub bob_scalar: f32,
    pub delta_secs: f32,
    pub live_position: Vec3,
}

// Per-camera head bob state. The phase starts at the crest of the sine wave so the
// first step reads as the foot pushing off the ground.
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct HeadBobber {
    pub bob_speed: f32,
    rest_position: Option<Vec3>,
    style: BobStyle,
    amplitudes: Vec2,
    phase: f32,
    begin_blend: f32,
    end_blend: f32,
    is_stopping: bool,
    motion: MotionState,
}

impl Default for HeadBobber {
    fn default() -> Self {
        HeadBobber {
            bob_speed: DEFAULT_BOB_SPEED,
            rest_position: None,
            style: BobStyle::Walking,
            amplitudes: BobStyle::Walking.base_amplitudes(),
            phase: FRAC_PI_2,
            begin_blend: 0.0,
            end_blend: 0.0,
            is_stopping: false,
            motion: MotionState::Idle,
        }
    }
}

impl HeadBobber {
    pub fn with_rest_position(rest: Vec3) -> Self {
        HeadBobber {
            rest_position: Some(rest),
            ..default()
        }
    }

    /// Records the neutral camera offset. Only the first call has any effect.
    pub fn capture_rest(&mut self, position: Vec3) -> bool {
        if self.rest_position.is_some() {
            return false;
        }
        self.rest_position = Some(position);
        true
    }

    pub fn rest_position(&self) -> Option<Vec3> {
        self.rest_position
    }

    pub fn style(&self) -> BobStyle {
        self.style
    }

    pub fn amplitudes(&self) -> Vec2 {
        self.amplitudes
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn begin_blend(&self) -> f32 {
        self.begin_blend
    }

    pub fn end_blend(&self) -> f32 {
        self.end_blend
    }

    pub fn is_stopping(&self) -> bool {
        self.is_stopping
    }

    pub fn motion_state(&self) -> MotionState {
        self.motion
    }

    pub fn apply_style(&mut self, motor: &PlayerMotor) {
        self.style = BobStyle::classify(motor.running, motor.crouching, motor.riding);
    }

    pub fn apply_amplitudes(&mut self, bob_scalar: f32) {
        self.amplitudes = self.style.amplitudes(bob_scalar);
    }

    // Vertical term is folded with abs so the head rises on every footfall,
    // giving two bounces per side-to-side sway.
    pub fn plot_path(&self) -> Vec3 {
        let rest = self.rest_position.unwrap_or_default();
        rest + Vec3::new(
            self.phase.cos() * self.amplitudes.x,
            (self.phase.sin() * self.amplitudes.y).abs(),
            0.0,
        )
    }

    fn blend_in(&self, target: Vec3) -> Vec3 {
        let rest = self.rest_position.unwrap_or_default();
        let t = self.phase.rem_euclid(PI) / PI;
        rest.lerp(target, t)
    }

    // Blends from wherever the camera currently is, not the last plotted point.
    fn blend_out(&self, live_position: Vec3) -> Vec3 {
        let rest = self.rest_position.unwrap_or_default();
        let t = (self.end_blend / END_BLEND_MAX).clamp(0.0, 1.0);
        live_position.lerp(rest, t)
    }

    /// Advances the bob by one frame and returns the new local camera position.
    pub fn next_position(&mut self, moving: bool, speed: f32, delta_secs: f32, live_position: Vec3) -> Vec3 {
        let Some(rest) = self.rest_position else {
            return live_position;
        };
        let mut new_position = rest;

        if moving {
            let step = speed * self.bob_speed * delta_secs;
            self.phase += step;
            self.begin_blend += step;

            new_position = self.plot_path();
            if self.begin_blend <= BEGIN_BLEND_MAX {
                new_position = self.blend_in(new_position);
            }
            self.is_stopping = true;
            self.end_blend = 0.0;
            self.motion = MotionState::Active;
        } else if self.is_stopping && self.end_blend <= END_BLEND_MAX {
            // next start begins at the crest again
            self.phase = PI;
            self.begin_blend = 0.0;
            self.end_blend += delta_secs;

            new_position = self.blend_out(live_position);
            self.motion = MotionState::Stopping;
        } else {
            if self.is_stopping {
                debug!("head bob end transition reset");
                self.end_blend = 0.0;
                self.is_stopping = false;
            }
            self.motion = MotionState::Idle;
        }

        if self.phase > TAU {
            self.phase = 0.0;
        }

        new_position
    }

    pub fn tick(&mut self, frame: &FrameContext) -> Vec3 {
        self.apply_style(frame.motor);
        self.apply_amplitudes(frame.bob_scalar);

        let moving = frame.input.has_intent() && frame.motor.grounded;
        self.next_position(
            moving,
            frame.motor.horizontal_speed(),
            frame.delta_secs,
            frame.live_position,
        )
    }
}
