use bevy::prelude::*;

use crate::core::components::{Health, MovementInput, PlayerMotor};
use crate::core::events::HeadBobTransition;
use crate::core::head_bobber::{FrameContext, HeadBobber, MotionState};
use crate::management::settings::HeadBobSettings;

/// Order character motors before this set so the bob sees the current frame's state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadBobSet;

pub fn capture_rest_positions(
    mut bobbers: Query<(Entity, &mut HeadBobber, &Transform), Added<HeadBobber>>,
) {
    for (entity, mut bobber, transform) in &mut bobbers {
        if bobber.capture_rest(transform.translation) {
            debug!("Captured head bob rest position {:?} for {:?}", transform.translation, entity);
        }
    }
}

// The bobbing camera is expected to be a child of the entity carrying the motor.
pub fn head_bob_system(
    settings: Res<HeadBobSettings>,
    input: Res<MovementInput>,
    time: Res<Time>,
    virtual_time: Res<Time<Virtual>>,
    mut cameras: Query<(Entity, &mut HeadBobber, &mut Transform, &Parent)>,
    motors: Query<(&PlayerMotor, Option<&Health>)>,
    mut transitions: EventWriter<HeadBobTransition>,
) {
    if !settings.enabled || virtual_time.is_paused() {
        return;
    }

    for (camera, mut bobber, mut transform, parent) in &mut cameras {
        let Ok((motor, health)) = motors.get(parent.get()) else {
            continue;
        };
        if health.is_some_and(|health| !health.is_alive()) {
            continue;
        }

        let previous = bobber.motion_state();
        let frame = FrameContext {
            motor,
            input: *input,
            bob_scalar: settings.bob_scalar,
            delta_secs: time.delta_secs(),
            live_position: transform.translation,
        };
        transform.translation = bobber.tick(&frame);

        let current = bobber.motion_state();
        if current == previous {
            continue;
        }
        let transition = match current {
            MotionState::Active => HeadBobTransition::Started { camera },
            MotionState::Stopping => HeadBobTransition::Stopping { camera },
            MotionState::Idle => HeadBobTransition::Settled { camera },
        };
        debug!("{:?}", transition);
        transitions.send(transition);
    }
}
