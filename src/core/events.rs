use bevy::prelude::*;

// Fired by the head bob system whenever a camera's motion state changes.
// Footstep audio can listen for `Started` to line up with the first crest.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadBobTransition {
    Started {
        camera: Entity,
    },
    Stopping {
        camera: Entity,
    },
    Settled {
        camera: Entity,
    },
}
