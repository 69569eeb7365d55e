//! Movement domain: jump and horizontal velocity systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerState, MovementInput, MovementTuning, Player};

/// Ground jump on the input edge. Runs after ground detection so the check
/// reflects this frame's world state. No buffering, no coyote time, no air
/// jumps: a press while airborne is dropped.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&ControllerState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (state, mut velocity) in &mut query {
        if state.on_ground {
            // Replace vertical velocity outright; horizontal is untouched
            velocity.y = tuning.jump_velocity;
            debug!("Jump: vy set to {}", tuning.jump_velocity);
        }
    }
}

/// Fixed-timestep velocity write. Horizontal velocity is fully recomputed
/// from the latest sampled input each physics tick; vertical velocity passes
/// through unchanged. Input overrides horizontal velocity mid-air too.
pub(crate) fn apply_horizontal_movement(
    tuning: Res<MovementTuning>,
    mut query: Query<(&ControllerState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        velocity.x = state.horizontal_input * tuning.speed;
    }
}
