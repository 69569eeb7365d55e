//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ControllerState, MovementInput, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
    mut query: Query<&mut ControllerState, With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    // Edge trigger: true only on the tick the key goes down
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);

    for mut state in &mut query {
        state.horizontal_input = input.axis_x;
    }
}
