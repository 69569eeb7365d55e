//! Movement domain: player locomotion over the physics engine.
//!
//! Input sampling, ground detection, and jumping run once per logical frame
//! in `Update`; the horizontal velocity write runs on the fixed physics
//! timestep in `FixedUpdate`.

use bevy::prelude::*;

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;

pub use components::{ControllerState, GameLayer, Ground, Player};
pub use resources::{MovementInput, MovementTuning};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::detect_ground,
                    systems::apply_jump,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, systems::apply_horizontal_movement);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_ground_check_gizmo);
    }
}
