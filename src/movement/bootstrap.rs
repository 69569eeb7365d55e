//! Movement domain: player spawn at startup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerState, GameLayer, MovementTuning, Player};

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: speed={}, jump_velocity={}, ground_check_radius={}",
        tuning.speed, tuning.jump_velocity, tuning.ground_check_radius
    );

    commands.spawn((
        // Identity & Movement
        (Player, ControllerState::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
