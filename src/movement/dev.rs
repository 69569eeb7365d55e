//! Movement domain: dev-only test room and debug drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementTuning, Player};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    commands.spawn(Camera2d);

    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Platform - left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    // Platform - right side, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(250.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));
}

/// Wire circle at the ground probe point, for tuning the check by eye.
pub(crate) fn draw_ground_check_gizmo(
    tuning: Res<MovementTuning>,
    query: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    for transform in &query {
        let center = transform.translation.truncate() + tuning.ground_check_offset;
        gizmos.circle_2d(center, tuning.ground_check_radius, Color::srgb(0.9, 0.2, 0.2));
    }
}
