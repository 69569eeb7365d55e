//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerState, GameLayer, MovementTuning, Player};

/// Circle-overlap test at the ground probe point. Pure query against the
/// spatial pipeline; the result is overwritten every frame.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut ControllerState), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::circle(tuning.ground_check_radius);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        let probe_center = transform.translation.truncate() + tuning.ground_check_offset;

        let hits = spatial_query.shape_intersections(&probe, probe_center, 0.0, &ground_filter);
        state.on_ground = !hits.is_empty();

        if state.on_ground && !was_on_ground {
            debug!("Landed at y={}", transform.translation.y);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at y={}", transform.translation.y);
        }
    }
}
