//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Movement configuration. Set once at startup (defaults or the tuning file)
/// and treated as immutable afterwards; all magnitudes must be positive.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_velocity: f32,
    /// Ground probe center relative to the player origin
    pub ground_check_offset: Vec2,
    pub ground_check_radius: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 320.0,
            jump_velocity: 680.0,
            ground_check_offset: Vec2::new(0.0, -26.0),
            ground_check_radius: 6.0,
        }
    }
}

/// Input sampled once per logical frame, overwritten every tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    /// True only on the tick the jump key goes down, not while held
    pub jump_just_pressed: bool,
}
