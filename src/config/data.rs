//! Serde definitions for the tuning file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// On-disk shape of the movement tuning file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub speed: f32,
    pub jump_velocity: f32,
    /// Ground probe center relative to the player origin, (x, y)
    pub ground_check_offset: (f32, f32),
    pub ground_check_radius: f32,
}

impl From<MovementTuningDef> for MovementTuning {
    fn from(def: MovementTuningDef) -> Self {
        Self {
            speed: def.speed,
            jump_velocity: def.jump_velocity,
            ground_check_offset: Vec2::new(def.ground_check_offset.0, def.ground_check_offset.1),
            ground_check_radius: def.ground_check_radius,
        }
    }
}
