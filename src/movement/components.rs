//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame controller state. Both fields are recomputed every frame from
/// current input and world state, never carried across frames.
#[derive(Component, Debug, Default)]
pub struct ControllerState {
    /// Horizontal axis in [-1, 1]
    pub horizontal_input: f32,
    pub on_ground: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
