use bevy::prelude::*;

/// Marker on every entity spawned for a round; despawned when the round ends.
#[derive(Component, Default)]
pub struct RoundEntity;

/// The ball (holds the dynamic body & collider).
#[derive(Component)]
pub struct Ball;

/// Player paddle (kinematic body).
#[derive(Component)]
pub struct Paddle;

/// A breakable brick; `row` counts from the top.
#[derive(Component, Debug, Copy, Clone)]
pub struct Block {
    pub row: usize,
    pub column: usize,
}

/// Sensor strip under the paddle; touching it costs a life.
#[derive(Component)]
pub struct BottomWall;

/// Solid left/right/top boundary.
#[derive(Component)]
pub struct Wall;

/// Logical half extents shared by the collider and the sprite.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct HalfExtents(pub Vec2);
