use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{HalfExtents, Paddle, RoundEntity};
use crate::core::config::{GameConfig, Tunables};
use crate::core::constants::REFERENCE_FPS;
use crate::interaction::input::ActionState;
use crate::physics::categories::{groups_for, CollisionCategory};
use crate::rendering::palette::PADDLE_COLOR;

/// Height of the paddle center in world space.
pub fn paddle_y(cfg: &GameConfig) -> f32 {
    -cfg.arena_size().y * 0.5 + cfg.paddle.inset
}

pub fn spawn_paddle(mut commands: Commands, cfg: Res<GameConfig>) {
    let size = Vec2::new(cfg.paddle.width, cfg.paddle.height);
    commands.spawn((
        Name::new("Paddle"),
        Paddle,
        RoundEntity,
        HalfExtents(size * 0.5),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
        groups_for(CollisionCategory::Paddle),
        Restitution::coefficient(1.0),
        Friction::coefficient(0.0),
        Sprite::from_color(PADDLE_COLOR, size),
        Transform::from_xyz(0.0, paddle_y(&cfg), 0.0),
    ));
}

/// New paddle x after `dt` seconds moving along `axis` (-1..1) at
/// `speed_per_frame` units per reference frame, kept within `[-limit, limit]`.
pub fn step_paddle(x: f32, axis: f32, speed_per_frame: f32, dt: f32, limit: f32) -> f32 {
    let limit = limit.max(0.0);
    (x + axis * speed_per_frame * REFERENCE_FPS * dt).clamp(-limit, limit)
}

pub fn move_paddle(
    time: Res<Time>,
    actions: Res<ActionState>,
    tunables: Res<Tunables>,
    cfg: Res<GameConfig>,
    mut q: Query<(&mut Transform, &HalfExtents), With<Paddle>>,
) {
    let axis = actions.paddle_axis();
    if axis == 0.0 {
        return;
    }
    let half_w = cfg.arena_size().x * 0.5;
    for (mut tf, half) in &mut q {
        tf.translation.x = step_paddle(
            tf.translation.x,
            axis,
            tunables.paddle_speed,
            time.delta_secs(),
            half_w - half.x,
        );
    }
}
