use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use super::paddle::paddle_y;
use crate::core::components::{Ball, RoundEntity};
use crate::core::config::{GameConfig, Tunables};
use crate::core::constants::REFERENCE_FPS;
use crate::physics::categories::{groups_for, CollisionCategory};
use crate::rendering::palette::BALL_COLOR;

/// Put the ball back above the paddle and launch it again.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ServeBall;

/// Ball speed in units per second.
pub fn ball_speed(tunables: &Tunables) -> f32 {
    tunables.ball_speed * REFERENCE_FPS
}

/// Velocity `angle` radians off straight up (positive leans right).
pub fn launch_velocity(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos()) * speed
}

/// Rescales `v` to `speed`, steepening it so |vy| >= `min_vertical_ratio` * speed.
/// A stalled ball is sent straight up.
pub fn normalized_velocity(v: Vec2, speed: f32, min_vertical_ratio: f32) -> Vec2 {
    let Some(mut dir) = v.try_normalize() else {
        return Vec2::Y * speed;
    };
    let ratio = min_vertical_ratio.clamp(0.0, 1.0);
    if dir.y.abs() < ratio {
        let sy = if dir.y < 0.0 { -1.0 } else { 1.0 };
        let sx = if dir.x < 0.0 { -1.0 } else { 1.0 };
        dir = Vec2::new(sx * (1.0 - ratio * ratio).sqrt(), sy * ratio);
    }
    dir * speed
}

fn serve_transform(cfg: &GameConfig) -> Transform {
    let y = paddle_y(cfg) + cfg.paddle.height * 0.5 + cfg.ball.radius * 3.0;
    Transform::from_xyz(0.0, y, 0.5)
}

/// Half-angle of the serve cone in radians, kept within a quarter turn.
/// Non-finite config values serve straight up.
pub fn launch_spread(spread_deg: f32) -> f32 {
    if !spread_deg.is_finite() {
        return 0.0;
    }
    spread_deg.to_radians().abs().min(std::f32::consts::FRAC_PI_2)
}

fn random_launch(cfg: &GameConfig, tunables: &Tunables) -> Velocity {
    let spread = launch_spread(cfg.ball.launch_spread_deg);
    let angle = if spread > 0.0 { rand::thread_rng().gen_range(-spread..=spread) } else { 0.0 };
    Velocity::linear(launch_velocity(ball_speed(tunables), angle))
}

pub fn spawn_ball(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    tunables: Res<Tunables>,
) {
    let radius = cfg.ball.radius;
    commands.spawn((
        Name::new("Ball"),
        Ball,
        RoundEntity,
        RigidBody::Dynamic,
        Collider::ball(radius),
        groups_for(CollisionCategory::Ball),
        ActiveEvents::COLLISION_EVENTS,
        Ccd::enabled(),
        GravityScale(0.0),
        Restitution { coefficient: 1.0, combine_rule: CoefficientCombineRule::Max },
        Friction { coefficient: 0.0, combine_rule: CoefficientCombineRule::Min },
        Damping { linear_damping: 0.0, angular_damping: 0.0 },
        LockedAxes::ROTATION_LOCKED,
        random_launch(&cfg, &tunables),
        (
            Sprite::from_color(BALL_COLOR, Vec2::splat(radius * 2.0)),
            serve_transform(&cfg),
        ),
    ));
}

pub fn serve_ball(
    mut serves: EventReader<ServeBall>,
    cfg: Res<GameConfig>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Transform, &mut Velocity), With<Ball>>,
) {
    if serves.read().last().is_none() {
        return;
    }
    for (mut tf, mut vel) in &mut q {
        *tf = serve_transform(&cfg);
        *vel = random_launch(&cfg, &tunables);
    }
}

/// Bounces never gain or bleed energy: keep the ball at its configured speed.
pub fn keep_ball_speed(
    cfg: Res<GameConfig>,
    tunables: Res<Tunables>,
    mut q: Query<&mut Velocity, With<Ball>>,
) {
    let speed = ball_speed(&tunables);
    for mut vel in &mut q {
        let fixed = normalized_velocity(vel.linvel, speed, cfg.ball.min_vertical_ratio);
        if fixed.distance_squared(vel.linvel) > 1e-3 {
            vel.linvel = fixed;
        }
    }
}
