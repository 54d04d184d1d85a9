use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BottomWall, RoundEntity, Wall};
use crate::core::config::GameConfig;
use crate::physics::categories::{groups_for, CollisionCategory};
use crate::rendering::palette::WALL_COLOR;

pub const WALL_THICKNESS: f32 = 20.0;

const WALL_NAME: [&str; 3] = ["WallTop", "WallLeft", "WallRight"];

/// Spawns the three solid boundaries and the bottom sensor just outside the
/// visible play field.
pub fn spawn_arena(mut commands: Commands, cfg: Res<GameConfig>) {
    let half = cfg.arena_size() * 0.5;
    let t = WALL_THICKNESS * 0.5;

    let solid = [
        (Vec2::new(0.0, half.y + t), Vec2::new(half.x + WALL_THICKNESS, t)),
        (Vec2::new(-half.x - t, 0.0), Vec2::new(t, half.y + WALL_THICKNESS)),
        (Vec2::new(half.x + t, 0.0), Vec2::new(t, half.y + WALL_THICKNESS)),
    ];
    for (name, (center, half_extents)) in WALL_NAME.iter().zip(solid) {
        // Engine-default groups: walls carry no single category.
        commands.spawn((
            Name::new(*name),
            Wall,
            RoundEntity,
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(Group::ALL, Group::ALL),
            Restitution::coefficient(1.0),
            Friction::coefficient(0.0),
            Sprite::from_color(WALL_COLOR, half_extents * 2.0),
            Transform::from_translation(center.extend(0.0)),
        ));
    }

    // Bottom edge: sensor so the ball passes through while the contact is reported.
    commands.spawn((
        Name::new("WallBottom"),
        BottomWall,
        RoundEntity,
        RigidBody::Fixed,
        Collider::cuboid(half.x + WALL_THICKNESS, t),
        Sensor,
        groups_for(CollisionCategory::Bottom),
        Transform::from_xyz(0.0, -half.y - t, 0.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_spawns_three_walls_and_bottom_sensor() {
        let mut app = App::new();
        app.insert_resource(GameConfig::default())
            .add_systems(Update, spawn_arena);
        app.update();

        let world = app.world_mut();
        let walls = world.query_filtered::<Entity, With<Wall>>().iter(world).count();
        assert_eq!(walls, 3);
        let mut q = world.query_filtered::<(&CollisionGroups, Option<&Sensor>), With<BottomWall>>();
        let (groups, sensor) = q.single(world).expect("one bottom wall");
        assert!(sensor.is_some());
        assert_eq!(
            CollisionCategory::from_bits(groups.memberships.bits()),
            Some(CollisionCategory::Bottom)
        );
    }
}
