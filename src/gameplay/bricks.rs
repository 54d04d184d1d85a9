use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::round::{finish_round, RoundState};
use crate::app::state::{AppState, GameOutcome};
use crate::core::components::{Block, HalfExtents, RoundEntity};
use crate::core::config::{BrickLayoutConfig, GameConfig, Tunables};
use crate::physics::categories::{groups_for, CollisionCategory};
use crate::rendering::palette::color_for_row;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickSlot {
    pub row: usize,
    pub column: usize,
    pub center: Vec2,
    pub size: Vec2,
}

/// Lays out `brick_count` bricks in `brick_rows` rows, filled row by row from
/// the top. The grid is centered horizontally; the last row may be partial.
pub fn brick_layout(layout: &BrickLayoutConfig, tunables: &Tunables, arena: Vec2) -> Vec<BrickSlot> {
    let columns = tunables.brick_columns();
    if columns == 0 {
        return Vec::new();
    }
    let size = Vec2::new(layout.width, layout.height);
    let step = size + Vec2::splat(layout.gap);
    let grid_w = columns as f32 * layout.width + (columns - 1) as f32 * layout.gap;
    let left = -grid_w * 0.5 + layout.width * 0.5;
    let top = arena.y * 0.5 - layout.top_margin - layout.height * 0.5;

    (0..tunables.brick_count)
        .map(|i| {
            let (row, column) = (i / columns, i % columns);
            BrickSlot {
                row,
                column,
                center: Vec2::new(left + column as f32 * step.x, top - row as f32 * step.y),
                size,
            }
        })
        .collect()
}

pub fn spawn_bricks(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    tunables: Res<Tunables>,
    mut round: ResMut<RoundState>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let slots = brick_layout(&cfg.bricks, &tunables, cfg.arena_size());
    for slot in &slots {
        commands.spawn((
            Name::new(format!("Brick r{} c{}", slot.row, slot.column)),
            Block { row: slot.row, column: slot.column },
            RoundEntity,
            HalfExtents(slot.size * 0.5),
            RigidBody::Fixed,
            Collider::cuboid(slot.size.x * 0.5, slot.size.y * 0.5),
            groups_for(CollisionCategory::Block),
            Restitution::coefficient(1.0),
            Friction::coefficient(0.0),
            Sprite::from_color(color_for_row(slot.row), slot.size),
            Transform::from_translation(slot.center.extend(0.0)),
        ));
    }
    round.blocks_remaining = slots.len();
    info!(target: "round", "Spawned {} bricks in {} rows", slots.len(), tunables.brick_rows);
    if slots.is_empty() {
        warn!(target: "round", "No bricks in layout; round is won immediately");
        finish_round(&mut commands, &mut round, &mut next_state, GameOutcome::Won);
    }
}
