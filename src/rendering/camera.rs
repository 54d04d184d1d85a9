use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;
use crate::rendering::palette::BACKGROUND_COLOR;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, spawn_arena_camera);
    }
}

/// 2D camera that keeps the whole arena visible when the window is resized.
fn spawn_arena_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let arena = cfg.arena_size();
    commands.spawn((
        Name::new("ArenaCamera"),
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin { min_width: arena.x, min_height: arena.y },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
