//! Results screen shown once a round is over.
//!
//! [`ResultsScene::new`] is a pure constructor: the outcome picks exactly one
//! content set and is fixed for the lifetime of the value. Presentation
//! (spawning UI entities) is a separate step, see [`spawn_results_scene`].
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::state::{AppState, GameOutcome, RoundOutcome};
use crate::core::config::GameConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResultsSceneError {
    #[error("results scene size must be finite and > 0, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Win/loss tag carried by the scene content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultsMarker {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsContent {
    pub marker: ResultsMarker,
    pub headline: &'static str,
    pub detail: &'static str,
    pub prompt: &'static str,
    pub accent: Color,
}

const PLAY_AGAIN_PROMPT: &str = "Press Space to play again";

impl ResultsContent {
    fn for_outcome(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won => Self {
                marker: ResultsMarker::Victory,
                headline: "YOU WIN!",
                detail: "Every block cleared.",
                prompt: PLAY_AGAIN_PROMPT,
                accent: Color::srgb(0.35, 0.9, 0.45),
            },
            GameOutcome::Lost => Self {
                marker: ResultsMarker::Defeat,
                headline: "GAME OVER",
                detail: "Out of lives.",
                prompt: PLAY_AGAIN_PROMPT,
                accent: Color::srgb(0.95, 0.3, 0.3),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsScene {
    size: Vec2,
    outcome: GameOutcome,
    content: ResultsContent,
}

impl ResultsScene {
    pub fn new(size: Vec2, outcome: GameOutcome) -> Result<Self, ResultsSceneError> {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ResultsSceneError::InvalidSize { width: size.x, height: size.y });
        }
        Ok(Self {
            size,
            outcome,
            content: ResultsContent::for_outcome(outcome),
        })
    }

    /// Same as [`ResultsScene::new`] with the outcome given as "did the player win".
    pub fn with_player_won(size: Vec2, player_won: bool) -> Result<Self, ResultsSceneError> {
        Self::new(size, GameOutcome::from(player_won))
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn content(&self) -> &ResultsContent {
        &self.content
    }
}

/// Root UI node of a presented results scene.
#[derive(Component, Debug, Deref)]
pub struct ResultsSceneRoot(pub ResultsScene);

/// Headline text of a won round.
#[derive(Component)]
pub struct VictoryBanner;

/// Headline text of a lost round.
#[derive(Component)]
pub struct DefeatBanner;

/// Spawns the UI tree for `scene` and returns its root entity.
pub fn spawn_results_scene(commands: &mut Commands, scene: &ResultsScene) -> Entity {
    let content = scene.content().clone();
    let size = scene.size();
    commands
        .spawn((
            ResultsSceneRoot(scene.clone()),
            Node {
                width: Val::Px(size.x),
                height: Val::Px(size.y),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.92)),
            Name::new("ResultsScene"),
        ))
        .with_children(|p| {
            let headline = (
                Text::new(content.headline),
                TextFont { font_size: 64.0, ..default() },
                TextColor(content.accent),
            );
            match content.marker {
                ResultsMarker::Victory => p.spawn((headline, VictoryBanner)),
                ResultsMarker::Defeat => p.spawn((headline, DefeatBanner)),
            };
            p.spawn((
                Text::new(content.detail),
                TextFont { font_size: 28.0, ..default() },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new(content.prompt),
                TextFont { font_size: 20.0, ..default() },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        })
        .id()
}

pub struct ResultsScenePlugin;

impl Plugin for ResultsScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), present_results_scene)
            .add_systems(OnExit(AppState::GameOver), despawn_results_scene);
    }
}

fn present_results_scene(
    mut commands: Commands,
    outcome: Option<Res<RoundOutcome>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cfg: Res<GameConfig>,
) {
    let Some(outcome) = outcome else {
        warn!(target: "results", "GameOver entered without a RoundOutcome; nothing to show");
        return;
    };
    let size = windows
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(cfg.arena_size());
    // A minimized window reports 0x0; fall back to the configured size.
    let scene = ResultsScene::new(size, outcome.0).or_else(|_| ResultsScene::new(cfg.arena_size(), outcome.0));
    match scene {
        Ok(scene) => {
            info!(target: "results", "Presenting results (player_won={}) at {}x{}", scene.outcome().player_won(), scene.size().x, scene.size().y);
            spawn_results_scene(&mut commands, &scene);
        }
        Err(e) => error!(target: "results", "{e}"),
    }
}

fn despawn_results_scene(mut commands: Commands, q_root: Query<Entity, With<ResultsSceneRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
