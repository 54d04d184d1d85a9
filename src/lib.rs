pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::results::{ResultsScene, ResultsSceneError};
pub use app::state::{AppState, GameOutcome};
pub use core::config::{GameConfig, Tunables, WindowConfig};
pub use physics::categories::{
    CollisionCategory, BALL_CATEGORY, BLOCK_CATEGORY, BOTTOM_CATEGORY, PADDLE_CATEGORY,
};
