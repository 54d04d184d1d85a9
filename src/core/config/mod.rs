pub mod config;
pub mod diagnostics;

pub use config::{
    BallConfig, BrickLayoutConfig, ConfigError, GameConfig, PaddleConfig, Tunables, WindowConfig,
};
pub use diagnostics::{ConfigDiagnostics, ConfigDiagnosticsPlugin};
