use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::constants::{
    BALL_SPEED, BRICK_COUNT, BRICK_ROWS, PADDLE_LEFT_KEY, PADDLE_RIGHT_KEY, PADDLE_SPEED,
    RESTART_KEY, STARTING_LIVES,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse RON {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("config layer failed to load: {}", .0.join("; "))]
    Layers(Vec<String>),
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Breakout".into(),
            auto_close: 0.0,
        }
    }
}

/// Gameplay tunables. Inserted once as a resource at startup and only ever read.
#[derive(Debug, Deserialize, Resource, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tunables {
    pub paddle_left_key: u16,
    pub paddle_right_key: u16,
    pub restart_key: u16,
    pub brick_count: usize,
    pub brick_rows: usize,
    /// Units per 60 Hz frame.
    pub ball_speed: f32,
    /// Units per 60 Hz frame.
    pub paddle_speed: f32,
}
impl Tunables {
    pub const DEFAULT: Tunables = Tunables {
        paddle_left_key: PADDLE_LEFT_KEY,
        paddle_right_key: PADDLE_RIGHT_KEY,
        restart_key: RESTART_KEY,
        brick_count: BRICK_COUNT,
        brick_rows: BRICK_ROWS,
        ball_speed: BALL_SPEED,
        paddle_speed: PADDLE_SPEED,
    };

    pub fn brick_columns(&self) -> usize {
        if self.brick_rows == 0 {
            return 0;
        }
        self.brick_count.div_ceil(self.brick_rows)
    }
}
impl Default for Tunables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BrickLayoutConfig {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub top_margin: f32,
}
impl Default for BrickLayoutConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 16.0,
            gap: 6.0,
            top_margin: 48.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Distance from the bottom edge to the paddle center.
    pub inset: f32,
}
impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 110.0,
            height: 14.0,
            inset: 48.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Max launch angle away from straight up, in degrees.
    pub launch_spread_deg: f32,
    /// Lower bound on |vy| / speed so the ball never settles into a horizontal loop.
    pub min_vertical_ratio: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            launch_spread_deg: 35.0,
            min_vertical_ratio: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub tunables: Tunables,
    pub bricks: BrickLayoutConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub lives: u32,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            tunables: Tunables::DEFAULT,
            bricks: Default::default(),
            paddle: Default::default(),
            ball: Default::default(),
            lives: STARTING_LIVES,
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.window.width, self.window.height)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    /// Deep-merges RON documents in order (later files override earlier keys).
    /// Returns the config, the paths actually used, and any per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    fn float_fields(&self) -> [(&'static str, f32); 15] {
        [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("window.autoClose", self.window.auto_close),
            ("tunables.ball_speed", self.tunables.ball_speed),
            ("tunables.paddle_speed", self.tunables.paddle_speed),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
            ("bricks.gap", self.bricks.gap),
            ("bricks.top_margin", self.bricks.top_margin),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.inset", self.paddle.inset),
            ("ball.radius", self.ball.radius),
            ("ball.launch_spread_deg", self.ball.launch_spread_deg),
            ("ball.min_vertical_ratio", self.ball.min_vertical_ratio),
        ]
    }

    /// [`GameConfig::load_layered`] for layers named explicitly: any layer that
    /// fails to read, parse or deserialize is an error.
    pub fn load_required_layers<P, I>(paths: I) -> Result<(Self, Vec<String>), ConfigError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let (cfg, used, errors) = Self::load_layered(paths);
        if errors.is_empty() {
            Ok((cfg, used))
        } else {
            Err(ConfigError::Layers(errors))
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                w.push(format!("{name} is {value}; must be a finite number"));
            }
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close.is_finite()
            && std::time::Duration::try_from_secs_f32(self.window.auto_close).is_err()
        {
            w.push(format!(
                "window.autoClose {} too large for a timer -> ignored",
                self.window.auto_close
            ));
        }
        let t = &self.tunables;
        if t.ball_speed <= 0.0 {
            w.push(format!("tunables.ball_speed {} must be > 0", t.ball_speed));
        }
        if t.paddle_speed <= 0.0 {
            w.push(format!("tunables.paddle_speed {} must be > 0", t.paddle_speed));
        }
        if t.paddle_left_key == t.paddle_right_key {
            w.push(format!(
                "paddle left/right share key code {}; paddle cannot steer",
                t.paddle_left_key
            ));
        }
        if t.brick_count == 0 {
            w.push("tunables.brick_count is 0; round is won immediately".into());
        }
        if t.brick_rows == 0 {
            w.push("tunables.brick_rows is 0; no bricks will spawn".into());
        } else if t.brick_count % t.brick_rows != 0 {
            w.push(format!(
                "brick_count {} not divisible by brick_rows {}; last row is partial",
                t.brick_count, t.brick_rows
            ));
        }
        let b = &self.bricks;
        if b.width <= 0.0 || b.height <= 0.0 {
            w.push("bricks.width/height must be > 0".into());
        }
        let cols = t.brick_columns() as f32;
        let grid_w = cols * b.width + (cols - 1.0).max(0.0) * b.gap;
        if grid_w > self.window.width {
            w.push(format!(
                "brick grid width {grid_w} exceeds window width {}",
                self.window.width
            ));
        }
        let rows = t.brick_rows as f32;
        let grid_h = b.top_margin + rows * b.height + (rows - 1.0).max(0.0) * b.gap;
        if grid_h > self.window.height - self.paddle.inset * 2.0 {
            w.push(format!(
                "brick grid height {grid_h} leaves no room above the paddle"
            ));
        }
        if self.paddle.width <= 0.0 || self.paddle.height <= 0.0 {
            w.push("paddle.width/height must be > 0".into());
        }
        if self.paddle.width >= self.window.width {
            w.push("paddle wider than the window; it cannot move".into());
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if !(0.0..90.0).contains(&self.ball.launch_spread_deg) {
            w.push(format!(
                "ball.launch_spread_deg {} outside 0..90",
                self.ball.launch_spread_deg
            ));
        }
        if !(0.0..1.0).contains(&self.ball.min_vertical_ratio) {
            w.push(format!(
                "ball.min_vertical_ratio {} outside 0..1",
                self.ball.min_vertical_ratio
            ));
        }
        if self.lives == 0 {
            w.push("lives is 0; the first miss ends the round".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_use_fixed_literals() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tunables, Tunables::DEFAULT);
        assert_eq!(cfg.tunables.brick_count, 72);
        assert_eq!(cfg.tunables.brick_rows, 12);
        assert_eq!(cfg.tunables.ball_speed, 10.5);
        assert_eq!(cfg.tunables.paddle_speed, 20.0);
        assert_eq!(cfg.tunables.paddle_left_key, 123);
        assert_eq!(cfg.tunables.paddle_right_key, 124);
        assert_eq!(cfg.tunables.brick_columns(), 6);
    }

    #[test]
    fn default_config_validates_clean() {
        let warnings = GameConfig::default().validate();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.tunables.ball_speed = 0.0;
        cfg.tunables.brick_rows = 5;
        cfg.lives = 0;
        let joined = cfg.validate().join("\n");
        assert!(joined.contains("ball_speed"));
        assert!(joined.contains("not divisible"));
        assert!(joined.contains("lives is 0"));
    }

    #[test]
    fn validate_flags_non_finite_and_oversized_values() {
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = f32::NAN;
        cfg.ball.launch_spread_deg = f32::INFINITY;
        cfg.tunables.paddle_speed = f32::NEG_INFINITY;
        let joined = cfg.validate().join("\n");
        assert!(joined.contains("window.autoClose is NaN"), "{joined}");
        assert!(joined.contains("ball.launch_spread_deg is inf"), "{joined}");
        assert!(joined.contains("tunables.paddle_speed is -inf"), "{joined}");

        let mut cfg = GameConfig::default();
        cfg.window.auto_close = 1e30;
        let joined = cfg.validate().join("\n");
        assert!(joined.contains("too large for a timer"), "{joined}");
    }

    #[test]
    fn layered_files_override_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("game.ron");
        let local = dir.path().join("game.local.ron");
        fs::File::create(&base)
            .and_then(|mut f| f.write_all(br#"(window: (width: 640.0, height: 480.0, title: "Base"), lives: 5)"#))
            .expect("write base");
        fs::File::create(&local)
            .and_then(|mut f| f.write_all(br#"(window: (title: "Local"))"#))
            .expect("write local");

        let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 640.0);
        assert_eq!(cfg.window.title, "Local");
        assert_eq!(cfg.lives, 5);
        assert_eq!(cfg.tunables, Tunables::DEFAULT);
    }

    #[test]
    fn missing_layer_is_reported_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.ron");
        let (cfg, used, errors) = GameConfig::load_layered([&missing]);
        assert!(used.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn required_layers_fail_on_any_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("game.ron");
        fs::write(&base, "(lives: 4)").expect("write base");
        let typo = dir.path().join("gaem.local.ron");

        let err = GameConfig::load_required_layers([&base, &typo]).unwrap_err();
        match err {
            ConfigError::Layers(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("gaem.local.ron"), "{errors:?}");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let (cfg, used) = GameConfig::load_required_layers([&base]).expect("base loads");
        assert_eq!(cfg.lives, 4);
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn load_from_file_reports_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.ron");
        fs::write(&path, "(window: (width: ").expect("write");
        let err = GameConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let (cfg, msg) = GameConfig::load_or_default(&path);
        assert_eq!(cfg, GameConfig::default());
        assert!(msg.is_some());
    }
}
