// This file is part of Breakout.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use breakout::core::config::{ConfigDiagnostics, GameConfig};
use breakout::interaction::input::InputConfigPath;
use breakout::GamePlugin;

const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Breakout on Bevy + Rapier2D", long_about = None)]
struct Args {
    /// Config layers merged in order; later files override earlier keys.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
    /// Input bindings TOML.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Every explicit layer must load; default layers are optional (local override usually absent).
    let (mut cfg, used, errors) = if args.configs.is_empty() {
        let defaults = DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).filter(|p| p.exists());
        GameConfig::load_layered(defaults)
    } else {
        let (cfg, used) = GameConfig::load_required_layers(&args.configs)?;
        (cfg, used, Vec::new())
    };
    if let Some(secs) = args.auto_close {
        if !secs.is_finite() || secs < 0.0 {
            bail!("--auto-close must be a finite number of seconds >= 0 (got {secs})");
        }
        cfg.window.auto_close = secs;
    }
    let arena = cfg.arena_size();
    if !(arena.is_finite() && arena.x > 0.0 && arena.y > 0.0) {
        bail!("window dimensions must be > 0 (got {}x{})", cfg.window.width, cfg.window.height);
    }
    let warnings = cfg.validate();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(cfg.tunables)
    .insert_resource(ConfigDiagnostics { used, errors, warnings })
    .insert_resource(InputConfigPath(args.input.unwrap_or_else(|| InputConfigPath::default().0)));

    #[cfg(feature = "debug")]
    app.add_plugins(bevy_rapier2d::render::RapierDebugRenderPlugin {
        enabled: cfg.rapier_debug,
        ..default()
    });

    app.insert_resource(cfg).add_plugins(GamePlugin);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with error code {code}"),
    }
}
