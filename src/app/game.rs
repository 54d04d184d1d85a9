// This file is part of Breakout.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::flow::RoundFlowPlugin;
use super::results::ResultsScenePlugin;
use super::state::AppState;
use crate::core::config::{ConfigDiagnosticsPlugin, GameConfig, Tunables};
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::input::InputActionsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Keeps values inserted by the binary; fills defaults for headless use.
        app.init_resource::<GameConfig>()
            .init_resource::<Tunables>()
            .init_state::<AppState>()
            .add_plugins((
                ConfigDiagnosticsPlugin,
                CameraPlugin,
                PhysicsSetupPlugin,
                InputActionsPlugin,
                GameplayPlugin,
                RoundFlowPlugin,
                ResultsScenePlugin,
                DebugPlugin,
                AutoClosePlugin,
            ));
    }
}
