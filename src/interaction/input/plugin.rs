use bevy::input::InputSystem;
use bevy::prelude::*;
use std::path::PathBuf;

use super::parse::{default_bindings, parse_input_toml};
use super::types::{Action, ActionState, ActionStateBinary, InputBindings};
use crate::core::config::Tunables;
use crate::interaction::keymap::platform_code;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

/// Where the bindings TOML is read from at startup.
#[derive(Resource, Debug, Clone)]
pub struct InputConfigPath(pub PathBuf);

impl Default for InputConfigPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/config/input.toml"))
    }
}

pub struct InputActionsPlugin;

impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .init_resource::<ActionState>()
            .init_resource::<InputConfigPath>()
            .configure_sets(PreUpdate, InputActionUpdateSet.after(InputSystem))
            .add_systems(PreStartup, load_input_bindings)
            .add_systems(PreUpdate, evaluate_actions.in_set(InputActionUpdateSet));
    }
}

fn load_input_bindings(mut commands: Commands, path: Res<InputConfigPath>, tunables: Res<Tunables>) {
    let parsed = match std::fs::read_to_string(&path.0) {
        Ok(raw) => parse_input_toml(&raw, &tunables),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(target: "input", "{} not found; using default key codes", path.0.display());
            default_bindings(&tunables)
        }
        Err(e) => {
            warn!(target: "input", "read {}: {e}; using default key codes", path.0.display());
            default_bindings(&tunables)
        }
    };
    for e in &parsed.errors {
        error!(target: "input", "INPUT MAP ERROR: {e}");
    }
    for action in Action::ALL {
        debug!(target: "input", "{} -> {}", action.name(), describe_keys(parsed.bindings.keys_for(action)));
    }
    commands.insert_resource(parsed.bindings);
}

/// Bound keys for log output, with the desktop key code where one exists.
pub fn describe_keys(keys: &[KeyCode]) -> String {
    keys.iter()
        .map(|k| match platform_code(*k) {
            Some(code) => format!("{k:?} (code {code})"),
            None => format!("{k:?}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn evaluate_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut state: ResMut<ActionState>,
) {
    for action in Action::ALL {
        let keys = bindings.keys_for(action);
        state.set(
            action,
            ActionStateBinary {
                pressed: keyboard.any_pressed(keys.iter().copied()),
                just_pressed: keyboard.any_just_pressed(keys.iter().copied()),
            },
        );
    }
}
