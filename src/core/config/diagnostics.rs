use bevy::prelude::*;

/// Config load results gathered before the app (and its logger) existed.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct ConfigDiagnosticsPlugin;

impl Plugin for ConfigDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, log_config_diagnostics);
    }
}

fn log_config_diagnostics(diag: Option<Res<ConfigDiagnostics>>) {
    let Some(diag) = diag else { return };
    if diag.used.is_empty() {
        info!(target: "config", "No config files found; using built-in defaults");
    } else {
        info!(target: "config", "Config layers: {}", diag.used.join(", "));
    }
    for e in &diag.errors {
        warn!(target: "config", "CONFIG issue: {e}");
    }
    for w in &diag.warnings {
        warn!(target: "config", "CONFIG validation: {w}");
    }
}
