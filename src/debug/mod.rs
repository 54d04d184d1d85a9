//! Debug module: feature gated round stats logging & Rapier wireframe toggle.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    pub log_interval: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self { frame_counter: 0, time_accum: 0.0, log_interval: 5.0 }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        app.init_resource::<DebugState>()
            .add_systems(Update, (debug_logging_system, toggle_rapier_wireframe));
    }
}

/// F1 flips the Rapier wireframe when the debug renderer is installed.
#[cfg(feature = "debug")]
pub fn toggle_rapier_wireframe(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    ctx: Option<ResMut<bevy_rapier2d::render::DebugRenderContext>>,
) {
    let (Some(keys), Some(mut ctx)) = (keys, ctx) else { return };
    if keys.just_pressed(KeyCode::F1) {
        ctx.enabled = !ctx.enabled;
        info!(target: "debug", "Rapier wireframe {}", if ctx.enabled { "on" } else { "off" });
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;
    use bevy_rapier2d::render::DebugRenderContext;

    #[test]
    fn f1_toggles_wireframe() {
        let mut app = App::new();
        app.insert_resource(ButtonInput::<KeyCode>::default())
            .insert_resource(DebugRenderContext { enabled: false, ..Default::default() })
            .add_systems(Update, toggle_rapier_wireframe);
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::F1);
        app.update();
        assert!(app.world().resource::<DebugRenderContext>().enabled);
    }

    #[test]
    fn missing_debug_renderer_is_ignored() {
        let mut app = App::new();
        app.insert_resource(ButtonInput::<KeyCode>::default())
            .add_systems(Update, toggle_rapier_wireframe);
        app.update();
    }
}
