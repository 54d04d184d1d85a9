//! Timed shutdown for smoke runs (`window.autoClose` / `--auto-close`).
use bevy::prelude::*;
use std::time::Duration;

use crate::core::config::GameConfig;

/// Countdown armed at startup when `window.autoClose > 0`.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline).add_systems(
            Update,
            end_session_at_deadline.run_if(resource_exists::<SessionDeadline>),
        );
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs <= 0.0 {
        return;
    }
    let Ok(after) = Duration::try_from_secs_f32(secs) else {
        warn!(target: "session", "autoClose {secs} is not a usable duration; ignoring");
        return;
    };
    info!(target: "session", "Exiting after {secs}s (autoClose)");
    commands.insert_resource(SessionDeadline(Timer::new(after, TimerMode::Once)));
}

fn end_session_at_deadline(
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    mut exit: EventWriter<AppExit>,
) {
    if deadline.tick(time.delta()).just_finished() {
        info!(target: "session", "autoClose deadline reached");
        exit.write(AppExit::Success);
    }
}
