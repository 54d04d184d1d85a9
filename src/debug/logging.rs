#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::DebugState;
#[cfg(feature = "debug")]
use crate::app::state::AppState;
#[cfg(feature = "debug")]
use crate::core::components::Ball;
#[cfg(feature = "debug")]
use crate::gameplay::round::RoundState;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    app_state: Res<State<AppState>>,
    round: Res<RoundState>,
    balls: Query<&Transform, With<Ball>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        let ball = balls.iter().next().map(|t| t.translation.truncate());
        info!(target: "debug", "SIM frame={} t={:.3}s state={:?} lives={} blocks={} ball={:?}",
            state.frame_counter,
            time.elapsed_secs(),
            app_state.get(),
            round.lives,
            round.blocks_remaining,
            ball);
    }
}
