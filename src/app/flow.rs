use bevy::prelude::*;

use super::state::AppState;
use crate::core::components::RoundEntity;
use crate::interaction::input::{Action, ActionState};

/// Moves between rounds and the results screen. The results scene itself
/// never reads input; restarting is decided here.
pub struct RoundFlowPlugin;

impl Plugin for RoundFlowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(AppState::Playing), despawn_round_entities)
            .add_systems(Update, restart_on_action.run_if(in_state(AppState::GameOver)));
    }
}

fn despawn_round_entities(mut commands: Commands, q: Query<Entity, With<RoundEntity>>) {
    let mut n = 0usize;
    for e in &q {
        commands.entity(e).despawn();
        n += 1;
    }
    debug!(target: "round", "Despawned {n} round entities");
}

fn restart_on_action(actions: Res<ActionState>, mut next_state: ResMut<NextState<AppState>>) {
    if actions.just_pressed(Action::Restart) {
        info!(target: "round", "Restart requested");
        next_state.set(AppState::Playing);
    }
}
