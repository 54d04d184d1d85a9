use bevy::prelude::*;

/// High-level app lifecycle state.
/// Playing -> GameOver -> (restart) Playing
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Active round: bricks, paddle and ball are live.
    #[default]
    Playing,
    /// Results screen for the round that just ended.
    GameOver,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Every block cleared.
    Won,
    /// Ball missed the paddle until no lives were left.
    Lost,
}

impl GameOutcome {
    pub fn player_won(self) -> bool {
        matches!(self, GameOutcome::Won)
    }
}

impl From<bool> for GameOutcome {
    fn from(player_won: bool) -> Self {
        if player_won { GameOutcome::Won } else { GameOutcome::Lost }
    }
}

/// Outcome of the last finished round, written by the round system right
/// before switching to [`AppState::GameOver`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct RoundOutcome(pub GameOutcome);
