use bevy::prelude::*;
use std::collections::HashSet;

use super::ball::ServeBall;
use crate::app::state::{AppState, GameOutcome, RoundOutcome};
use crate::core::config::GameConfig;
use crate::physics::contacts::BallContact;

/// Lives and blocks left in the current round.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub lives: u32,
    pub blocks_remaining: usize,
    pub finished: Option<GameOutcome>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(crate::core::constants::STARTING_LIVES, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundProgress {
    Continue,
    /// Ball went out the bottom but lives remain.
    BallLost,
    Finished(GameOutcome),
}

impl RoundState {
    pub fn new(lives: u32, blocks: usize) -> Self {
        Self { lives, blocks_remaining: blocks, finished: None }
    }

    /// Applies one ball contact. A finished round ignores further contacts.
    pub fn apply(&mut self, contact: BallContact) -> RoundProgress {
        if self.finished.is_some() {
            return RoundProgress::Continue;
        }
        match contact {
            BallContact::Block(_) => {
                self.blocks_remaining = self.blocks_remaining.saturating_sub(1);
                if self.blocks_remaining == 0 {
                    self.finished = Some(GameOutcome::Won);
                    return RoundProgress::Finished(GameOutcome::Won);
                }
                RoundProgress::Continue
            }
            BallContact::Bottom => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.finished = Some(GameOutcome::Lost);
                    return RoundProgress::Finished(GameOutcome::Lost);
                }
                RoundProgress::BallLost
            }
            BallContact::Paddle => RoundProgress::Continue,
        }
    }
}

/// Records the outcome and switches to the results screen.
pub fn finish_round(
    commands: &mut Commands,
    round: &mut RoundState,
    next_state: &mut NextState<AppState>,
    outcome: GameOutcome,
) {
    round.finished = Some(outcome);
    info!(target: "round", "Round over: {:?} (lives={}, blocks_remaining={})", outcome, round.lives, round.blocks_remaining);
    commands.insert_resource(RoundOutcome(outcome));
    next_state.set(AppState::GameOver);
}

pub fn reset_round(mut commands: Commands, cfg: Res<GameConfig>, mut round: ResMut<RoundState>) {
    commands.remove_resource::<RoundOutcome>();
    *round = RoundState::new(cfg.lives, 0);
}

pub fn apply_ball_contacts(
    mut commands: Commands,
    mut contacts: EventReader<BallContact>,
    mut round: ResMut<RoundState>,
    mut serves: EventWriter<ServeBall>,
    mut next_state: ResMut<NextState<AppState>>,
    mut removed: Local<HashSet<Entity>>,
) {
    removed.clear();
    for contact in contacts.read() {
        if let BallContact::Block(block) = *contact {
            // the same brick can be reported twice before its despawn applies
            if !removed.insert(block) {
                continue;
            }
            commands.entity(block).try_despawn();
        }
        match round.apply(*contact) {
            RoundProgress::Continue => {}
            RoundProgress::BallLost => {
                info!(target: "round", "Ball lost, {} lives left", round.lives);
                serves.write(ServeBall);
            }
            RoundProgress::Finished(outcome) => {
                finish_round(&mut commands, &mut round, &mut next_state, outcome);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> BallContact {
        BallContact::Block(Entity::PLACEHOLDER)
    }

    #[test]
    fn clearing_last_block_wins() {
        let mut st = RoundState::new(3, 2);
        assert_eq!(st.apply(block()), RoundProgress::Continue);
        assert_eq!(st.apply(block()), RoundProgress::Finished(GameOutcome::Won));
        assert_eq!(st.blocks_remaining, 0);
        assert_eq!(st.finished, Some(GameOutcome::Won));
    }

    #[test]
    fn losing_all_lives_loses() {
        let mut st = RoundState::new(2, 10);
        assert_eq!(st.apply(BallContact::Bottom), RoundProgress::BallLost);
        assert_eq!(st.lives, 1);
        assert_eq!(st.apply(BallContact::Bottom), RoundProgress::Finished(GameOutcome::Lost));
        assert_eq!(st.lives, 0);
    }

    #[test]
    fn paddle_hits_change_nothing() {
        let mut st = RoundState::new(3, 5);
        assert_eq!(st.apply(BallContact::Paddle), RoundProgress::Continue);
        assert_eq!(st, RoundState::new(3, 5));
    }

    #[test]
    fn finished_round_ignores_contacts() {
        let mut st = RoundState::new(1, 5);
        assert_eq!(st.apply(BallContact::Bottom), RoundProgress::Finished(GameOutcome::Lost));
        assert_eq!(st.apply(block()), RoundProgress::Continue);
        assert_eq!(st.blocks_remaining, 5);
    }
}
