pub mod arena;
pub mod ball;
pub mod bricks;
pub mod hud;
pub mod paddle;
pub mod round;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::system::system_order::{ContactSet, MotionSet, RoundSet};
use crate::physics::contacts::BallContact;
use arena::spawn_arena;
use ball::{keep_ball_speed, serve_ball, spawn_ball, ServeBall};
use bricks::spawn_bricks;
use hud::{spawn_hud, update_hud};
use paddle::{move_paddle, spawn_paddle};
use round::{apply_ball_contacts, reset_round, RoundState};

/// Round setup on entering `Playing` plus the per-frame paddle/ball/round systems.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoundState>()
            .add_event::<ServeBall>()
            .add_event::<BallContact>()
            .configure_sets(
                Update,
                (MotionSet, ContactSet.after(MotionSet), RoundSet.after(ContactSet)),
            )
            .add_systems(
                OnEnter(AppState::Playing),
                (reset_round, spawn_arena, spawn_bricks, spawn_paddle, spawn_ball, spawn_hud).chain(),
            )
            .add_systems(
                Update,
                (
                    (move_paddle, serve_ball, keep_ball_speed).chain().in_set(MotionSet),
                    apply_ball_contacts.in_set(RoundSet),
                    update_hud.after(RoundSet),
                )
                    .run_if(in_state(AppState::Playing)),
            );
    }
}
