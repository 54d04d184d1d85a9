//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input actions (PreUpdate, see `interaction::input`)
//! 2. Motion (paddle steering, ball speed normalization)
//! 3. Contacts (Rapier collision events -> `BallContact`)
//! 4. Round (lives / blocks bookkeeping, outcome detection)
//! 5. Rapier step (PostUpdate, handled by plugin)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MotionSet; // kinematic paddle moves & ball speed fixes before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ContactSet; // translate collision events

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RoundSet; // consume contacts, decide outcome
