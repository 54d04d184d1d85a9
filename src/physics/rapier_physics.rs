use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::contacts::{emit_ball_contacts, BallContact};
use crate::core::system::system_order::ContactSet;

/// Pixels per Rapier meter; the arena is laid out in pixels.
pub const PIXELS_PER_METER: f32 = 100.0;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & contact routing

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(PIXELS_PER_METER))
            .add_event::<BallContact>()
            .add_systems(Update, emit_ball_contacts.in_set(ContactSet));
    }
}
