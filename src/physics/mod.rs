pub mod categories;
pub mod contacts;
pub mod rapier_physics;
