pub mod input;
pub mod keymap;
pub mod session;
