pub mod flow;
pub mod game;
pub mod results;
pub mod state;
