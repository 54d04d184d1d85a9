pub mod parse;
pub mod plugin;
pub mod types;

pub use plugin::{InputActionsPlugin, InputConfigPath};
pub use types::{Action, ActionState, InputBindings};
