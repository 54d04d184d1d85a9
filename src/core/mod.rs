pub mod components;
pub mod config;
pub mod constants;
pub mod system;
