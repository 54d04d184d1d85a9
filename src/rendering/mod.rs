pub mod camera;
pub mod palette;
