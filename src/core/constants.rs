//! Fixed gameplay literals. These seed [`Tunables::DEFAULT`](crate::core::config::Tunables)
//! and the default input bindings; nothing derives one value from another.

// Keycodes (desktop virtual key codes)
pub const PADDLE_RIGHT_KEY: u16 = 124; // Right arrow
pub const PADDLE_LEFT_KEY: u16 = 123; // Left arrow
pub const RESTART_KEY: u16 = 49; // Space

// Brick parameters
pub const BRICK_COUNT: usize = 72;
pub const BRICK_ROWS: usize = 12;

// Speeds & parameters (units per 60 Hz frame)
pub const BALL_SPEED: f32 = 10.5;
pub const PADDLE_SPEED: f32 = 20.0;
pub const STARTING_LIVES: u32 = 3;

/// Reference frame rate the per-frame speeds above are expressed in.
pub const REFERENCE_FPS: f32 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_exposed_unchanged() {
        assert_eq!(BRICK_COUNT, 72);
        assert_eq!(BRICK_ROWS, 12);
        assert_eq!(BALL_SPEED, 10.5);
        assert_eq!(PADDLE_SPEED, 20.0);
        assert_eq!(PADDLE_LEFT_KEY, 123);
        assert_eq!(PADDLE_RIGHT_KEY, 124);
    }
}
