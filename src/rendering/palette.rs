//! Brick row palette & shared sprite colors.

use bevy::prelude::*;

/// Row colors from the top row down; wraps for taller layouts.
pub const ROW_COLORS: [Color; 6] = [
    Color::srgb(0.90, 0.20, 0.25), // red
    Color::srgb(0.95, 0.50, 0.15), // orange
    Color::srgb(0.95, 0.75, 0.15), // yellow
    Color::srgb(0.20, 0.80, 0.45), // green
    Color::srgb(0.20, 0.55, 0.90), // blue
    Color::srgb(0.65, 0.45, 0.95), // purple
];

pub const BACKGROUND_COLOR: Color = Color::srgb(0.03, 0.03, 0.06);
pub const PADDLE_COLOR: Color = Color::srgb(0.85, 0.88, 0.95);
pub const BALL_COLOR: Color = Color::WHITE;
pub const WALL_COLOR: Color = Color::srgba(0.25, 0.45, 0.70, 0.45);

/// Color for brick row `row`, two consecutive rows per palette entry.
#[inline]
pub fn color_for_row(row: usize) -> Color {
    ROW_COLORS[(row / 2) % ROW_COLORS.len()]
}
