use bevy::prelude::*;

use super::round::RoundState;
use crate::core::components::RoundEntity;

#[derive(Component)]
pub struct HudText;

pub fn hud_line(round: &RoundState) -> String {
    format!("Lives: {}   Blocks: {}", round.lives, round.blocks_remaining)
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hud"),
        HudText,
        RoundEntity,
        Text::new(""),
        TextFont { font_size: 18.0, ..default() },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(8.0),
            ..default()
        },
    ));
}

pub fn update_hud(round: Res<RoundState>, mut q_text: Query<&mut Text, With<HudText>>) {
    if !round.is_changed() {
        return;
    }
    let line = hud_line(&round);
    for mut text in &mut q_text {
        if text.as_str() != line {
            *text = Text::new(line.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_shows_lives_and_blocks() {
        assert_eq!(hud_line(&RoundState::new(3, 72)), "Lives: 3   Blocks: 72");
    }
}
