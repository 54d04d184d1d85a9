//! Desktop virtual key codes (the numeric codes the tunables are written in)
//! translated to Bevy's layout-independent [`KeyCode`].
use bevy::prelude::KeyCode;

const PLATFORM_KEYS: &[(u16, KeyCode)] = &[
    (0, KeyCode::KeyA),
    (1, KeyCode::KeyS),
    (2, KeyCode::KeyD),
    (13, KeyCode::KeyW),
    (15, KeyCode::KeyR),
    (36, KeyCode::Enter),
    (48, KeyCode::Tab),
    (49, KeyCode::Space),
    (53, KeyCode::Escape),
    (123, KeyCode::ArrowLeft),
    (124, KeyCode::ArrowRight),
    (125, KeyCode::ArrowDown),
    (126, KeyCode::ArrowUp),
];

pub fn platform_key(code: u16) -> Option<KeyCode> {
    PLATFORM_KEYS.iter().find(|(c, _)| *c == code).map(|(_, k)| *k)
}

pub fn platform_code(key: KeyCode) -> Option<u16> {
    PLATFORM_KEYS.iter().find(|(_, k)| *k == key).map(|(c, _)| *c)
}

/// Key names accepted in `Key:<Name>` binding tokens.
pub fn key_by_name(name: &str) -> Option<KeyCode> {
    let kc = match name {
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
        "ArrowRight" | "Right" => KeyCode::ArrowRight,
        "ArrowUp" | "Up" => KeyCode::ArrowUp,
        "ArrowDown" | "Down" => KeyCode::ArrowDown,
        "Space" => KeyCode::Space,
        "Enter" | "Return" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "A" | "KeyA" => KeyCode::KeyA,
        "D" | "KeyD" => KeyCode::KeyD,
        "R" | "KeyR" => KeyCode::KeyR,
        "S" | "KeyS" => KeyCode::KeyS,
        "W" | "KeyW" => KeyCode::KeyW,
        _ => return None,
    };
    Some(kc)
}
