use bevy::prelude::*;
use std::collections::HashMap;

use super::types::{Action, InputBindings, KeyList};
use crate::core::config::Tunables;
use crate::interaction::keymap::{key_by_name, platform_key};

#[derive(Debug, Default)]
pub struct ParsedBindings {
    pub bindings: InputBindings,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    bindings: Option<HashMap<String, Vec<String>>>,
}

/// Bindings built from the key codes in [`Tunables`] (left/right/restart).
pub fn default_bindings(tunables: &Tunables) -> ParsedBindings {
    let mut result = ParsedBindings::default();
    for (action, code) in [
        (Action::PaddleLeft, tunables.paddle_left_key),
        (Action::PaddleRight, tunables.paddle_right_key),
        (Action::Restart, tunables.restart_key),
    ] {
        match platform_key(code) {
            Some(k) => {
                result.bindings.keys.entry(action).or_default().push(k);
            }
            None => result.errors.push(format!("{}: unknown key code {code}", action.name())),
        }
    }
    result
}

/// Parses an input TOML. Actions listed in the file replace their defaults;
/// unlisted actions keep the tunable key codes. Errors never abort parsing.
pub fn parse_input_toml(raw: &str, tunables: &Tunables) -> ParsedBindings {
    let mut result = default_bindings(tunables);
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };
    let Some(bindings) = root.bindings else { return result };
    for (name, tokens) in bindings {
        let Some(action) = Action::from_name(&name) else {
            result.errors.push(format!("Binding references unknown action '{name}'"));
            continue;
        };
        let mut keys = KeyList::new();
        for token in &tokens {
            match parse_token(token) {
                Ok(k) if keys.contains(&k) => {
                    result.errors.push(format!("[binding {name} '{token}'] duplicate key {k:?}"));
                }
                Ok(k) => keys.push(k),
                Err(err) => result.errors.push(format!("[binding {name} '{token}'] {err}")),
            }
        }
        result.bindings.keys.insert(action, keys);
    }
    result
}

fn parse_token(s: &str) -> Result<KeyCode, String> {
    let s = s.trim();
    if let Some(rest) = s.strip_prefix("Code:") {
        let code: u16 = rest.trim().parse().map_err(|_| format!("Invalid key code '{rest}'"))?;
        return platform_key(code).ok_or_else(|| format!("Unsupported key code {code} (extend keymap)"));
    }
    if let Some(rest) = s.strip_prefix("Key:") {
        return key_by_name(rest.trim()).ok_or_else(|| format!("Unsupported KeyCode '{rest}' (extend keymap)"));
    }
    Err(format!("Unrecognized token '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_tunable_codes() {
        let parsed = default_bindings(&Tunables::DEFAULT);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.bindings.keys_for(Action::PaddleLeft), &[KeyCode::ArrowLeft]);
        assert_eq!(parsed.bindings.keys_for(Action::PaddleRight), &[KeyCode::ArrowRight]);
        assert_eq!(parsed.bindings.keys_for(Action::Restart), &[KeyCode::Space]);
    }

    #[test]
    fn file_overrides_listed_actions_only() {
        let raw = r#"
            [bindings]
            PaddleLeft = ["Code:123", "Key:KeyA"]
        "#;
        let parsed = parse_input_toml(raw, &Tunables::DEFAULT);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(
            parsed.bindings.keys_for(Action::PaddleLeft),
            &[KeyCode::ArrowLeft, KeyCode::KeyA]
        );
        assert_eq!(parsed.bindings.keys_for(Action::PaddleRight), &[KeyCode::ArrowRight]);
    }

    #[test]
    fn bad_entries_are_collected() {
        let raw = r#"
            [bindings]
            Jump = ["Key:Space"]
            Restart = ["Code:9999", "Mouse:Left", "Key:Enter"]
        "#;
        let parsed = parse_input_toml(raw, &Tunables::DEFAULT);
        assert_eq!(parsed.errors.len(), 3, "{:?}", parsed.errors);
        assert_eq!(parsed.bindings.keys_for(Action::Restart), &[KeyCode::Enter]);
    }

    #[test]
    fn unknown_tunable_code_reported() {
        let mut t = Tunables::DEFAULT;
        t.restart_key = 4000;
        let parsed = default_bindings(&t);
        assert_eq!(parsed.errors.len(), 1);
        assert!(parsed.bindings.keys_for(Action::Restart).is_empty());
    }

    #[test]
    fn malformed_toml_keeps_defaults() {
        let parsed = parse_input_toml("[bindings\n", &Tunables::DEFAULT);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.bindings, default_bindings(&Tunables::DEFAULT).bindings);
    }
}
