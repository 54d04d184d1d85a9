use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PaddleLeft,
    PaddleRight,
    Restart,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::PaddleLeft, Action::PaddleRight, Action::Restart];

    pub fn name(self) -> &'static str {
        match self {
            Action::PaddleLeft => "PaddleLeft",
            Action::PaddleRight => "PaddleRight",
            Action::Restart => "Restart",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

pub type KeyList = SmallVec<[KeyCode; 2]>;

/// Keys bound to each action. An action with no keys can never fire.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputBindings {
    pub keys: HashMap<Action, KeyList>,
}

impl InputBindings {
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.keys.get(&action).map(|k| k.as_slice()).unwrap_or(&[])
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ActionStateBinary {
    pub pressed: bool,
    pub just_pressed: bool,
}

/// Per-frame action state, evaluated in `PreUpdate` from [`InputBindings`].
#[derive(Resource, Debug, Default)]
pub struct ActionState {
    states: HashMap<Action, ActionStateBinary>,
}

impl ActionState {
    pub fn pressed(&self, action: Action) -> bool {
        self.states.get(&action).is_some_and(|s| s.pressed)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.states.get(&action).is_some_and(|s| s.just_pressed)
    }

    /// -1 for left, +1 for right, 0 when neither or both are held.
    pub fn paddle_axis(&self) -> f32 {
        let mut v = 0.0;
        if self.pressed(Action::PaddleLeft) {
            v -= 1.0;
        }
        if self.pressed(Action::PaddleRight) {
            v += 1.0;
        }
        v
    }

    pub(crate) fn set(&mut self, action: Action, state: ActionStateBinary) {
        self.states.insert(action, state);
    }
}
