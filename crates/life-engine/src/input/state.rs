use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Held-key state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Keys currently held.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Release events are not delivered while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed } => {
                self.keys_down.insert(key);
            }
            InputEvent::Key { key, state: KeyState::Released } => {
                self.keys_down.remove(&key);
            }
        }
    }

    /// True if any of `keys` is currently held.
    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.keys_down.contains(k))
    }
}
