//! Input mapping
//!
//! Look/move navigation is handled by the external controls; this module
//! only decides which key presses are demo actions.

use serde::{Deserialize, Serialize};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// R key
    R,
    /// F key
    F,
    /// Q key
    Q,
    /// E key
    E,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
}

impl KeyCode {
    /// Parse a key name as written in config files (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "w" => Self::W,
            "a" => Self::A,
            "s" => Self::S,
            "d" => Self::D,
            "r" => Self::R,
            "f" => Self::F,
            "q" => Self::Q,
            "e" => Self::E,
            "up" | "arrowup" => Self::Up,
            "down" | "arrowdown" => Self::Down,
            "left" | "arrowleft" => Self::Left,
            "right" | "arrowright" => Self::Right,
            "space" => Self::Space,
            "enter" | "return" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            _ => return None,
        };
        Some(key)
    }
}

/// Demo actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fire one projectile from the viewer
    Fire,
}

/// Key to action mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Key that fires a projectile
    pub fire: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            fire: KeyCode::Space,
        }
    }
}

impl KeyBindings {
    /// Build bindings from the configured fire key name.
    ///
    /// Unknown names fall back to the default binding with a warning.
    pub fn from_fire_key(name: &str) -> Self {
        KeyCode::from_name(name).map_or_else(
            || {
                log::warn!("Unknown fire key '{name}', falling back to Space");
                Self::default()
            },
            |fire| Self { fire },
        )
    }

    /// Action bound to a key press, if any
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        (key == self.fire).then_some(Action::Fire)
    }
}
