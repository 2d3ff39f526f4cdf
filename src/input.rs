//! Keyboard input mapping
//!
//! Translates raw key identifiers into the four logical player actions.
//! Keys that map to nothing are simply ignored by callers.

use crate::sim::{Intent, Side};

/// A logical control the players can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
}

impl Action {
    /// Legacy numeric `keyCode` values: W, S, ArrowUp, ArrowDown
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(Action::Player1Up),
            83 => Some(Action::Player1Down),
            38 => Some(Action::Player2Up),
            40 => Some(Action::Player2Down),
            _ => None,
        }
    }

    /// DOM `KeyboardEvent.code` (physical key, layout independent)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Action::Player1Up),
            "KeyS" => Some(Action::Player1Down),
            "ArrowUp" => Some(Action::Player2Up),
            "ArrowDown" => Some(Action::Player2Down),
            _ => None,
        }
    }

    /// Resolve a keyboard event: `code` first, then the legacy `keyCode`
    /// for browsers that leave `code` empty
    pub fn from_event(code: &str, key_code: u32) -> Option<Self> {
        Self::from_code(code).or_else(|| Self::from_key_code(key_code))
    }

    /// Player 1 defends the left edge
    pub fn side(self) -> Side {
        match self {
            Action::Player1Up | Action::Player1Down => Side::Left,
            Action::Player2Up | Action::Player2Down => Side::Right,
        }
    }

    /// Direction this action commands while held
    pub fn intent(self) -> Intent {
        match self {
            Action::Player1Up | Action::Player2Up => Intent::Up,
            Action::Player1Down | Action::Player2Down => Intent::Down,
        }
    }
}
