//! Hotkey system
//!
//! Centralized hotkey management for the player.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on focus state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()` (and `PlayerConfig` if it is rebindable)
//! 3. Handle the action in `PlayerController::run_hotkey`

use dioxus::prelude::Key;

use crate::state::PlayerConfig;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Jump forward by the seek step.
    SeekForward,
    /// Jump back by the seek step, stopping at the start.
    SeekBackward,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a text-entry field has focus (suppresses all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Letter keys bound to player actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub seek_forward: String,
    pub seek_backward: String,
}

impl KeyBindings {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            seek_forward: config.seek_forward_key.to_lowercase(),
            seek_backward: config.seek_backward_key.to_lowercase(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

/// Build a `Key` from the `KeyboardEvent.key` string the web view reports.
pub fn key_from_dom(value: &str) -> Key {
    if value.chars().count() == 1 {
        Key::Character(value.to_string())
    } else {
        Key::Unidentified
    }
}

/// Maps a key event to an action, considering the current context.
///
/// Modifier combinations never match: ctrl/alt/meta chords belong to the
/// platform. Shift is allowed so caps-lock and shifted letters still work.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
    context: &HotkeyContext,
    bindings: &KeyBindings,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    if ctrl || alt || meta {
        return HotkeyResult::NoMatch;
    }

    match key {
        Key::Character(c) if c.to_lowercase() == bindings.seek_forward => {
            HotkeyResult::Action(HotkeyAction::SeekForward)
        }
        Key::Character(c) if c.to_lowercase() == bindings.seek_backward => {
            HotkeyResult::Action(HotkeyAction::SeekBackward)
        }
        _ => HotkeyResult::NoMatch,
    }
}
