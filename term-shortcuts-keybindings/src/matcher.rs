//! Key event matching.
//!
//! Two rules, applied in order:
//! 1. Auto-focus: a plain lowercase ASCII letter with no Ctrl/Meta/Shift.
//! 2. Shortcut: physical key equal and Ctrl/Meta/Shift exactly equal.
//!
//! Alt is never consulted by either rule.

use crate::definition::ShortcutDefinition;
use crate::event::{KeyEvent, ModifierState};
use winit::keyboard::{Key, KeyCode};

/// Matcher for comparing a key event against shortcut definitions.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Active modifiers from the event
    modifiers: ModifierState,
    /// Single character produced by the event, if it produced exactly one
    character: Option<char>,
    /// Physical key code (None when the platform could not identify it)
    physical_key: Option<KeyCode>,
}

impl KeybindingMatcher {
    /// Create a matcher from a key event.
    pub fn from_event(event: &KeyEvent) -> Self {
        let character = match &event.logical_key {
            Key::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => None,
                }
            }
            _ => None,
        };

        Self {
            modifiers: event.modifiers,
            character,
            physical_key: event.key_code(),
        }
    }

    /// True when the event should redirect focus to the input instead of
    /// being matched against shortcuts.
    pub fn is_auto_focus(&self) -> bool {
        let plain = !self.modifiers.meta && !self.modifiers.shift && !self.modifiers.ctrl;
        plain && self.character.is_some_and(|ch| ch.is_ascii_lowercase())
    }

    /// Check if this event matches the given shortcut.
    pub fn matches(&self, shortcut: &ShortcutDefinition) -> bool {
        // Key first (quick rejection); unidentified keys match nothing
        if self.physical_key != Some(shortcut.physical_key) {
            return false;
        }

        self.modifiers.ctrl == shortcut.requires_ctrl
            && self.modifiers.meta == shortcut.requires_meta
            && self.modifiers.shift == shortcut.requires_shift
    }
}
