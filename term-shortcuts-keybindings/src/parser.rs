//! Key combination parser.
//!
//! Parses human-readable key strings like "Ctrl+KeyL" or "Primary+Shift+K"
//! into KeyCombo structs. Shortcuts always bind a physical key position, so
//! single characters are translated to their US-QWERTY key code.

use crate::platform::{
    ResolvedPrimary, parse_physical_key_code, physical_key_for_char, resolve_primary,
};
use std::fmt;
use term_shortcuts_config::PrimaryModifier;
use winit::keyboard::KeyCode;

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Modifiers named in a key combination string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComboModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// If true, this represents the configurable primary modifier (Cmd or Ctrl)
    pub primary: bool,
}

/// A parsed key combination (modifiers + physical key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: ComboModifiers,
    pub key: KeyCode,
}

impl KeyCombo {
    /// Resolve the `Primary` token and return the exact `(ctrl, meta, shift)`
    /// state an event must have to match.
    pub fn resolve(&self, primary: PrimaryModifier) -> (bool, bool, bool) {
        let mut ctrl = self.modifiers.ctrl;
        let mut meta = self.modifiers.meta;
        if self.modifiers.primary {
            match resolve_primary(primary) {
                ResolvedPrimary::Ctrl => ctrl = true,
                ResolvedPrimary::Meta => meta = true,
            }
        }
        (ctrl, meta, self.modifiers.shift)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.primary {
            parts.push("Primary".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.meta {
            parts.push("Meta".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        parts.push(format!("{:?}", self.key));

        write!(f, "{}", parts.join("+"))
    }
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Meta`, `Cmd`, `Command`, `Super`, `Win` - Meta/Cmd key
/// - `Shift` - Shift key
/// - `Primary`, `CmdOrCtrl` - the configured primary modifier
///
/// Alt is deliberately rejected: shortcut matching never looks at it.
///
/// Keys:
/// - Physical key codes: `KeyL`, `Digit1`, `Backspace`, `Enter`, `F5`, ...
/// - The same in brackets: `[KeyL]`
/// - Single characters, taken as their QWERTY position: `L`, `1`, `/`
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = ComboModifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        let part_lower = part.to_lowercase();

        let is_modifier = match part_lower.as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "meta" | "cmd" | "command" | "super" | "win" => {
                modifiers.meta = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "primary" | "cmdorctrl" => {
                modifiers.primary = true;
                true
            }
            "alt" | "option" => {
                return Err(ParseError(format!(
                    "Modifier '{}' is not supported in shortcuts",
                    part
                )));
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError(
                "Key combination ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

/// Parse a key string into a physical KeyCode.
fn parse_key(s: &str) -> Result<KeyCode, ParseError> {
    if s.is_empty() {
        return Err(ParseError("No key specified".to_string()));
    }

    // Bracketed form only accepts code names: [KeyZ], [Digit1]
    if s.len() > 2 && s.starts_with('[') && s.ends_with(']') {
        let code_str = &s[1..s.len() - 1];
        return parse_physical_key_code(code_str)
            .ok_or_else(|| ParseError(format!("Unknown physical key code: '{}'", code_str)));
    }

    if let Some(code) = parse_physical_key_code(s) {
        return Ok(code);
    }

    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next())
        && let Some(code) = physical_key_for_char(ch)
    {
        return Ok(code);
    }

    Err(ParseError(format!("Unknown key: '{}'", s)))
}
