//! Platform-specific keybinding resolution.
//!
//! Contains:
//! - `Primary` modifier resolution (Cmd on macOS, Ctrl elsewhere, or forced by config)
//! - QWERTY character → physical key mapping for single-character key strings
//! - Physical key code alias table (string → `KeyCode`)

use term_shortcuts_config::PrimaryModifier;
use winit::keyboard::KeyCode;

/// Concrete modifier a `Primary` token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedPrimary {
    Ctrl,
    Meta,
}

/// Resolve the configured primary modifier for the current platform.
///
/// - `Platform` on macOS: Meta (Cmd key).
/// - `Platform` elsewhere: Ctrl.
#[inline]
pub fn resolve_primary(primary: PrimaryModifier) -> ResolvedPrimary {
    match primary {
        PrimaryModifier::Ctrl => ResolvedPrimary::Ctrl,
        PrimaryModifier::Meta => ResolvedPrimary::Meta,
        PrimaryModifier::Platform => {
            #[cfg(target_os = "macos")]
            {
                ResolvedPrimary::Meta
            }
            #[cfg(not(target_os = "macos"))]
            {
                ResolvedPrimary::Ctrl
            }
        }
    }
}

/// Map a character to the physical key that produces it on a US QWERTY layout.
///
/// Letters are matched case-insensitively. Returns `None` for characters with
/// no unshifted QWERTY position.
pub fn physical_key_for_char(ch: char) -> Option<KeyCode> {
    let code = match ch.to_ascii_uppercase() {
        'A' => KeyCode::KeyA,
        'B' => KeyCode::KeyB,
        'C' => KeyCode::KeyC,
        'D' => KeyCode::KeyD,
        'E' => KeyCode::KeyE,
        'F' => KeyCode::KeyF,
        'G' => KeyCode::KeyG,
        'H' => KeyCode::KeyH,
        'I' => KeyCode::KeyI,
        'J' => KeyCode::KeyJ,
        'K' => KeyCode::KeyK,
        'L' => KeyCode::KeyL,
        'M' => KeyCode::KeyM,
        'N' => KeyCode::KeyN,
        'O' => KeyCode::KeyO,
        'P' => KeyCode::KeyP,
        'Q' => KeyCode::KeyQ,
        'R' => KeyCode::KeyR,
        'S' => KeyCode::KeyS,
        'T' => KeyCode::KeyT,
        'U' => KeyCode::KeyU,
        'V' => KeyCode::KeyV,
        'W' => KeyCode::KeyW,
        'X' => KeyCode::KeyX,
        'Y' => KeyCode::KeyY,
        'Z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        '-' => KeyCode::Minus,
        '=' => KeyCode::Equal,
        '[' => KeyCode::BracketLeft,
        ']' => KeyCode::BracketRight,
        '\\' => KeyCode::Backslash,
        ';' => KeyCode::Semicolon,
        '\'' => KeyCode::Quote,
        '`' => KeyCode::Backquote,
        ',' => KeyCode::Comma,
        '.' => KeyCode::Period,
        '/' => KeyCode::Slash,
        _ => return None,
    };
    Some(code)
}

/// Parse a physical key code string into a [`KeyCode`].
///
/// Accepts the layout-independent code names hosts report (`"KeyL"`,
/// `"Digit0"`, `"Backspace"`, `"ArrowUp"`) plus a few common aliases
/// (`"Return"`, `"Esc"`, `"Del"`). Matching is case-insensitive. Returns
/// `None` for unrecognised strings.
pub fn parse_physical_key_code(s: &str) -> Option<KeyCode> {
    match s.to_lowercase().as_str() {
        // Letter keys
        "keya" => Some(KeyCode::KeyA),
        "keyb" => Some(KeyCode::KeyB),
        "keyc" => Some(KeyCode::KeyC),
        "keyd" => Some(KeyCode::KeyD),
        "keye" => Some(KeyCode::KeyE),
        "keyf" => Some(KeyCode::KeyF),
        "keyg" => Some(KeyCode::KeyG),
        "keyh" => Some(KeyCode::KeyH),
        "keyi" => Some(KeyCode::KeyI),
        "keyj" => Some(KeyCode::KeyJ),
        "keyk" => Some(KeyCode::KeyK),
        "keyl" => Some(KeyCode::KeyL),
        "keym" => Some(KeyCode::KeyM),
        "keyn" => Some(KeyCode::KeyN),
        "keyo" => Some(KeyCode::KeyO),
        "keyp" => Some(KeyCode::KeyP),
        "keyq" => Some(KeyCode::KeyQ),
        "keyr" => Some(KeyCode::KeyR),
        "keys" => Some(KeyCode::KeyS),
        "keyt" => Some(KeyCode::KeyT),
        "keyu" => Some(KeyCode::KeyU),
        "keyv" => Some(KeyCode::KeyV),
        "keyw" => Some(KeyCode::KeyW),
        "keyx" => Some(KeyCode::KeyX),
        "keyy" => Some(KeyCode::KeyY),
        "keyz" => Some(KeyCode::KeyZ),

        // Number row
        "digit0" => Some(KeyCode::Digit0),
        "digit1" => Some(KeyCode::Digit1),
        "digit2" => Some(KeyCode::Digit2),
        "digit3" => Some(KeyCode::Digit3),
        "digit4" => Some(KeyCode::Digit4),
        "digit5" => Some(KeyCode::Digit5),
        "digit6" => Some(KeyCode::Digit6),
        "digit7" => Some(KeyCode::Digit7),
        "digit8" => Some(KeyCode::Digit8),
        "digit9" => Some(KeyCode::Digit9),

        // Punctuation/symbols by position
        "minus" => Some(KeyCode::Minus),
        "equal" => Some(KeyCode::Equal),
        "bracketleft" => Some(KeyCode::BracketLeft),
        "bracketright" => Some(KeyCode::BracketRight),
        "backslash" => Some(KeyCode::Backslash),
        "semicolon" => Some(KeyCode::Semicolon),
        "quote" => Some(KeyCode::Quote),
        "backquote" => Some(KeyCode::Backquote),
        "comma" => Some(KeyCode::Comma),
        "period" => Some(KeyCode::Period),
        "slash" => Some(KeyCode::Slash),

        // Function keys
        "f1" => Some(KeyCode::F1),
        "f2" => Some(KeyCode::F2),
        "f3" => Some(KeyCode::F3),
        "f4" => Some(KeyCode::F4),
        "f5" => Some(KeyCode::F5),
        "f6" => Some(KeyCode::F6),
        "f7" => Some(KeyCode::F7),
        "f8" => Some(KeyCode::F8),
        "f9" => Some(KeyCode::F9),
        "f10" => Some(KeyCode::F10),
        "f11" => Some(KeyCode::F11),
        "f12" => Some(KeyCode::F12),

        // Navigation keys
        "arrowup" | "up" => Some(KeyCode::ArrowUp),
        "arrowdown" | "down" => Some(KeyCode::ArrowDown),
        "arrowleft" | "left" => Some(KeyCode::ArrowLeft),
        "arrowright" | "right" => Some(KeyCode::ArrowRight),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "insert" | "ins" => Some(KeyCode::Insert),
        "delete" | "del" => Some(KeyCode::Delete),

        // Special keys
        "enter" | "return" => Some(KeyCode::Enter),
        "numpadenter" => Some(KeyCode::NumpadEnter),
        "escape" | "esc" => Some(KeyCode::Escape),
        "space" => Some(KeyCode::Space),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),

        _ => None,
    }
}
