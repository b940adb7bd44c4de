//! Default configuration values.

use crate::types::{LogLevel, PrimaryModifier, ShortcutBinding};

pub fn primary_modifier() -> PrimaryModifier {
    PrimaryModifier::Platform
}

pub fn auto_focus_letters() -> bool {
    true
}

pub fn merge_default_shortcuts() -> bool {
    true
}

pub fn log_level() -> LogLevel {
    LogLevel::Warn
}

/// The built-in shortcut set.
///
/// These use literal Ctrl/Meta rather than `Primary` so they behave the same
/// on every platform. Order matters: it is the firing order.
pub fn shortcuts() -> Vec<ShortcutBinding> {
    vec![
        ShortcutBinding::new("Ctrl+KeyL", "clear_screen")
            .with_description("Clear screen")
            .with_label("Ctrl + L"),
        // Native paste still runs; the shortcut only moves focus so it lands in the input.
        ShortcutBinding::new("Meta+KeyV", "paste")
            .with_description("Paste")
            .with_label("Ctrl + V"),
        ShortcutBinding::new("Backspace", "focus_input"),
        ShortcutBinding::new("Enter", "focus_input"),
    ]
}
