//! Shortcut actions and the terminal surface they drive.

use crate::event::KeyEvent;
use std::fmt;

/// The terminal UI surface a dispatcher controls.
///
/// Both operations are idempotent and cannot fail.
pub trait Terminal {
    /// Move input focus to the command-entry surface.
    fn focus_input(&mut self);
    /// Erase visible terminal output.
    fn clear(&mut self);
}

/// Behavior bound to a shortcut.
///
/// Implemented for plain closures, so ad-hoc shortcuts need no new type:
///
/// ```
/// use term_shortcuts_keybindings::{KeyEvent, ShortcutAction, Terminal};
///
/// let action = |_event: &mut KeyEvent, terminal: &mut dyn Terminal| terminal.clear();
/// fn assert_action<A: ShortcutAction>(_: &A) {}
/// assert_action(&action);
/// ```
pub trait ShortcutAction: Send + Sync {
    fn run(&self, event: &mut KeyEvent, terminal: &mut dyn Terminal);
}

impl<F> ShortcutAction for F
where
    F: Fn(&mut KeyEvent, &mut dyn Terminal) + Send + Sync,
{
    fn run(&self, event: &mut KeyEvent, terminal: &mut dyn Terminal) {
        self(event, terminal)
    }
}

/// Actions that can be named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinAction {
    /// Suppress the host default and clear the terminal
    ClearScreen,
    /// Focus the input
    FocusInput,
    /// Focus the input and let the host's native paste land there
    Paste,
}

impl BuiltinAction {
    /// Look up an action by its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "clear_screen" | "clear" => Some(BuiltinAction::ClearScreen),
            "focus_input" | "focus" => Some(BuiltinAction::FocusInput),
            "paste" => Some(BuiltinAction::Paste),
            _ => None,
        }
    }

    /// Config name
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinAction::ClearScreen => "clear_screen",
            BuiltinAction::FocusInput => "focus_input",
            BuiltinAction::Paste => "paste",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuiltinAction::ClearScreen => "Clear screen",
            BuiltinAction::FocusInput => "Focus input",
            BuiltinAction::Paste => "Paste",
        }
    }

    pub fn all() -> &'static [BuiltinAction] {
        &[
            BuiltinAction::ClearScreen,
            BuiltinAction::FocusInput,
            BuiltinAction::Paste,
        ]
    }
}

impl fmt::Display for BuiltinAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ShortcutAction for BuiltinAction {
    fn run(&self, event: &mut KeyEvent, terminal: &mut dyn Terminal) {
        match self {
            BuiltinAction::ClearScreen => {
                event.prevent_default();
                terminal.clear();
            }
            // Paste never touches the clipboard: the host's own paste
            // proceeds into the freshly focused input.
            BuiltinAction::FocusInput | BuiltinAction::Paste => terminal.focus_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[derive(Default)]
    struct Counts {
        focus: usize,
        clear: usize,
    }

    impl Terminal for Counts {
        fn focus_input(&mut self) {
            self.focus += 1;
        }
        fn clear(&mut self) {
            self.clear += 1;
        }
    }

    #[test]
    fn test_names_round_trip() {
        for action in BuiltinAction::all() {
            assert_eq!(BuiltinAction::from_name(action.name()), Some(*action));
        }
        assert_eq!(BuiltinAction::from_name("reboot"), None);
    }

    #[test]
    fn test_clear_screen_prevents_default() {
        let mut term = Counts::default();
        let mut event = KeyEvent::character("l", KeyCode::KeyL);
        BuiltinAction::ClearScreen.run(&mut event, &mut term);
        assert_eq!(term.clear, 1);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_paste_keeps_default() {
        let mut term = Counts::default();
        let mut event = KeyEvent::character("v", KeyCode::KeyV);
        BuiltinAction::Paste.run(&mut event, &mut term);
        assert_eq!(term.focus, 1);
        assert_eq!(term.clear, 0);
        assert!(!event.default_prevented());
    }
}
