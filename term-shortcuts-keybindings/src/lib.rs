//! Keybinding system for term-shortcuts.
//!
//! This crate turns key-down events into either an input auto-focus or a set
//! of shortcut actions run against a [`Terminal`].
//!
//! Features:
//! - Physical-key shortcuts with exact Ctrl/Meta/Shift matching
//! - Configurable primary modifier (`Primary+KeyK` is Cmd on macOS, Ctrl elsewhere)
//! - Ordered registry: every matching shortcut fires, in registration order

mod action;
mod definition;
mod event;
mod matcher;
pub mod parser;
pub mod platform;

pub use action::{BuiltinAction, ShortcutAction, Terminal};
pub use definition::ShortcutDefinition;
pub use event::{KeyEvent, ModifierState};
pub use matcher::KeybindingMatcher;
pub use parser::{KeyCombo, ParseError, parse_key_combo};

use term_shortcuts_config::{Config, PrimaryModifier, ShortcutBinding};

/// What the registry did with one key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchResult {
    /// Neither rule applied
    #[default]
    Unhandled,
    /// The auto-focus rule fired; shortcuts were not consulted
    AutoFocused,
    /// This many shortcuts fired (always at least one)
    Fired(usize),
}

/// Ordered list of shortcuts.
///
/// Built once at startup and read-only afterwards. When several entries match
/// one event they all fire, in the order they were added.
#[derive(Debug)]
pub struct ShortcutRegistry {
    shortcuts: Vec<ShortcutDefinition>,
    auto_focus: bool,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRegistry {
    /// Create a new empty registry with auto-focus enabled.
    pub fn new() -> Self {
        Self {
            shortcuts: Vec::new(),
            auto_focus: true,
        }
    }

    /// Registry holding the built-in shortcut set.
    pub fn with_defaults() -> Self {
        Self::from_bindings(
            &term_shortcuts_config::defaults::shortcuts(),
            PrimaryModifier::default(),
        )
    }

    /// Build a registry from a loaded config.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::from_bindings(&config.shortcuts, config.primary_modifier);
        registry.set_auto_focus(config.auto_focus_letters);
        registry
    }

    /// Build a registry from config bindings.
    ///
    /// Bindings with an unparseable key or an unknown action are logged and skipped.
    pub fn from_bindings(bindings: &[ShortcutBinding], primary: PrimaryModifier) -> Self {
        let mut registry = Self::new();

        log::info!(
            "Building shortcut registry from {} config bindings",
            bindings.len()
        );
        for binding in bindings {
            let combo = match parser::parse_key_combo(&binding.key) {
                Ok(combo) => combo,
                Err(e) => {
                    log::warn!(
                        "Invalid shortcut key '{}' for action '{}': {}",
                        binding.key,
                        binding.action,
                        e
                    );
                    continue;
                }
            };
            let Some(action) = BuiltinAction::from_name(&binding.action) else {
                log::warn!(
                    "Unknown shortcut action '{}' for key '{}'",
                    binding.action,
                    binding.key
                );
                continue;
            };

            let (ctrl, meta, shift) = combo.resolve(primary);
            let mut shortcut = ShortcutDefinition::new(combo.key, action);
            shortcut.requires_ctrl = ctrl;
            shortcut.requires_meta = meta;
            shortcut.requires_shift = shift;
            shortcut.description = binding.description.clone();
            shortcut.display_label = binding.label.clone();

            log::info!(
                "Registered shortcut: {} -> {} (parsed as: {})",
                binding.key,
                action,
                combo
            );
            registry.push(shortcut);
        }

        log::info!(
            "Shortcut registry initialized with {} shortcuts",
            registry.len()
        );
        registry
    }

    /// Append a shortcut. It fires after every shortcut already registered.
    pub fn push(&mut self, shortcut: ShortcutDefinition) {
        self.shortcuts.push(shortcut);
    }

    pub fn set_auto_focus(&mut self, enabled: bool) {
        self.auto_focus = enabled;
    }

    pub fn auto_focus(&self) -> bool {
        self.auto_focus
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortcutDefinition> {
        self.shortcuts.iter()
    }

    /// Shortcuts that match `event`, in firing order.
    pub fn matching<'a>(
        &'a self,
        event: &KeyEvent,
    ) -> impl Iterator<Item = &'a ShortcutDefinition> + use<'a> {
        let matcher = KeybindingMatcher::from_event(event);
        self.shortcuts.iter().filter(move |s| matcher.matches(s))
    }

    /// Run the auto-focus rule, then every matching shortcut, against `terminal`.
    pub fn dispatch(&self, event: &mut KeyEvent, terminal: &mut dyn Terminal) -> DispatchResult {
        let matcher = KeybindingMatcher::from_event(event);

        if self.auto_focus && matcher.is_auto_focus() {
            log::trace!("Auto-focus on {:?}", event.logical_key);
            terminal.focus_input();
            return DispatchResult::AutoFocused;
        }

        let mut fired = 0;
        for shortcut in &self.shortcuts {
            if matcher.matches(shortcut) {
                log::debug!("Shortcut fired: {}", shortcut.label_or_default());
                shortcut.action().run(event, terminal);
                fired += 1;
            }
        }

        if fired == 0 {
            DispatchResult::Unhandled
        } else {
            DispatchResult::Fired(fired)
        }
    }

    /// Check if the registry has any shortcuts.
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Get the number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }
}
