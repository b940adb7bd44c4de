//! Key-down event model.
//!
//! A [`KeyEvent`] carries the logical key (what was typed), the physical key
//! (where on the keyboard it was pressed), the modifier state, and a
//! default-prevented flag that shortcut actions may set so the host skips its
//! own handling of the key press.

use winit::keyboard::{Key, KeyCode, NamedKey, NativeKeyCode, PhysicalKey, SmolStr};

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
}

impl ModifierState {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Build from explicit flags (ctrl, meta, shift); alt is left unset.
    pub const fn new(ctrl: bool, meta: bool, shift: bool) -> Self {
        Self {
            ctrl,
            alt: false,
            shift,
            meta,
        }
    }

    pub fn from_winit(modifiers: &winit::event::Modifiers) -> Self {
        let state = modifiers.state();
        Self {
            ctrl: state.control_key(),
            alt: state.alt_key(),
            shift: state.shift_key(),
            meta: state.super_key(),
        }
    }
}

/// A single key-down event as seen by the shortcut dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub logical_key: Key,
    pub physical_key: PhysicalKey,
    pub modifiers: ModifierState,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(logical_key: Key, physical_key: PhysicalKey, modifiers: ModifierState) -> Self {
        Self {
            logical_key,
            physical_key,
            modifiers,
            default_prevented: false,
        }
    }

    /// Event for a key that produces `text`, e.g. `KeyEvent::character("a", KeyCode::KeyA)`.
    pub fn character(text: &str, code: KeyCode) -> Self {
        Self::new(
            Key::Character(SmolStr::new(text)),
            PhysicalKey::Code(code),
            ModifierState::NONE,
        )
    }

    /// Event for a named (non-printing) key such as Enter or Backspace.
    pub fn named(named: NamedKey, code: KeyCode) -> Self {
        Self::new(Key::Named(named), PhysicalKey::Code(code), ModifierState::NONE)
    }

    /// Event whose physical key the platform could not identify.
    pub fn unidentified(logical_key: Key) -> Self {
        Self::new(
            logical_key,
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ModifierState::NONE,
        )
    }

    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convert a winit keyboard event plus the current modifier state.
    pub fn from_winit(
        event: &winit::event::KeyEvent,
        modifiers: &winit::event::Modifiers,
    ) -> Self {
        Self::new(
            event.logical_key.clone(),
            event.physical_key,
            ModifierState::from_winit(modifiers),
        )
    }

    /// Physical key code, if the platform identified one.
    pub fn key_code(&self) -> Option<KeyCode> {
        match self.physical_key {
            PhysicalKey::Code(code) => Some(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Ask the host to skip its own handling of this key press.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
