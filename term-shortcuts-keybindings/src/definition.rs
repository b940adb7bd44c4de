//! Shortcut definitions: one key combination bound to one action.

use crate::action::ShortcutAction;
use std::fmt;
use std::sync::Arc;
use winit::keyboard::KeyCode;

/// Immutable record describing one shortcut.
///
/// Modifier requirements are compared for exact equality: a definition with
/// `requires_ctrl == false` does not match an event with Ctrl held.
#[derive(Clone)]
pub struct ShortcutDefinition {
    pub physical_key: KeyCode,
    pub requires_ctrl: bool,
    pub requires_meta: bool,
    pub requires_shift: bool,
    pub description: Option<String>,
    pub display_label: Option<String>,
    action: Arc<dyn ShortcutAction>,
}

impl ShortcutDefinition {
    /// A shortcut on `physical_key` with no modifiers.
    pub fn new(physical_key: KeyCode, action: impl ShortcutAction + 'static) -> Self {
        Self::with_shared_action(physical_key, Arc::new(action))
    }

    pub fn with_shared_action(physical_key: KeyCode, action: Arc<dyn ShortcutAction>) -> Self {
        Self {
            physical_key,
            requires_ctrl: false,
            requires_meta: false,
            requires_shift: false,
            description: None,
            display_label: None,
            action,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.requires_ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.requires_meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.requires_shift = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }

    pub fn action(&self) -> &dyn ShortcutAction {
        self.action.as_ref()
    }

    /// Label for display, falling back to a generated `Ctrl+Shift+KeyL` form.
    pub fn label_or_default(&self) -> String {
        if let Some(label) = &self.display_label {
            return label.clone();
        }
        let mut parts = Vec::new();
        if self.requires_ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.requires_meta {
            parts.push("Meta".to_string());
        }
        if self.requires_shift {
            parts.push("Shift".to_string());
        }
        parts.push(format!("{:?}", self.physical_key));
        parts.join("+")
    }
}

impl fmt::Debug for ShortcutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutDefinition")
            .field("physical_key", &self.physical_key)
            .field("requires_ctrl", &self.requires_ctrl)
            .field("requires_meta", &self.requires_meta)
            .field("requires_shift", &self.requires_shift)
            .field("description", &self.description)
            .field("display_label", &self.display_label)
            .finish_non_exhaustive()
    }
}
