//! Keyboard shortcut dispatch for terminal instances.
//!
//! The host feeds every key-down event to [`ShortcutDispatcher::handle_key_down`]
//! (or the winit adapter [`ShortcutDispatcher::handle_winit_key`]). Each
//! registered terminal gets the auto-focus rule and the shortcut registry
//! applied to it.
//!
//! Registration is keyed by terminal identity: registering the same terminal
//! again replaces its subscription instead of stacking a second one, while
//! distinct terminals each get their own.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use term_shortcuts_config::Config;
use term_shortcuts_keybindings::{DispatchResult, KeyEvent, ShortcutRegistry, Terminal};
use winit::event::ElementState;

/// Terminal handle shared between the host and the dispatcher.
pub type SharedTerminal = Arc<Mutex<dyn Terminal + Send>>;

/// Handle for one terminal's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Aggregate result of dispatching one key-down event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of terminals whose input was auto-focused
    pub auto_focused: usize,
    /// Number of shortcut actions that ran, across all terminals
    pub fired: usize,
    /// Whether any action asked the host to skip its default handling
    pub default_prevented: bool,
}

impl DispatchOutcome {
    /// True when the event had any effect.
    pub fn handled(&self) -> bool {
        self.auto_focused > 0 || self.fired > 0
    }
}

struct Subscription {
    id: SubscriptionId,
    terminal: SharedTerminal,
}

/// Routes key-down events to registered terminals.
pub struct ShortcutDispatcher {
    registry: Arc<ShortcutRegistry>,
    subscriptions: Mutex<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new(ShortcutRegistry::with_defaults())
    }
}

impl std::fmt::Debug for ShortcutDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutDispatcher")
            .field("shortcuts", &self.registry.len())
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

impl ShortcutDispatcher {
    pub fn new(registry: ShortcutRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            subscriptions: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ShortcutRegistry::from_config(config))
    }

    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    /// Subscribe `terminal` to key-down dispatch.
    ///
    /// If this terminal is already subscribed its subscription is replaced in
    /// place, so each event still reaches it exactly once.
    pub fn register_shortcuts<T>(&self, terminal: &Arc<Mutex<T>>) -> SubscriptionId
    where
        T: Terminal + Send + 'static,
    {
        let shared: SharedTerminal = terminal.clone();
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let mut subscriptions = self.subscriptions.lock();
        if let Some(existing) = subscriptions
            .iter_mut()
            .find(|s| same_terminal(&s.terminal, &shared))
        {
            log::debug!(
                "Replacing shortcut subscription {:?} with {:?}",
                existing.id,
                id
            );
            existing.id = id;
            existing.terminal = shared;
        } else {
            log::debug!("Registered shortcut subscription {:?}", id);
            subscriptions.push(Subscription {
                id,
                terminal: shared,
            });
        }
        id
    }

    /// Remove a subscription. Returns false if it was already gone or replaced.
    pub fn unregister(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.lock();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            log::debug!("Unregistered shortcut subscription {:?}", id);
        }
        removed
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().len()
    }

    /// Dispatch one key-down event to every subscribed terminal, in
    /// subscription order. All terminals share the same event, so a
    /// `prevent_default` from any action is reported back to the host.
    pub fn handle_key_down(&self, mut event: KeyEvent) -> DispatchOutcome {
        // Snapshot so actions can (un)register without deadlocking on the list
        let terminals: Vec<SharedTerminal> = self
            .subscriptions
            .lock()
            .iter()
            .map(|s| Arc::clone(&s.terminal))
            .collect();

        log::trace!(
            "Key down: {:?} {:?} {:?} -> {} terminal(s)",
            event.logical_key,
            event.physical_key,
            event.modifiers,
            terminals.len()
        );

        let mut outcome = DispatchOutcome::default();
        for terminal in terminals {
            let mut terminal = terminal.lock();
            match self.registry.dispatch(&mut event, &mut *terminal) {
                DispatchResult::Unhandled => {}
                DispatchResult::AutoFocused => outcome.auto_focused += 1,
                DispatchResult::Fired(n) => outcome.fired += n,
            }
        }
        outcome.default_prevented = event.default_prevented();
        outcome
    }

    /// Dispatch a key event with its press state. Releases are ignored and
    /// return `None`.
    pub fn handle_key(&self, state: ElementState, event: KeyEvent) -> Option<DispatchOutcome> {
        match state {
            ElementState::Pressed => Some(self.handle_key_down(event)),
            ElementState::Released => None,
        }
    }

    /// Adapter for winit keyboard input. Key releases are ignored and return `None`.
    pub fn handle_winit_key(
        &self,
        event: &winit::event::KeyEvent,
        modifiers: &winit::event::Modifiers,
    ) -> Option<DispatchOutcome> {
        self.handle_key(event.state, KeyEvent::from_winit(event, modifiers))
    }
}

/// Identity comparison on the terminal allocation, ignoring vtable pointers.
fn same_terminal(a: &SharedTerminal, b: &SharedTerminal) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
