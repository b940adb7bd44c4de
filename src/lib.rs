// Library exports for the shortcut dispatcher and its CLI.
//
// Mutex policy: `parking_lot::Mutex` for all sync state (subscription list,
// terminal handles, log file). Nothing here is async.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod dispatcher;

pub use dispatcher::{DispatchOutcome, SharedTerminal, ShortcutDispatcher, SubscriptionId};
pub use term_shortcuts_config::Config;
pub use term_shortcuts_keybindings::{
    BuiltinAction, KeyEvent, ModifierState, ShortcutAction, ShortcutDefinition, ShortcutRegistry,
    Terminal,
};
