//! Integration tests for term-shortcuts-keybindings.
//!
//! These tests exercise the full parse → registry → dispatch pipeline
//! against a recording terminal.

use parking_lot::Mutex;
use std::sync::Arc;
use term_shortcuts_config::{Config, PrimaryModifier, ShortcutBinding};
use term_shortcuts_keybindings::{
    BuiltinAction, DispatchResult, KeyEvent, ModifierState, ShortcutDefinition, ShortcutRegistry,
    Terminal, parse_key_combo,
};
use winit::keyboard::{Key, KeyCode, NamedKey, SmolStr};

#[derive(Debug, Default)]
struct RecordingTerminal {
    focus_calls: usize,
    clear_calls: usize,
}

impl Terminal for RecordingTerminal {
    fn focus_input(&mut self) {
        self.focus_calls += 1;
    }

    fn clear(&mut self) {
        self.clear_calls += 1;
    }
}

fn dispatch(
    registry: &ShortcutRegistry,
    mut event: KeyEvent,
) -> (RecordingTerminal, KeyEvent, DispatchResult) {
    let mut terminal = RecordingTerminal::default();
    let result = registry.dispatch(&mut event, &mut terminal);
    (terminal, event, result)
}

// ---------------------------------------------------------------------------
// Default shortcut set
// ---------------------------------------------------------------------------

#[test]
fn plain_letter_auto_focuses_regardless_of_code() {
    let registry = ShortcutRegistry::with_defaults();
    // Physical Enter position but typed 'q': auto-focus wins, Enter shortcut never runs
    let (terminal, event, result) = dispatch(&registry, KeyEvent::character("q", KeyCode::Enter));

    assert_eq!(result, DispatchResult::AutoFocused);
    assert_eq!(terminal.focus_calls, 1);
    assert_eq!(terminal.clear_calls, 0);
    assert!(!event.default_prevented());
}

#[test]
fn ctrl_l_clears_and_prevents_default() {
    let registry = ShortcutRegistry::with_defaults();
    let event = KeyEvent::character("l", KeyCode::KeyL).with_modifiers(ModifierState::CTRL);
    let (terminal, event, result) = dispatch(&registry, event);

    assert_eq!(result, DispatchResult::Fired(1));
    assert_eq!(terminal.clear_calls, 1);
    assert_eq!(terminal.focus_calls, 0);
    assert!(event.default_prevented());
}

#[test]
fn meta_v_focuses_without_preventing_default() {
    let registry = ShortcutRegistry::with_defaults();
    let event = KeyEvent::character("v", KeyCode::KeyV).with_modifiers(ModifierState::META);
    let (terminal, event, result) = dispatch(&registry, event);

    assert_eq!(result, DispatchResult::Fired(1));
    assert_eq!(terminal.focus_calls, 1);
    assert!(!event.default_prevented());
}

#[test]
fn backspace_and_enter_focus_input() {
    let registry = ShortcutRegistry::with_defaults();
    for (named, code) in [
        (NamedKey::Backspace, KeyCode::Backspace),
        (NamedKey::Enter, KeyCode::Enter),
    ] {
        let (terminal, _, result) = dispatch(&registry, KeyEvent::named(named, code));
        assert_eq!(result, DispatchResult::Fired(1));
        assert_eq!(terminal.focus_calls, 1);
    }
}

#[test]
fn unmatched_combo_has_no_effect() {
    let registry = ShortcutRegistry::with_defaults();
    let event = KeyEvent::character("X", KeyCode::KeyX)
        .with_modifiers(ModifierState::new(true, true, true));
    let (terminal, event, result) = dispatch(&registry, event);

    assert_eq!(result, DispatchResult::Unhandled);
    assert_eq!(terminal.focus_calls, 0);
    assert_eq!(terminal.clear_calls, 0);
    assert!(!event.default_prevented());
}

#[test]
fn ctrl_v_is_not_paste() {
    // The default paste shortcut requires Meta exactly
    let registry = ShortcutRegistry::with_defaults();
    let event = KeyEvent::character("v", KeyCode::KeyV).with_modifiers(ModifierState::CTRL);
    let (terminal, _, result) = dispatch(&registry, event);
    assert_eq!(result, DispatchResult::Unhandled);
    assert_eq!(terminal.focus_calls, 0);
}

#[test]
fn shift_enter_does_not_match_plain_enter() {
    let registry = ShortcutRegistry::with_defaults();
    let event =
        KeyEvent::named(NamedKey::Enter, KeyCode::Enter).with_modifiers(ModifierState::SHIFT);
    let (_, _, result) = dispatch(&registry, event);
    assert_eq!(result, DispatchResult::Unhandled);
}

#[test]
fn unidentified_physical_key_matches_nothing() {
    let registry = ShortcutRegistry::with_defaults();
    let event = KeyEvent::unidentified(Key::Named(NamedKey::Enter));
    let (terminal, _, result) = dispatch(&registry, event);
    assert_eq!(result, DispatchResult::Unhandled);
    assert_eq!(terminal.focus_calls, 0);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn overlapping_entries_fire_in_registration_order() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let mut registry = ShortcutRegistry::new();
    let first = Arc::clone(&log);
    registry.push(
        ShortcutDefinition::new(
            KeyCode::KeyK,
            move |_: &mut KeyEvent, _: &mut dyn Terminal| first.lock().push("first"),
        )
        .ctrl(),
    );
    let second = Arc::clone(&log);
    registry.push(
        ShortcutDefinition::new(
            KeyCode::KeyK,
            move |_: &mut KeyEvent, _: &mut dyn Terminal| second.lock().push("second"),
        )
        .ctrl(),
    );

    let event = KeyEvent::character("k", KeyCode::KeyK).with_modifiers(ModifierState::CTRL);
    let (_, _, result) = dispatch(&registry, event);

    assert_eq!(result, DispatchResult::Fired(2));
    assert_eq!(*log.lock(), vec!["first", "second"]);
}

#[test]
fn matching_reports_entries_in_order() {
    let bindings = vec![
        ShortcutBinding::new("Ctrl+KeyK", "clear_screen").with_label("one"),
        ShortcutBinding::new("Ctrl+KeyJ", "focus_input").with_label("other"),
        ShortcutBinding::new("Ctrl+K", "focus_input").with_label("two"),
    ];
    let registry = ShortcutRegistry::from_bindings(&bindings, PrimaryModifier::Ctrl);
    let event = KeyEvent::character("k", KeyCode::KeyK).with_modifiers(ModifierState::CTRL);

    let labels: Vec<String> = registry.matching(&event).map(|s| s.label_or_default()).collect();
    assert_eq!(labels, vec!["one", "two"]);
}

// ---------------------------------------------------------------------------
// Config-driven registries
// ---------------------------------------------------------------------------

#[test]
fn auto_focus_can_be_disabled() {
    let config = Config {
        auto_focus_letters: false,
        shortcuts: vec![ShortcutBinding::new("KeyA", "clear_screen")],
        ..Config::default()
    };
    let registry = ShortcutRegistry::from_config(&config);

    let (terminal, _, result) = dispatch(&registry, KeyEvent::character("a", KeyCode::KeyA));
    assert_eq!(result, DispatchResult::Fired(1));
    assert_eq!(terminal.clear_calls, 1);
    assert_eq!(terminal.focus_calls, 0);
}

#[test]
fn primary_modifier_resolves_per_config() {
    let bindings = vec![ShortcutBinding::new("Primary+KeyK", "clear_screen")];

    let ctrl_registry = ShortcutRegistry::from_bindings(&bindings, PrimaryModifier::Ctrl);
    let meta_registry = ShortcutRegistry::from_bindings(&bindings, PrimaryModifier::Meta);

    let ctrl_k = KeyEvent::character("k", KeyCode::KeyK).with_modifiers(ModifierState::CTRL);
    let meta_k = KeyEvent::character("k", KeyCode::KeyK).with_modifiers(ModifierState::META);

    assert_eq!(dispatch(&ctrl_registry, ctrl_k.clone()).2, DispatchResult::Fired(1));
    assert_eq!(dispatch(&ctrl_registry, meta_k.clone()).2, DispatchResult::Unhandled);
    assert_eq!(dispatch(&meta_registry, meta_k).2, DispatchResult::Fired(1));
    assert_eq!(dispatch(&meta_registry, ctrl_k).2, DispatchResult::Unhandled);
}

#[test]
fn registry_skips_malformed_bindings() {
    let bindings = vec![
        ShortcutBinding::new("", "focus_input"),
        ShortcutBinding::new("Ctrl+Shift", "clear_screen"),
        ShortcutBinding::new("Alt+KeyA", "clear_screen"),
        ShortcutBinding::new("F5", "launch_rockets"),
        ShortcutBinding::new("F5", "focus_input"),
    ];
    let registry = ShortcutRegistry::from_bindings(&bindings, PrimaryModifier::Platform);
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_keeps_descriptions_and_labels() {
    let registry = ShortcutRegistry::with_defaults();
    let first = registry.iter().next().unwrap();
    assert_eq!(first.physical_key, KeyCode::KeyL);
    assert!(first.requires_ctrl);
    assert!(!first.requires_meta);
    assert!(!first.requires_shift);
    assert_eq!(first.description.as_deref(), Some("Clear screen"));
    assert_eq!(first.display_label.as_deref(), Some("Ctrl + L"));

    let backspace = registry.iter().nth(2).unwrap();
    assert_eq!(backspace.label_or_default(), "Backspace");
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

#[test]
fn parse_default_keys() {
    let combo = parse_key_combo("Meta+KeyV").unwrap();
    assert!(combo.modifiers.meta);
    assert_eq!(combo.key, KeyCode::KeyV);
    assert_eq!(combo.to_string(), "Meta+KeyV");

    assert_eq!(parse_key_combo("Backspace").unwrap().key, KeyCode::Backspace);
}

#[test]
fn parse_rejects_two_keys() {
    assert!(parse_key_combo("KeyA+KeyB").is_err());
}

#[test]
fn builtin_actions_cover_config_names() {
    for binding in term_shortcuts_config::defaults::shortcuts() {
        assert!(BuiltinAction::from_name(&binding.action).is_some(), "{}", binding.action);
    }
}

#[test]
fn closure_can_suppress_default() {
    let mut registry = ShortcutRegistry::new();
    registry.push(
        ShortcutDefinition::new(KeyCode::Tab, |event: &mut KeyEvent, terminal: &mut dyn Terminal| {
            event.prevent_default();
            terminal.focus_input();
        })
        .describe("Keep focus in the terminal"),
    );

    let event = KeyEvent::new(
        Key::Named(NamedKey::Tab),
        winit::keyboard::PhysicalKey::Code(KeyCode::Tab),
        ModifierState::NONE,
    );
    let (terminal, event, _) = dispatch(&registry, event);
    assert!(event.default_prevented());
    assert_eq!(terminal.focus_calls, 1);

    let letter = KeyEvent::new(
        Key::Character(SmolStr::new("z")),
        winit::keyboard::PhysicalKey::Code(KeyCode::Tab),
        ModifierState::NONE,
    );
    let (_, letter, result) = dispatch(&registry, letter);
    assert_eq!(result, DispatchResult::AutoFocused);
    assert!(!letter.default_prevented());
}
