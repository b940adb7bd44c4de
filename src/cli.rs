//! Command-line interface for term-shortcuts.
//!
//! Inspects the effective shortcut configuration: lists the table, shows what
//! a key combination would trigger, and validates the config file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use term_shortcuts_config::{Config, LogLevel, PrimaryModifier};
use term_shortcuts_keybindings::{
    BuiltinAction, KeyEvent, ModifierState, ShortcutRegistry, parse_key_combo,
};
use winit::keyboard::{Key, NativeKey, PhysicalKey};

/// term-shortcuts - keyboard shortcut dispatcher for terminal UIs
#[derive(Parser)]
#[command(name = "term-shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of ~/.config/term-shortcuts/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective shortcut table in firing order (default)
    List,
    /// Show which shortcuts a key combination would fire, e.g. "Ctrl+KeyL"
    Check {
        /// Key combination to test
        key: String,
    },
    /// Validate the config file and report skipped shortcuts
    Validate,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(s).ok_or_else(|| {
        let names: Vec<String> = LogLevel::all()
            .iter()
            .map(|level| level.display_name().to_lowercase())
            .collect();
        format!("unknown log level '{s}' (expected one of: {})", names.join(", "))
    })
}

impl Cli {
    /// Load the config from `--config` or the default location.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => Config::load().context("failed to load config"),
        }
    }
}

/// Run a parsed command, writing human-readable output to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let registry = ShortcutRegistry::from_config(config);
    match cli.command.as_ref().unwrap_or(&Commands::List) {
        Commands::List => list_shortcuts(config, &registry, out),
        Commands::Check { key } => check_key(&registry, config.primary_modifier, key, out),
        Commands::Validate => validate(config, &registry, out),
    }
}

fn list_shortcuts(config: &Config, registry: &ShortcutRegistry, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "primary modifier: {}", config.primary_modifier.display_name())?;
    writeln!(out, "log level: {}", config.log_level.display_name())?;
    writeln!(
        out,
        "auto-focus on plain letters: {}",
        if registry.auto_focus() { "on" } else { "off" }
    )?;
    for (i, shortcut) in registry.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<20} {}",
            i + 1,
            shortcut.label_or_default(),
            shortcut.description.as_deref().unwrap_or("")
        )?;
    }
    writeln!(out, "actions:")?;
    for action in BuiltinAction::all() {
        writeln!(out, "    {:<20} {}", action.name(), action.display_name())?;
    }
    Ok(())
}

fn check_key(
    registry: &ShortcutRegistry,
    primary: PrimaryModifier,
    key: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let combo = parse_key_combo(key).with_context(|| format!("invalid key combination '{key}'"))?;
    let (ctrl, meta, shift) = combo.resolve(primary);

    // Physical-key-only event: no logical character, so auto-focus never applies
    let event = KeyEvent::new(
        Key::Unidentified(NativeKey::Unidentified),
        PhysicalKey::Code(combo.key),
        ModifierState::new(ctrl, meta, shift),
    );

    let matches: Vec<_> = registry.matching(&event).collect();
    if matches.is_empty() {
        writeln!(out, "{combo}: no shortcut")?;
    } else {
        for shortcut in matches {
            writeln!(
                out,
                "{combo}: {}",
                shortcut
                    .description
                    .as_deref()
                    .unwrap_or(&shortcut.label_or_default())
            )?;
        }
    }
    Ok(())
}

fn validate(config: &Config, registry: &ShortcutRegistry, out: &mut dyn Write) -> Result<()> {
    config.validate()?;
    let skipped = config.shortcuts.len() - registry.len();
    if skipped > 0 {
        anyhow::bail!(
            "{skipped} of {} shortcut(s) are invalid and will be ignored (see the debug log)",
            config.shortcuts.len()
        );
    }
    writeln!(out, "ok: {} shortcut(s)", registry.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use term_shortcuts_config::ShortcutBinding;

    fn run_to_string(args: &[&str], config: &Config) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_list_defaults() {
        let out = run_to_string(&["term-shortcuts"], &Config::default()).unwrap();
        assert!(out.contains("primary modifier: Platform default"));
        assert!(out.contains("log level: Warn"));
        assert!(out.contains("auto-focus on plain letters: on"));
        assert!(out.contains("clear_screen"));
        assert!(out.contains("Focus input"));
        assert!(out.contains("Ctrl + L"));
        assert!(out.contains("Clear screen"));
        assert!(out.contains("Enter"));
    }

    #[test]
    fn test_check_matches() {
        let config = Config::default();
        let out = run_to_string(&["term-shortcuts", "check", "Ctrl+L"], &config).unwrap();
        assert_eq!(out.trim(), "Ctrl+KeyL: Clear screen");

        let out = run_to_string(&["term-shortcuts", "check", "Ctrl+KeyQ"], &config).unwrap();
        assert_eq!(out.trim(), "Ctrl+KeyQ: no shortcut");
    }

    #[test]
    fn test_validate_reports_skipped() {
        let config = Config {
            shortcuts: vec![ShortcutBinding::new("Hyper+KeyL", "clear_screen")],
            ..Config::default()
        };
        let err = run_to_string(&["term-shortcuts", "validate"], &config).unwrap_err();
        assert!(err.to_string().contains("1 of 1"));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["term-shortcuts", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        let err = Cli::try_parse_from(["term-shortcuts", "--log-level", "loud"])
            .err()
            .expect("unknown level rejected");
        assert!(err.to_string().contains("off, error, warn, info, debug, trace"));
    }
}
