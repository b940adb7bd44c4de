//! Shortcut configuration management.
//!
//! Covers:
//! - The `Config` struct and its serde defaults
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Merging newly added default shortcuts into an existing user config

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{LogLevel, PrimaryModifier, ShortcutBinding};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Shortcut dispatcher configuration, persisted as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Modifier that `Primary`/`CmdOrCtrl` in key strings resolves to
    #[serde(default = "defaults::primary_modifier")]
    pub primary_modifier: PrimaryModifier,

    /// Redirect focus to the input when a plain lowercase letter is typed
    #[serde(default = "defaults::auto_focus_letters")]
    pub auto_focus_letters: bool,

    /// Add built-in shortcuts missing from `shortcuts` on load
    #[serde(default = "defaults::merge_default_shortcuts")]
    pub merge_default_shortcuts: bool,

    /// Debug log file verbosity
    #[serde(default = "defaults::log_level")]
    pub log_level: LogLevel,

    /// Ordered shortcut list; order is firing order
    #[serde(default = "defaults::shortcuts")]
    pub shortcuts: Vec<ShortcutBinding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_modifier: defaults::primary_modifier(),
            auto_focus_letters: defaults::auto_focus_letters(),
            merge_default_shortcuts: defaults::merge_default_shortcuts(),
            log_level: defaults::log_level(),
            shortcuts: defaults::shortcuts(),
        }
    }
}

impl Config {
    /// Load configuration from the default path or create it.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, writing defaults there if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            let contents = fs::read_to_string(config_path).map_err(ConfigError::from)?;
            let mut config = Self::from_yaml(&contents)?;

            if config.merge_default_shortcuts {
                config.merge_default_shortcuts();
            }

            Ok(config)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, config_path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("term-shortcuts")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/term-shortcuts on all unix platforms, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("term-shortcuts")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Merge default shortcuts into the user's config.
    ///
    /// Only adds defaults whose key combination is not already bound, so a
    /// user rebinding `Ctrl+KeyL` to something else keeps their binding.
    pub fn merge_default_shortcuts(&mut self) {
        let existing_keys: HashSet<String> = self
            .shortcuts
            .iter()
            .map(|s| normalize_key(&s.key))
            .collect();

        let mut added_count = 0;
        for default_shortcut in defaults::shortcuts() {
            if !existing_keys.contains(&normalize_key(&default_shortcut.key)) {
                log::info!(
                    "Adding default shortcut: {} -> {}",
                    default_shortcut.key,
                    default_shortcut.action
                );
                self.shortcuts.push(default_shortcut);
                added_count += 1;
            }
        }

        if added_count > 0 {
            log::info!(
                "Merged {} default shortcut(s) into user config",
                added_count
            );
        }
    }

    /// Check every shortcut entry has a non-empty key and action.
    ///
    /// Loading never fails on these; the registry skips such entries with a
    /// warning. This is for tooling that wants to report them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, shortcut) in self.shortcuts.iter().enumerate() {
            if shortcut.key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "shortcuts[{i}].key is empty"
                )));
            }
            if shortcut.action.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "shortcuts[{i}].action is empty (key '{}')",
                    shortcut.key
                )));
            }
        }
        Ok(())
    }
}

/// Case- and whitespace-insensitive form of a key string for duplicate detection.
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.primary_modifier, PrimaryModifier::Platform);
        assert!(config.auto_focus_letters);
        assert!(config.merge_default_shortcuts);
        assert_eq!(config.shortcuts.len(), 4);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("auto_focus_letters: false\n").unwrap();
        assert!(!config.auto_focus_letters);
        assert_eq!(config.shortcuts, defaults::shortcuts());
    }

    #[test]
    fn test_merge_skips_rebound_keys() {
        let mut config = Config {
            shortcuts: vec![ShortcutBinding::new("ctrl + keyl", "focus_input")],
            ..Config::default()
        };
        config.merge_default_shortcuts();

        assert_eq!(config.shortcuts.len(), 4);
        assert_eq!(config.shortcuts[0].action, "focus_input");
        assert!(!config.shortcuts.iter().any(|s| s.action == "clear_screen"));
    }

    #[test]
    fn test_merge_appends_after_user_entries() {
        let mut config = Config {
            shortcuts: vec![ShortcutBinding::new("Ctrl+KeyK", "clear_screen")],
            ..Config::default()
        };
        config.merge_default_shortcuts();

        assert_eq!(config.shortcuts.len(), 5);
        assert_eq!(config.shortcuts[0].key, "Ctrl+KeyK");
        assert_eq!(config.shortcuts[1].key, "Ctrl+KeyL");
    }

    #[test]
    fn test_validate_rejects_empty_action() {
        let config = Config {
            shortcuts: vec![ShortcutBinding::new("Ctrl+KeyK", " ")],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("shortcuts[0].action"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("shortcuts: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
