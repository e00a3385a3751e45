//! The top-level configuration descriptor
//!
//! One `Config` value is everything the host consumes: bindings, groups,
//! layouts, screens, mouse bindings and options. The built-in default is a
//! complete working setup; a user file under the XDG config directory
//! overrides any subset of it field by field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::bar::WidgetDefaults;
use crate::config::groups::{self, Group};
use crate::config::keys::{self, KeyBinding};
use crate::config::layout::{FloatingConfig, Layout};
use crate::config::mouse::{self, MouseBinding};
use crate::config::options::Options;
use crate::config::screen::Screen;
use crate::constants;

/// The configuration descriptor handed to the host at startup and reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit key bindings; group switch/move pairs are generated on top
    pub keys: Vec<KeyBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating: FloatingConfig,
    pub widget_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub options: Options,
}

impl Default for Config {
    fn default() -> Self {
        let options = Options::default();
        Self {
            keys: keys::default_keys(&options.terminal),
            groups: groups::default_groups(),
            layouts: crate::config::layout::default_layouts(),
            floating: FloatingConfig::default(),
            widget_defaults: WidgetDefaults::default(),
            screens: vec![Screen::with_default_bar()],
            mouse: mouse::default_mouse(),
            options,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        #[cfg(not(test))]
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        #[cfg(test)]
        let mut path = std::env::temp_dir().join("gridwm-config-test");

        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load the descriptor from the default location, or create it on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::path();

        if !config_path.exists() {
            info!(
                "Config file not found, creating default config at {:?}",
                config_path
            );
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load the descriptor from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {path:?}"))?;

        info!(
            keys = config.resolved_keys().len(),
            groups = config.groups.len(),
            layouts = config.layouts.len(),
            "Loaded config from {:?}",
            path
        );
        Ok(config)
    }

    /// Save the descriptor to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {parent:?}"))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config to {config_path:?}"))?;

        info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// The complete binding list the host grabs: explicit keys followed by
    /// the generated group pairs, in list order.
    pub fn resolved_keys(&self) -> Vec<KeyBinding> {
        let mut resolved = self.keys.clone();
        resolved.extend(groups::group_bindings(&self.groups));
        resolved
    }

    /// All configuration problems, empty when the descriptor is sound.
    /// Collects everything instead of stopping at the first so a user can
    /// fix their file in one pass.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        // Duplicate chords shadow each other silently in the host
        let resolved = self.resolved_keys();
        let mut seen = HashSet::new();
        for binding in &resolved {
            if !seen.insert(&binding.chord) {
                problems.push(format!(
                    "duplicate binding for {}",
                    binding.chord.display_name()
                ));
            }
            if !binding.chord.sym.is_known() {
                problems.push(format!("unknown keysym {:?}", binding.chord.sym.name()));
            }
        }

        let group_names: HashSet<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();
        if self.groups.is_empty() {
            problems.push("no groups defined".to_string());
        }
        if group_names.len() != self.groups.len() {
            problems.push("group names are not unique".to_string());
        }
        if self.groups.iter().any(|g| g.name.is_empty()) {
            problems.push("group with empty name".to_string());
        }

        // Bindings onto groups that do not exist would never fire
        for binding in &resolved {
            if let Some(group) = binding.action.group_ref()
                && !group_names.contains(group)
            {
                problems.push(format!(
                    "binding {} references undefined group {group:?}",
                    binding.chord.display_name()
                ));
            }
        }

        if self.layouts.is_empty() {
            problems.push("no layouts defined".to_string());
        }
        if self.screens.is_empty() {
            problems.push("no screens defined".to_string());
        }
        for (i, screen) in self.screens.iter().enumerate() {
            if let Some(bar) = &screen.bar {
                for problem in bar.problems() {
                    problems.push(format!("screen {i}: {problem}"));
                }
            }
        }

        for rule in &self.floating.rules {
            if rule.is_empty() {
                problems.push("floating rule with no match fields".to_string());
            }
        }

        problems
    }

    /// Validate the descriptor, reporting every problem at once
    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("invalid config:\n  {}", problems.join("\n  "))
        }
    }
}
