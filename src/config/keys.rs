//! Key bindings
//!
//! `default_keys` reproduces the stock binding set. Group switch/move pairs
//! are not part of it; they are generated from the group list by
//! `groups::group_bindings` and appended by `Config::resolved_keys`.

use serde::{Deserialize, Serialize};

use crate::config::action::{Action, LayoutCommand, SpawnCommand, WindowCommand};
use crate::config::chord::{KeyChord, ModSet};
use crate::constants::commands;

/// A key chord bound to a deferred action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub chord: KeyChord,
    pub action: Action,
    /// Human-readable description shown in binding listings
    #[serde(default)]
    pub desc: String,
}

impl KeyBinding {
    pub fn new(chord: KeyChord, action: Action, desc: impl Into<String>) -> Self {
        Self {
            chord,
            action,
            desc: desc.into(),
        }
    }
}

/// The stock binding list, in display order
pub fn default_keys(terminal: &str) -> Vec<KeyBinding> {
    use LayoutCommand as L;
    use WindowCommand as W;

    let key = |mods, sym: &str, action, desc: &str| {
        KeyBinding::new(KeyChord::new(mods, sym), action, desc)
    };
    let spawn = |argv: &[&str]| Action::Spawn(SpawnCommand::exec(argv));

    vec![
        // A bare Super tap retriggers the keyboard layout toggle setup
        key(
            ModSet::NONE,
            "Super_L",
            spawn(commands::KEYBOARD_LAYOUT),
            "Set keyboard layout",
        ),
        // Focus movement
        key(ModSet::SUPER, "h", Action::Layout(L::FocusLeft), "Move focus left"),
        key(ModSet::SUPER, "l", Action::Layout(L::FocusRight), "Move focus right"),
        key(ModSet::SUPER, "j", Action::Layout(L::FocusDown), "Move focus down"),
        key(ModSet::SUPER, "k", Action::Layout(L::FocusUp), "Move focus up"),
        key(ModSet::SUPER, "space", Action::Layout(L::FocusNext), "Focus next window"),
        // Window movement
        key(ModSet::SUPER_SHIFT, "h", Action::Layout(L::ShuffleLeft), "Move window left"),
        key(ModSet::SUPER_SHIFT, "l", Action::Layout(L::ShuffleRight), "Move window right"),
        key(ModSet::SUPER_SHIFT, "j", Action::Layout(L::ShuffleDown), "Move window down"),
        key(ModSet::SUPER_SHIFT, "k", Action::Layout(L::ShuffleUp), "Move window up"),
        // Window resizing
        key(ModSet::SUPER_CTRL, "h", Action::Layout(L::GrowLeft), "Grow left"),
        key(ModSet::SUPER_CTRL, "l", Action::Layout(L::GrowRight), "Grow right"),
        key(ModSet::SUPER_CTRL, "j", Action::Layout(L::GrowDown), "Grow down"),
        key(ModSet::SUPER_CTRL, "k", Action::Layout(L::GrowUp), "Grow up"),
        key(ModSet::SUPER, "n", Action::Layout(L::Normalize), "Reset sizes"),
        key(
            ModSet::SUPER_SHIFT,
            "Return",
            Action::Layout(L::ToggleSplit),
            "Toggle split",
        ),
        key(
            ModSet::SUPER,
            "Return",
            Action::Spawn(SpawnCommand::exec(&[terminal])),
            "Launch terminal",
        ),
        key(ModSet::SUPER, "Tab", Action::NextLayout, "Next layout"),
        key(ModSet::SUPER, "w", Action::Window(W::Kill), "Kill window"),
        key(
            ModSet::SUPER,
            "f",
            Action::Window(W::ToggleFullscreen),
            "Toggle fullscreen",
        ),
        key(
            ModSet::SUPER,
            "t",
            Action::Window(W::ToggleFloating),
            "Toggle floating",
        ),
        key(ModSet::SUPER_CTRL, "r", Action::ReloadConfig, "Reload config"),
        key(ModSet::SUPER_CTRL, "q", Action::Shutdown, "Shutdown"),
        key(ModSet::SUPER, "r", spawn(commands::LAUNCHER), "Application launcher"),
        // Screenshots
        key(
            ModSet::SUPER,
            "p",
            spawn(commands::SCREENSHOT_REGION),
            "Screenshot region",
        ),
        key(
            ModSet::ALT,
            "r",
            Action::Spawn(SpawnCommand::shell(commands::SCREENSHOT_IMAGEMAGICK)),
            "Screenshot region to clipboard",
        ),
    ]
}
