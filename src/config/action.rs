//! Deferred action descriptors
//!
//! Bindings carry an `Action` value, not code. Nothing here executes at
//! config load; the host dispatches on the variant when the bound key, button
//! or widget event actually fires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Commands interpreted by the active layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCommand {
    FocusLeft,
    FocusRight,
    FocusDown,
    FocusUp,
    /// Focus the next window in the stacking order
    FocusNext,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    /// Reset all window sizes to their defaults
    Normalize,
    /// Toggle between split and stacked panes
    ToggleSplit,
}

/// Commands interpreted against the focused window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowCommand {
    Kill,
    ToggleFullscreen,
    ToggleFloating,
    BringToFront,
    /// Begin a floating move; the host reads the drag origin from the binding
    SetPositionFloating,
    /// Begin a floating resize; the host reads the drag origin from the binding
    SetSizeFloating,
}

/// An external program launch, either as an argv list or a shell string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnCommand {
    /// Executed directly, no shell involved
    Exec(Vec<String>),
    /// Executed via `sh -c`, for pipelines and `&&` sequences
    Shell(String),
}

impl SpawnCommand {
    pub fn exec(argv: &[&str]) -> Self {
        Self::Exec(argv.iter().map(|s| s.to_string()).collect())
    }

    pub fn shell(command: &str) -> Self {
        Self::Shell(command.to_string())
    }

    /// The program name, for logs and summaries
    pub fn program(&self) -> &str {
        match self {
            Self::Exec(argv) => argv.first().map(String::as_str).unwrap_or(""),
            Self::Shell(_) => "sh",
        }
    }
}

impl fmt::Display for SpawnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exec(argv) => f.write_str(&argv.join(" ")),
            Self::Shell(command) => write!(f, "sh -c {command:?}"),
        }
    }
}

/// A deferred reference to a host operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Forward to the active layout
    Layout(LayoutCommand),
    /// Forward to the focused window
    Window(WindowCommand),
    /// Make the named group visible on the current screen
    SwitchToGroup(String),
    /// Send the focused window to the named group
    MoveToGroup {
        group: String,
        /// Also switch the screen to that group
        follow: bool,
    },
    /// Cycle to the next entry in `layouts`, in list order
    NextLayout,
    /// Re-evaluate the configuration descriptor
    ReloadConfig,
    /// Shut the window manager down
    Shutdown,
    /// Launch an external program
    Spawn(SpawnCommand),
}

impl Action {
    /// Group name referenced by this action, if any.
    /// Used by validation to reject bindings onto undefined groups.
    pub fn group_ref(&self) -> Option<&str> {
        match self {
            Self::SwitchToGroup(group) | Self::MoveToGroup { group, .. } => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_display() {
        let exec = SpawnCommand::exec(&["rofi", "-show", "drun"]);
        assert_eq!(exec.to_string(), "rofi -show drun");
        assert_eq!(exec.program(), "rofi");

        let shell = SpawnCommand::shell("sleep 2 && xrandr");
        assert_eq!(shell.to_string(), "sh -c \"sleep 2 && xrandr\"");
        assert_eq!(shell.program(), "sh");
    }

    #[test]
    fn test_group_ref() {
        assert_eq!(
            Action::SwitchToGroup("3".to_string()).group_ref(),
            Some("3")
        );
        assert_eq!(
            Action::MoveToGroup {
                group: "5".to_string(),
                follow: true,
            }
            .group_ref(),
            Some("5")
        );
        assert_eq!(Action::NextLayout.group_ref(), None);
        assert_eq!(Action::Layout(LayoutCommand::FocusLeft).group_ref(), None);
    }

    #[test]
    fn test_action_serde_form() {
        let action = Action::Layout(LayoutCommand::GrowLeft);
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"layout":"grow_left"}"#
        );

        let action = Action::Spawn(SpawnCommand::exec(&["pavucontrol"]));
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"spawn":{"exec":["pavucontrol"]}}"#);
        assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), action);

        let action: Action = serde_json::from_str(r#""next_layout""#).unwrap();
        assert_eq!(action, Action::NextLayout);
    }
}
