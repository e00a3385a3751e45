//! Scalar behavior options consumed directly by the host

use serde::{Deserialize, Serialize};

use crate::constants::{commands, defaults};

/// What the host does when a window requests activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusOnActivation {
    /// Focus only when the request comes from the focused screen
    #[default]
    Smart,
    /// Always focus the requesting window
    Focus,
    /// Ignore activation requests
    Never,
}

/// The host's option flags and scalars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Focus follows the pointer between windows
    pub follow_mouse_focus: bool,
    /// Clicking a window raises it
    pub bring_front_click: bool,
    /// Floating windows stay above tiled ones
    pub floats_kept_above: bool,
    /// Warp the pointer to newly focused windows
    pub cursor_warp: bool,
    /// Honor fullscreen requests from clients
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    /// Re-evaluate screen bindings when outputs change
    pub reconfigure_screens: bool,
    /// Minimize windows that request it
    pub auto_minimize: bool,
    /// Xcursor theme name, None for the server default
    pub xcursor_theme: Option<String>,
    /// Cursor size in pixels
    pub xcursor_size: u16,
    /// Default terminal emulator used by the terminal binding
    pub terminal: String,
    /// Name reported as WM_NAME
    pub wm_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            follow_mouse_focus: false,
            bring_front_click: true,
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: false,
            xcursor_theme: None,
            xcursor_size: defaults::XCURSOR_SIZE,
            terminal: commands::TERMINAL.to_string(),
            wm_name: defaults::WM_NAME.to_string(),
        }
    }
}
