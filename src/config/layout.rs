//! Layout selections and the shared visual theme
//!
//! The descriptor picks which layout algorithms the host cycles through and
//! how their borders look; the algorithms themselves live in the host.

use serde::{Deserialize, Serialize};

use crate::common::HexColor;
use crate::constants::{self, palette};

/// Border and gap styling shared by every tiled layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTheme {
    /// Window border thickness in pixels
    pub border_width: u16,
    /// Gap around tiled windows in pixels
    pub margin: u16,
    /// Border color of unfocused windows
    pub border_normal: HexColor,
    /// Border color of the focused window
    pub border_focus: HexColor,
    /// Border color when a single window fills the layout
    pub border_on_single: HexColor,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            border_width: constants::layout::BORDER_WIDTH,
            margin: constants::layout::MARGIN,
            border_normal: palette::BORDER_INACTIVE,
            border_focus: palette::BORDER_ACTIVE,
            border_on_single: palette::BORDER_ACTIVE,
        }
    }
}

/// A layout algorithm selection. `Action::NextLayout` cycles the list these
/// appear in, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Side-by-side columns with stacking inside each column
    Columns {
        /// Border colors alternated across stacked panes of the focused column
        border_focus_stack: [HexColor; 2],
    },
    /// One maximized window at a time
    Max,
    /// One master pane, remaining windows stacked beside it
    MonadTall,
    /// Binary space partitioning
    Bsp,
}

impl Layout {
    /// Name the host shows in its layout indicator
    pub fn name(&self) -> &'static str {
        match self {
            Self::Columns { .. } => "columns",
            Self::Max => "max",
            Self::MonadTall => "monadtall",
            Self::Bsp => "bsp",
        }
    }
}

/// The default layout rotation
pub fn default_layouts() -> Vec<Layout> {
    vec![
        Layout::Columns {
            border_focus_stack: [palette::BORDER_ACTIVE, palette::ACCENT],
        },
        Layout::Max,
        Layout::MonadTall,
        Layout::Bsp,
    ]
}

/// Match rule for windows that should float
///
/// A rule matches when every present field matches; a rule with no fields
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowRule {
    /// Exact WM_CLASS to match
    pub wm_class: Option<String>,
    /// Exact window title to match
    pub title: Option<String>,
}

impl WindowRule {
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.to_string()),
            ..Self::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wm_class.is_none() && self.title.is_none()
    }
}

/// Styling and match rules for floating windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub theme: LayoutTheme,
    /// Keep the host's built-in float rules (dialogs, splash screens, ...)
    pub use_default_rules: bool,
    /// Extra rules appended after the built-in ones
    pub rules: Vec<WindowRule>,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            theme: LayoutTheme::default(),
            use_default_rules: true,
            rules: vec![
                WindowRule::wm_class("confirmreset"),
                WindowRule::wm_class("makebranch"),
                WindowRule::wm_class("maketag"),
                WindowRule::wm_class("ssh-askpass"),
                WindowRule::title("branchdialog"),
                WindowRule::title("pinentry"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_rotation_order() {
        let layouts = default_layouts();
        let names: Vec<_> = layouts.iter().map(Layout::name).collect();
        assert_eq!(names, vec!["columns", "max", "monadtall", "bsp"]);
    }

    #[test]
    fn test_theme_defaults_come_from_palette() {
        let theme = LayoutTheme::default();
        assert_eq!(theme.border_width, 3);
        assert_eq!(theme.margin, 6);
        assert_eq!(theme.border_focus, palette::BORDER_ACTIVE);
        assert_eq!(theme.border_normal, palette::BORDER_INACTIVE);
        // A lone window keeps the focused border color
        assert_eq!(theme.border_on_single, theme.border_focus);
    }

    #[test]
    fn test_floating_defaults_keep_builtin_rules() {
        let floating = FloatingConfig::default();
        assert!(floating.use_default_rules);
        assert_eq!(floating.rules.len(), 6);
        assert!(floating.rules.iter().all(|r| !r.is_empty()));
        assert!(
            floating
                .rules
                .iter()
                .any(|r| r.title.as_deref() == Some("pinentry"))
        );
    }

    #[test]
    fn test_layout_serde_roundtrip() {
        let layouts = default_layouts();
        let json = serde_json::to_string(&layouts).unwrap();
        let back: Vec<Layout> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layouts);

        // Unit layouts serialize as bare strings
        assert_eq!(serde_json::to_string(&Layout::Max).unwrap(), "\"max\"");
    }
}
