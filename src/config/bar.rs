//! Status bar and widget descriptors
//!
//! Widgets are plain data; the host renders them left-to-right in list order
//! and re-renders periodically. Click and scroll callbacks on widgets are
//! deferred `Action`s like any other binding.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::common::HexColor;
use crate::config::action::Action;
use crate::constants::{self, mouse, palette};

/// Font and color defaults applied to widgets that do not override them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub font_size: u16,
    pub padding: u16,
    pub foreground: HexColor,
    pub background: HexColor,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: constants::bar::FONT.to_string(),
            font_size: constants::bar::FONT_SIZE,
            padding: constants::bar::PADDING,
            foreground: palette::TEXT_MAIN,
            background: palette::BG_BAR,
        }
    }
}

/// How the GroupBox widget marks the active group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMethod {
    /// Underline below the group label
    Line,
    /// Filled block behind the label
    Block,
    /// Label color change only
    Text,
}

/// GroupBox styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupBoxSettings {
    pub foreground: HexColor,
    pub background: HexColor,
    /// Label color of groups holding windows
    pub active: HexColor,
    /// Label color of empty groups
    pub inactive: HexColor,
    /// Gradient pair behind the highlighted group
    pub highlight_color: [HexColor; 2],
    pub highlight_method: HighlightMethod,
    /// Highlight color of the group shown on this screen
    pub this_current_screen_border: HexColor,
    pub margin_y: u16,
    pub padding_y: u16,
    pub padding_x: u16,
}

impl Default for GroupBoxSettings {
    fn default() -> Self {
        Self {
            foreground: palette::TEXT_MAIN,
            background: palette::BG_BAR,
            active: palette::BORDER_ACTIVE,
            inactive: palette::TEXT_DIM,
            highlight_color: [palette::BG_INACTIVE, palette::BG_BAR],
            highlight_method: HighlightMethod::Line,
            this_current_screen_border: palette::BORDER_ACTIVE,
            margin_y: 3,
            padding_y: 5,
            padding_x: 5,
        }
    }
}

/// A click or scroll callback attached to a widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetCallback {
    /// X11 button number (1 = left, 3 = right, 4/5 = scroll)
    pub button: u8,
    pub action: Action,
}

/// A status-bar element, rendered left-to-right in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    /// Clickable group (workspace) switcher
    GroupBox(GroupBoxSettings),
    /// Title of the focused window
    WindowName {
        foreground: HexColor,
        max_chars: usize,
    },
    /// Flexible gap pushing neighbors apart
    Spacer,
    /// CPU load readout
    Cpu {
        format: String,
        foreground: HexColor,
        padding: u16,
    },
    /// Vertical separator line
    Sep {
        linewidth: u16,
        foreground: HexColor,
        padding: u16,
    },
    /// Memory usage readout
    Memory {
        format: String,
        foreground: HexColor,
        padding: u16,
    },
    /// System tray icons
    Systray,
    /// Volume readout with click/scroll callbacks
    Volume {
        foreground: HexColor,
        padding: u16,
        callbacks: Vec<WidgetCallback>,
    },
    /// Wall clock with a strftime format
    Clock {
        format: String,
        foreground: HexColor,
    },
    /// Logout/shutdown button
    QuickExit { foreground: HexColor },
}

impl Widget {
    /// Widget kind name for logs and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GroupBox(_) => "group_box",
            Self::WindowName { .. } => "window_name",
            Self::Spacer => "spacer",
            Self::Cpu { .. } => "cpu",
            Self::Sep { .. } => "sep",
            Self::Memory { .. } => "memory",
            Self::Systray => "systray",
            Self::Volume { .. } => "volume",
            Self::Clock { .. } => "clock",
            Self::QuickExit { .. } => "quick_exit",
        }
    }
}

/// A screen's status strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bar {
    /// Widgets in render order
    pub widgets: Vec<Widget>,
    /// Bar height in pixels
    pub height: u16,
    pub background: HexColor,
    /// Border widths per edge: top, right, bottom, left
    pub border_width: [u16; 4],
    /// Border colors per edge: top, right, bottom, left
    pub border_color: [HexColor; 4],
}

impl Bar {
    /// Configuration problems in this bar, empty when it is sound
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.widgets.is_empty() {
            problems.push("bar has no widgets".to_string());
        }
        if self.height == 0 {
            problems.push("bar height is zero".to_string());
        }

        for widget in &self.widgets {
            match widget {
                Widget::Clock { format, .. } => {
                    if StrftimeItems::new(format).any(|item| item == Item::Error) {
                        problems.push(format!("clock format {format:?} is not valid strftime"));
                    }
                }
                Widget::Volume { callbacks, .. } => {
                    for callback in callbacks {
                        if callback.button == 0 {
                            problems.push("volume callback bound to button 0".to_string());
                        }
                    }
                }
                _ => {}
            }
        }

        problems
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            widgets: default_widgets(),
            height: constants::bar::HEIGHT,
            background: palette::BG_BAR,
            // Thin line along the top edge only
            border_width: [2, 0, 0, 0],
            border_color: [
                palette::BORDER_ACTIVE,
                palette::BG_BAR,
                palette::BG_BAR,
                palette::BG_BAR,
            ],
        }
    }
}

/// The default widget list: groups and window title on the left, CPU and
/// memory centered between spacers, tray/volume/clock/exit on the right.
pub fn default_widgets() -> Vec<Widget> {
    use crate::config::action::SpawnCommand;
    use crate::constants::commands;

    let volume_callback = |button: u8, argv: &[&str]| WidgetCallback {
        button,
        action: Action::Spawn(SpawnCommand::exec(argv)),
    };

    vec![
        Widget::GroupBox(GroupBoxSettings::default()),
        Widget::WindowName {
            foreground: palette::TEXT_MAIN,
            max_chars: constants::bar::WINDOW_NAME_MAX_CHARS,
        },
        Widget::Spacer,
        Widget::Cpu {
            format: constants::bar::CPU_FORMAT.to_string(),
            foreground: palette::ACCENT,
            padding: 8,
        },
        Widget::Sep {
            linewidth: 1,
            foreground: palette::BORDER_INACTIVE,
            padding: 10,
        },
        Widget::Memory {
            format: constants::bar::MEMORY_FORMAT.to_string(),
            foreground: palette::ACCENT,
            padding: 8,
        },
        Widget::Spacer,
        Widget::Systray,
        Widget::Volume {
            foreground: palette::TEXT_MAIN,
            padding: 8,
            callbacks: vec![
                volume_callback(mouse::BUTTON_LEFT, commands::VOLUME_MIXER),
                volume_callback(mouse::BUTTON_SCROLL_UP, commands::VOLUME_RAISE),
                volume_callback(mouse::BUTTON_SCROLL_DOWN, commands::VOLUME_LOWER),
                volume_callback(mouse::BUTTON_RIGHT, commands::VOLUME_MUTE),
            ],
        },
        Widget::Clock {
            format: constants::bar::CLOCK_FORMAT.to_string(),
            foreground: palette::BORDER_ACTIVE,
        },
        Widget::QuickExit {
            foreground: palette::TEXT_DIM,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bar_is_sound() {
        let bar = Bar::default();
        assert!(bar.problems().is_empty(), "{:?}", bar.problems());
        assert_eq!(bar.height, 28);
        assert_eq!(bar.border_width, [2, 0, 0, 0]);
    }

    #[test]
    fn test_default_widget_order_is_stable() {
        let kinds: Vec<_> = default_widgets().iter().map(Widget::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "group_box",
                "window_name",
                "spacer",
                "cpu",
                "sep",
                "memory",
                "spacer",
                "systray",
                "volume",
                "clock",
                "quick_exit",
            ]
        );

        // Repeated construction yields the identical list
        assert_eq!(default_widgets(), default_widgets());
    }

    #[test]
    fn test_empty_bar_is_flagged() {
        let bar = Bar {
            widgets: Vec::new(),
            ..Bar::default()
        };
        assert!(bar.problems().iter().any(|p| p.contains("no widgets")));
    }

    #[test]
    fn test_bad_clock_format_is_flagged() {
        let mut bar = Bar::default();
        bar.widgets.push(Widget::Clock {
            format: "%Q".to_string(),
            foreground: palette::TEXT_MAIN,
        });
        assert!(
            bar.problems()
                .iter()
                .any(|p| p.contains("not valid strftime"))
        );

        // The stock clock format passes
        assert!(Bar::default().problems().is_empty());
    }

    #[test]
    fn test_volume_widget_callbacks() {
        let widgets = default_widgets();
        let Some(Widget::Volume { callbacks, .. }) =
            widgets.iter().find(|w| w.kind() == "volume")
        else {
            panic!("volume widget missing");
        };

        let buttons: Vec<_> = callbacks.iter().map(|c| c.button).collect();
        assert_eq!(buttons, vec![1, 4, 5, 3]);
        for callback in callbacks {
            assert!(matches!(callback.action, Action::Spawn(_)));
        }
    }

    #[test]
    fn test_widget_serde_roundtrip() {
        let widgets = default_widgets();
        let json = serde_json::to_string(&widgets).unwrap();
        let back: Vec<Widget> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, widgets);

        // Tagged form keeps the kind readable in the file
        assert!(json.contains(r#""kind":"group_box""#));
    }
}
