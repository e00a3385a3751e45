//! Physical display descriptors
//!
//! The host binds these to detected outputs in order; extra outputs reuse the
//! last entry, so a single-screen descriptor covers multi-head setups too.

use serde::{Deserialize, Serialize};

use crate::config::bar::Bar;

/// Which screen edge the bar occupies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarPosition {
    Top,
    #[default]
    Bottom,
}

/// A physical display's UI: optionally a status bar on one edge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screen {
    pub bar: Option<Bar>,
    pub bar_position: BarPosition,
}

impl Screen {
    /// The default screen: a bottom bar with the stock widget list
    pub fn with_default_bar() -> Self {
        Self {
            bar: Some(Bar::default()),
            bar_position: BarPosition::Bottom,
        }
    }

    /// Number of widgets on this screen's bar, None when it has no bar
    pub fn bar_widget_count(&self) -> Option<usize> {
        self.bar.as_ref().map(|bar| bar.widgets.len())
    }
}
