//! Pointer bindings
//!
//! Drags carry the getter the host samples when the gesture starts (window
//! position for moves, window size for resizes); clicks fire their action
//! directly.

use serde::{Deserialize, Serialize};

use crate::config::action::{Action, WindowCommand};
use crate::config::chord::ModSet;
use crate::constants::mouse;

/// Value sampled at drag start and fed back to the action while dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOrigin {
    WindowPosition,
    WindowSize,
}

/// Pointer gesture kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Click,
    Drag { start: DragOrigin },
}

/// A pointer gesture bound to a deferred action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseBinding {
    /// X11 button number
    pub button: u8,
    pub mods: ModSet,
    pub gesture: Gesture,
    pub action: Action,
}

/// The default pointer bindings: mod-drag to move or resize floating
/// windows, mod-middle-click to raise.
pub fn default_mouse() -> Vec<MouseBinding> {
    vec![
        MouseBinding {
            button: mouse::BUTTON_LEFT,
            mods: ModSet::SUPER,
            gesture: Gesture::Drag {
                start: DragOrigin::WindowPosition,
            },
            action: Action::Window(WindowCommand::SetPositionFloating),
        },
        MouseBinding {
            button: mouse::BUTTON_RIGHT,
            mods: ModSet::SUPER,
            gesture: Gesture::Drag {
                start: DragOrigin::WindowSize,
            },
            action: Action::Window(WindowCommand::SetSizeFloating),
        },
        MouseBinding {
            button: mouse::BUTTON_MIDDLE,
            mods: ModSet::SUPER,
            gesture: Gesture::Click,
            action: Action::Window(WindowCommand::BringToFront),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mouse_bindings() {
        let bindings = default_mouse();
        assert_eq!(bindings.len(), 3);

        // Drags come with their origin getters
        assert_eq!(
            bindings[0].gesture,
            Gesture::Drag {
                start: DragOrigin::WindowPosition,
            }
        );
        assert_eq!(
            bindings[1].gesture,
            Gesture::Drag {
                start: DragOrigin::WindowSize,
            }
        );
        assert_eq!(bindings[2].gesture, Gesture::Click);

        // All on the same modifier, different buttons
        for binding in &bindings {
            assert_eq!(binding.mods, ModSet::SUPER);
        }
        let buttons: Vec<_> = bindings.iter().map(|b| b.button).collect();
        assert_eq!(buttons, vec![1, 3, 2]);
    }

    #[test]
    fn test_modset_serde_form() {
        let json = serde_json::to_string(&ModSet::SUPER_SHIFT).unwrap();
        assert_eq!(json, r#"["mod4","shift"]"#);

        let back: ModSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModSet::SUPER_SHIFT);

        assert!(serde_json::from_str::<ModSet>(r#"["hyper"]"#).is_err());
    }

    #[test]
    fn test_mouse_binding_serde_roundtrip() {
        let bindings = default_mouse();
        let json = serde_json::to_string(&bindings).unwrap();
        let back: Vec<MouseBinding> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bindings);
    }
}
