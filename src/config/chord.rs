//! Key chord configuration and modifier mapping
//!
//! A chord is a modifier set plus a keysym. On disk it is an array with the
//! modifiers first in canonical order and the keysym last, e.g.
//! `["mod4", "shift", "h"]`.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use x11rb::protocol::xproto::ModMask;

use crate::config::keysym::KeySym;

/// The set of held modifier keys required to trigger a binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModSet {
    /// Super/Windows key (mod4)
    pub super_key: bool,

    /// Alt key (mod1)
    pub alt: bool,

    /// Control key
    pub ctrl: bool,

    /// Shift key
    pub shift: bool,
}

impl ModSet {
    pub const NONE: ModSet = ModSet {
        super_key: false,
        alt: false,
        ctrl: false,
        shift: false,
    };

    pub const SUPER: ModSet = ModSet {
        super_key: true,
        ..ModSet::NONE
    };

    pub const SUPER_SHIFT: ModSet = ModSet {
        super_key: true,
        shift: true,
        ..ModSet::NONE
    };

    pub const SUPER_CTRL: ModSet = ModSet {
        super_key: true,
        ctrl: true,
        ..ModSet::NONE
    };

    pub const ALT: ModSet = ModSet {
        alt: true,
        ..ModSet::NONE
    };

    /// Convert to the X11 modifier mask the host passes to GrabKey/GrabButton
    pub fn to_modmask(self) -> ModMask {
        let mut mask = ModMask::from(0u16);
        if self.shift {
            mask = mask | ModMask::SHIFT;
        }
        if self.ctrl {
            mask = mask | ModMask::CONTROL;
        }
        if self.alt {
            mask = mask | ModMask::M1;
        }
        if self.super_key {
            mask = mask | ModMask::M4;
        }
        mask
    }

    /// Modifier names in canonical serialization order
    fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.super_key {
            names.push("mod4");
        }
        if self.alt {
            names.push("mod1");
        }
        if self.ctrl {
            names.push("control");
        }
        if self.shift {
            names.push("shift");
        }
        names
    }

    fn apply_name(&mut self, name: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "mod4" | "super" => self.super_key = true,
            "mod1" | "alt" => self.alt = true,
            "control" | "ctrl" => self.ctrl = true,
            "shift" => self.shift = true,
            _ => return false,
        }
        true
    }

    /// Human-readable prefix ("Super+Shift") for binding listings
    pub fn display_name(self) -> String {
        let mut parts = Vec::new();
        if self.super_key {
            parts.push("Super");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.join("+")
    }
}

// Mouse bindings carry a bare ModSet; it uses the same name-array form as
// the chord format, without a trailing keysym.
impl Serialize for ModSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut mods = ModSet::default();
        for name in &names {
            if !mods.apply_name(name) {
                return Err(de::Error::custom(format!("unknown modifier {name:?}")));
            }
        }
        Ok(mods)
    }
}

/// A modifier set plus a keysym
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub mods: ModSet,
    pub sym: KeySym,
}

impl KeyChord {
    pub fn new(mods: ModSet, sym: impl Into<KeySym>) -> Self {
        Self {
            mods,
            sym: sym.into(),
        }
    }

    /// Get human-readable display name for this chord (for listings)
    pub fn display_name(&self) -> String {
        let mods = self.mods.display_name();
        if mods.is_empty() {
            self.sym.display_name()
        } else {
            format!("{}+{}", mods, self.sym.display_name())
        }
    }

    /// Convert to array format for serialization
    /// Format: [modifiers..., keysym]
    fn to_name_array(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mods.names().iter().map(|s| s.to_string()).collect();
        names.push(self.sym.name().to_string());
        names
    }

    /// Parse from array format
    /// Format: [modifiers..., keysym]
    fn from_name_array(names: &[String]) -> Result<Self, String> {
        if names.is_empty() {
            return Err("empty chord array".to_string());
        }

        let mut mods = ModSet::default();
        for (i, name) in names.iter().enumerate() {
            if mods.apply_name(name) {
                continue;
            }
            if i == names.len() - 1 {
                return Ok(Self::new(mods, KeySym::new(name)));
            }
            return Err(format!("non-modifier {name:?} must be last in chord array"));
        }

        // Every element parsed as a modifier, so no keysym was given
        Err("chord array has no keysym".to_string())
    }
}

impl Serialize for KeyChord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_name_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        KeyChord::from_name_array(&names).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let chord = KeyChord::new(ModSet::NONE, "Tab");
        assert_eq!(chord.display_name(), "Tab");

        let chord = KeyChord::new(ModSet::SUPER, "h");
        assert_eq!(chord.display_name(), "Super+H");

        let chord = KeyChord::new(ModSet::SUPER_SHIFT, "Return");
        assert_eq!(chord.display_name(), "Super+Shift+Enter");

        let chord = KeyChord::new(ModSet::SUPER_CTRL, "q");
        assert_eq!(chord.display_name(), "Super+Ctrl+Q");
    }

    #[test]
    fn test_to_modmask() {
        assert_eq!(ModSet::NONE.to_modmask(), ModMask::from(0u16));
        assert_eq!(ModSet::SUPER.to_modmask(), ModMask::M4);
        assert_eq!(
            ModSet::SUPER_SHIFT.to_modmask(),
            ModMask::M4 | ModMask::SHIFT
        );
        assert_eq!(ModSet::ALT.to_modmask(), ModMask::M1);
    }

    #[test]
    fn test_to_name_array() {
        let chord = KeyChord::new(ModSet::NONE, "Super_L");
        assert_eq!(chord.to_name_array(), vec!["Super_L"]);

        let chord = KeyChord::new(ModSet::SUPER_SHIFT, "j");
        assert_eq!(chord.to_name_array(), vec!["mod4", "shift", "j"]);

        let chord = KeyChord::new(ModSet::SUPER_CTRL, "r");
        assert_eq!(chord.to_name_array(), vec!["mod4", "control", "r"]);
    }

    #[test]
    fn test_from_name_array() {
        let names = vec!["mod4".to_string(), "shift".to_string(), "h".to_string()];
        let chord = KeyChord::from_name_array(&names).unwrap();
        assert!(chord.mods.super_key);
        assert!(chord.mods.shift);
        assert!(!chord.mods.ctrl);
        assert_eq!(chord.sym.name(), "h");

        // Modifier aliases are accepted
        let names = vec!["super".to_string(), "ctrl".to_string(), "q".to_string()];
        let chord = KeyChord::from_name_array(&names).unwrap();
        assert_eq!(chord.mods, ModSet::SUPER_CTRL);

        assert!(KeyChord::from_name_array(&[]).is_err());
        assert!(KeyChord::from_name_array(&["mod4".to_string()]).is_err());

        let bad = vec!["h".to_string(), "shift".to_string()];
        assert!(KeyChord::from_name_array(&bad).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let chord = KeyChord::new(ModSet::SUPER_SHIFT, "Return");
        let json = serde_json::to_string(&chord).unwrap();
        assert_eq!(json, r#"["mod4","shift","Return"]"#);

        let back: KeyChord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chord);
    }
}
