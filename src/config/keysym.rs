//! X keysym names used in key chords
//!
//! The host resolves these to keycodes when it grabs keys; the descriptor
//! only stores the names. Names are normalized on construction so that
//! "return", "Return" and "RETURN" all compare equal, and unknown names are
//! reported by validation instead of silently binding nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Keysym names accepted beyond single letters and digits.
/// Canonical capitalization follows X11 keysymdef.
const NAMED_KEYSYMS: &[&str] = &[
    "Return",
    "space",
    "Tab",
    "Escape",
    "BackSpace",
    "Delete",
    "Insert",
    "Home",
    "End",
    "Prior",
    "Next",
    "Left",
    "Right",
    "Up",
    "Down",
    "Print",
    "Super_L",
    "Super_R",
    "comma",
    "period",
    "semicolon",
    "apostrophe",
    "slash",
    "backslash",
    "bracketleft",
    "bracketright",
    "minus",
    "equal",
    "grave",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
];

/// A single X keysym name ("h", "3", "Return", "Super_L", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySym(String);

impl KeySym {
    /// Build a keysym from a name, normalizing case.
    ///
    /// Unknown names are kept verbatim; `is_known` reports them so that
    /// `Config::validate` can flag typos with context.
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim();

        // Single letters and digits are keysyms of their lowercase form
        if trimmed.len() == 1 && trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Self(trimmed.to_ascii_lowercase());
        }

        // Named keysyms match case-insensitively onto their canonical form
        if let Some(canonical) = NAMED_KEYSYMS
            .iter()
            .find(|k| k.eq_ignore_ascii_case(trimmed))
        {
            return Self((*canonical).to_string());
        }

        Self(trimmed.to_string())
    }

    /// Canonical keysym name as the host expects it
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this is a keysym the host can resolve
    pub fn is_known(&self) -> bool {
        (self.0.len() == 1 && self.0.chars().all(|c| c.is_ascii_alphanumeric()))
            || NAMED_KEYSYMS.contains(&self.0.as_str())
    }

    /// Human-readable name for binding listings
    pub fn display_name(&self) -> String {
        match self.0.as_str() {
            "Return" => "Enter".to_string(),
            "space" => "Space".to_string(),
            "BackSpace" => "Backspace".to_string(),
            "Prior" => "Page Up".to_string(),
            "Next" => "Page Down".to_string(),
            "Print" => "Print Screen".to_string(),
            "Super_L" => "Left Super".to_string(),
            "Super_R" => "Right Super".to_string(),
            "comma" => ",".to_string(),
            "period" => ".".to_string(),
            "semicolon" => ";".to_string(),
            "apostrophe" => "'".to_string(),
            "slash" => "/".to_string(),
            "backslash" => "\\".to_string(),
            "bracketleft" => "[".to_string(),
            "bracketright" => "]".to_string(),
            "minus" => "-".to_string(),
            "equal" => "=".to_string(),
            "grave" => "`".to_string(),
            s if s.len() == 1 => s.to_ascii_uppercase(),
            s => s.to_string(),
        }
    }
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeySym {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Serialize for KeySym {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for KeySym {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(KeySym::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_and_digit_normalization() {
        assert_eq!(KeySym::new("H").name(), "h");
        assert_eq!(KeySym::new("h").name(), "h");
        assert_eq!(KeySym::new("3").name(), "3");
        assert!(KeySym::new("H").is_known());
        assert_eq!(KeySym::new("H"), KeySym::new("h"));
    }

    #[test]
    fn test_named_keysym_normalization() {
        assert_eq!(KeySym::new("return").name(), "Return");
        assert_eq!(KeySym::new("SPACE").name(), "space");
        assert_eq!(KeySym::new("super_l").name(), "Super_L");
        assert!(KeySym::new("Tab").is_known());
        assert!(KeySym::new("F12").is_known());
    }

    #[test]
    fn test_unknown_keysym_flagged() {
        let sym = KeySym::new("NotAKey");
        assert_eq!(sym.name(), "NotAKey");
        assert!(!sym.is_known());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(KeySym::new("Return").display_name(), "Enter");
        assert_eq!(KeySym::new("h").display_name(), "H");
        assert_eq!(KeySym::new("Prior").display_name(), "Page Up");
        assert_eq!(KeySym::new("Super_L").display_name(), "Left Super");
    }
}
