//! Workspace groups
//!
//! Groups are named workspaces the host materializes at startup. Their
//! switch/move bindings are not written out one by one; they are generated
//! from the group list so every group always carries exactly the same pair.

use serde::{Deserialize, Serialize};

use crate::config::action::Action;
use crate::config::chord::{KeyChord, ModSet};
use crate::config::keys::KeyBinding;
use crate::constants;

/// A named workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The default groups: one per character of "123456789", in order
pub fn default_groups() -> Vec<Group> {
    constants::defaults::GROUP_NAMES
        .chars()
        .map(|c| Group::new(c.to_string()))
        .collect()
}

/// Generate the switch/move binding pair for every group.
///
/// For each group: mod4+name switches the screen to it, mod4+shift+name
/// moves the focused window there and follows it.
pub fn group_bindings(groups: &[Group]) -> Vec<KeyBinding> {
    let mut bindings = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        bindings.push(KeyBinding::new(
            KeyChord::new(ModSet::SUPER, group.name.as_str()),
            Action::SwitchToGroup(group.name.clone()),
            format!("Switch to group {}", group.name),
        ));
        bindings.push(KeyBinding::new(
            KeyChord::new(ModSet::SUPER_SHIFT, group.name.as_str()),
            Action::MoveToGroup {
                group: group.name.clone(),
                follow: true,
            },
            format!("Move window to group {}", group.name),
        ));
    }
    bindings
}
