//! Configuration descriptor
//!
//! Typed, serde-backed counterparts of everything the host reads at startup:
//! key and mouse bindings, groups, layouts, the status bar, and option flags.

pub mod action;
pub mod bar;
pub mod chord;
pub mod descriptor;
pub mod groups;
pub mod keys;
pub mod keysym;
pub mod layout;
pub mod mouse;
pub mod options;
pub mod screen;

pub use action::{Action, LayoutCommand, SpawnCommand, WindowCommand};
pub use chord::{KeyChord, ModSet};
pub use descriptor::Config;
pub use keys::KeyBinding;
pub use keysym::KeySym;
