//! gridwm-config
//!
//! The typed configuration descriptor for the gridwm X11 tiling window
//! manager. The host loads one [`Config`] at startup (and on reload) and
//! interprets its bindings, groups, layouts, screens and options; this crate
//! contributes data and one [`startup::STARTUP_HOOK`], not window-manager
//! behavior.

#![deny(unsafe_code)]

pub mod common;
pub mod config;
pub mod constants;
pub mod startup;

pub use common::HexColor;
pub use config::{Action, Config, KeyBinding, KeyChord, ModSet};
pub use startup::{STARTUP_HOOK, StartupHook};
