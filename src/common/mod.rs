//! Shared value types used across the configuration descriptor.

pub mod color;

pub use color::HexColor;
