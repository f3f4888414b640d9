//! Core palette generation for nuancier: color parsing, the 50..950
//! lightness ramp, and the snippet formatters. The TUI frontend lives
//! behind the `tui` feature.

pub mod color;
pub mod config;
pub mod format;
pub mod palette;

#[cfg(feature = "tui")]
pub mod tui;
