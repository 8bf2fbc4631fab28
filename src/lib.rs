//! Pixelpal - palette loading and bracketing color search
//!
//! Command-line front end for the `palette-search` crate: embedded sample
//! palettes, YAML configuration and the interactive palette chooser.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
