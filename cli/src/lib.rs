//! Configuration and command runners for the `wps` binary.
//!
//! Runners return the text to print so they can be tested without a
//! process boundary.

mod commands;
mod config;

pub use commands::{run_exceptions, run_filter, run_plural};
pub use config::{config_dir, Config, PluralConfig};
