//! Composition root for the `heroes` command.
//!
//! Parses configuration and arguments, builds the transport, message log and
//! hero service once, then hands them to the view a command routes to.

pub mod commands;
pub mod config;
pub mod telemetry;

pub use commands::{Command, UsageError};
pub use config::{Config, ConfigError};
