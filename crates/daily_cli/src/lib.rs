//! Daily CLI - command-line access to puzzle day numbers, seeds and streams
//!
//! # Commands
//!
//! - `daily day` - Print today's puzzle number
//! - `daily seed` - Print today's seed
//! - `daily today` - Print date, day number and seed
//! - `daily sample` - Print the first values of a seeded stream
//! - `daily date-of <N>` - Print the date of puzzle day N
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate composes `daily_core`
//! and `daily_rng` with configuration loading and logging.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version reported at startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
