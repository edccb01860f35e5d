//! # gh-cli
//!
//! CLI foundation for `gh-org`: argument parsing, output helpers and tracing setup.

pub mod cli;
pub mod logger;

pub use cli::{render_value, select_field, Cli, Commands};
pub use logger::init_tracing;
