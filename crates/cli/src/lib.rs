//! `stockroom-cli`
//!
//! Command-line front end for the inventory store: a demonstration run plus
//! one subcommand per store operation. Mutating commands load the data file,
//! apply the change and save it back.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{Session, run};
