// NOTE: wsrecall is a thin surface over wsrecall-providers.
// Reading, classification and labelling all live there; this crate only
// resolves which editor instances to read, picks a logger and prints.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
mod output;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
