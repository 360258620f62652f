pub mod commands;
pub mod display;
pub mod preview;

pub use commands::{CliArgs, Commands};
