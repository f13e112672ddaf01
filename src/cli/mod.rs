pub mod analyze;
pub mod analyze_all;
pub mod apply;
pub mod commands;
pub mod export;

pub use commands::{Cli, Commands};
