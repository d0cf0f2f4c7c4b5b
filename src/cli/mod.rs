//! Command-line interface module.

mod args;
pub mod classify;
pub mod init;
pub mod optimize;
pub mod plan;

pub use args::{Cli, ClassifyArgs, Commands, OptimizeArgs, PlanArgs};
