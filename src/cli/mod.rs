//! Command-line interface module.

mod args;
pub mod catalog;
pub mod common;
pub mod render;
pub mod resolve;
pub mod serve;

pub use args::{Cli, Commands};
