//! Command-line interface module.

mod args;
pub mod build;
pub mod output;
pub mod parse;
pub mod slug;

pub use args::{Cli, Commands};
