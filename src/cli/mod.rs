//! CLI command layer for the `changelogup` binary

mod generate;
mod style;

pub use generate::run_generate;
