//! CLI support for the `tfidf` binary.

pub mod args;
pub mod corpus;
pub mod error;
pub mod export;
pub mod report;
pub mod run;

pub use args::Cli;
pub use error::CliError;
pub use run::run;
