//! knightpath: command-line front end for `knight-paths`.
//!
//! Parses the endpoints and search parameters, times the search, and prints
//! either the text report or the solution as JSON.

pub mod cli;
pub mod logging;
pub mod report;
pub mod timing;

pub use cli::{Args, CliError, run};
