pub mod config;
pub mod error;
pub mod models;
pub mod name;
pub mod placeholders;
pub mod runner;
pub mod substitution;
pub mod walker;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::Config;
pub use error::{NameError, ProjectError, Result};
pub use models::{FileOutcome, FileReport, PlaceholderMap, PlaceholderValue, ProjectName, RunSummary};
pub use runner::{run, run_with, RunEvent, RunOptions};
