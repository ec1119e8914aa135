use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::config::{Config, Placeholders, WalkSettings};
use crate::error::ProjectError;
use crate::models::{FileOutcome, FileReport, ProjectName, RunSummary};
use crate::substitution::Substituter;
use crate::{placeholders, walker, Result};

/// Everything a run needs besides the project name
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub working_dir: PathBuf,
    pub placeholder_file: PathBuf,
    pub sources_dir: Option<String>,
    pub dry_run: bool,
    pub tokens: Placeholders,
    pub walk: WalkSettings,
}

impl RunOptions {
    pub fn from_config(config: &Config, working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            placeholder_file: working_dir.join(&config.run.placeholder_file),
            sources_dir: config.run.sources_dir.clone(),
            dry_run: false,
            tokens: config.placeholders.clone(),
            walk: config.walk.clone(),
        }
    }

    /// Use `path` as the placeholder file; relative paths are taken from the
    /// working directory.
    pub fn set_placeholder_file(&mut self, path: &Path) {
        self.placeholder_file = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };
    }
}

/// Progress reported while a run is in flight
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// The walk finished and `count` files will be checked.
    FilesFound { root: &'a Path, count: usize },
    FileProcessed(&'a FileReport),
}

/// Directory the walk starts from: the working directory, or its sources
/// subdirectory when one is configured. A configured but missing sources
/// directory is an error.
pub fn resolve_root(working_dir: &Path, sources_dir: Option<&str>) -> Result<PathBuf> {
    match sources_dir {
        None => Ok(working_dir.to_path_buf()),
        Some(dir) => {
            let root = working_dir.join(dir);
            if root.is_dir() {
                Ok(root)
            } else {
                Err(ProjectError::MissingSourcesDirectory(root))
            }
        }
    }
}

pub fn run(name: &ProjectName, options: &RunOptions) -> Result<RunSummary> {
    run_with(name, options, |_| {})
}

/// Rename the template, reporting progress through `on_event`.
///
/// A failure on one file is recorded and the run moves on.
#[instrument(skip_all, fields(project = %name.sanitized(), dry_run = options.dry_run))]
pub fn run_with(
    name: &ProjectName,
    options: &RunOptions,
    mut on_event: impl FnMut(RunEvent<'_>),
) -> Result<RunSummary> {
    let placeholders = placeholders::load(&options.placeholder_file);
    let root = resolve_root(&options.working_dir, options.sources_dir.as_deref())?;

    // The placeholder file is the replacement source; never rewrite it.
    // Other files sharing its name are ordinary template files.
    let placeholder_file = fs::canonicalize(&options.placeholder_file).ok();
    let files: Vec<PathBuf> = walker::find_files(&root, &options.walk)?
        .into_iter()
        .filter(|path| match &placeholder_file {
            Some(skip) => fs::canonicalize(path).map_or(true, |p| &p != skip),
            None => true,
        })
        .collect();

    info!(root = %root.display(), files = files.len(), placeholders = placeholders.len(), "Found files to check");
    on_event(RunEvent::FilesFound {
        root: &root,
        count: files.len(),
    });

    let substituter = Substituter::new(name, &placeholders, &options.tokens)?;
    let mut summary = RunSummary {
        dry_run: options.dry_run,
        ..RunSummary::default()
    };

    for path in files {
        let outcome = match substituter.replace_in_file(&path, options.dry_run) {
            Ok(true) => FileOutcome::Updated,
            Ok(false) => FileOutcome::Unchanged,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to process file");
                FileOutcome::Failed(e)
            }
        };
        summary.record(path, outcome);
        if let Some(report) = summary.reports.last() {
            on_event(RunEvent::FileProcessed(report));
        }
    }

    info!(
        scanned = summary.files_scanned,
        modified = summary.files_modified,
        failed = summary.files_failed,
        "Run complete"
    );
    Ok(summary)
}
