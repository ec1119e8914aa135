pub mod prompt;
pub mod report;
pub mod utils;

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use create_project::config::LoggingConfig;
use create_project::{runner, Config, ProjectName, RunEvent, RunOptions};

pub fn run_command(matches: &ArgMatches) -> Result<()> {
    let working_dir = match matches.get_one::<PathBuf>("dir") {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let config = Config::load_from_dir(&working_dir).context("Failed to load settings")?;
    init_tracing(&config.logging, matches.get_flag("verbose"));

    let raw_name = match matches.get_one::<String>("project-name") {
        Some(name) => name.clone(),
        None => prompt::project_name(config.run.default_name.as_deref())?,
    };
    let name = ProjectName::parse(&raw_name)?;

    let mut options = RunOptions::from_config(&config, &working_dir);
    if let Some(sources) = matches.get_one::<String>("sources") {
        options.sources_dir = Some(sources.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("placeholders") {
        options.set_placeholder_file(path);
    }
    options.dry_run = matches.get_flag("dry-run");

    println!("\n🔍 Searching for files to replace...");
    let started = Instant::now();

    let summary = runner::run_with(&name, &options, |event| match event {
        RunEvent::FilesFound { count, .. } => report::print_files_found(count),
        RunEvent::FileProcessed(file) if options.dry_run => {
            report::print_file_dry_run(file, &working_dir)
        }
        RunEvent::FileProcessed(file) => report::print_file(file, &working_dir),
    })?;

    report::print_summary(&summary, &name, started.elapsed());
    Ok(())
}

/// Logs go to stderr; stdout carries the user-facing report.
/// `RUST_LOG` takes precedence over settings and `--verbose`.
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("create_project={}", level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match logging.format.as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    };

    if let Err(e) = result {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
    }
}
