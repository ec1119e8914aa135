use std::path::Path;
use std::time::Duration;

use create_project::{FileOutcome, FileReport, ProjectName, RunSummary};

use super::utils::{display_path, format_duration, pluralize};

pub fn print_files_found(count: usize) {
    println!("📁 Found {} files to check", count);
}

pub fn print_file(report: &FileReport, base: &Path) {
    let path = display_path(&report.path, base);
    match &report.outcome {
        FileOutcome::Updated => println!("✅ Updated: {}", path),
        FileOutcome::Unchanged => {}
        FileOutcome::Failed(e) => eprintln!("❌ Error processing file {}: {}", path, e),
    }
}

/// Dry runs print "Would update" instead of "Updated"
pub fn print_file_dry_run(report: &FileReport, base: &Path) {
    match &report.outcome {
        FileOutcome::Updated => println!("🧪 Would update: {}", display_path(&report.path, base)),
        _ => print_file(report, base),
    }
}

pub fn print_summary(summary: &RunSummary, name: &ProjectName, elapsed: Duration) {
    println!("\n✨ Done!");
    println!("📁 Files processed: {}", summary.files_scanned);
    if summary.dry_run {
        println!("🧪 Files that would change: {}", summary.files_modified);
    } else {
        println!("🔄 Files modified: {}", summary.files_modified);
    }
    if summary.files_failed > 0 {
        println!("⚠️  Failed: {}", pluralize("file", summary.files_failed));
    }
    println!("⏱️  Took {}", format_duration(elapsed));
    println!("🎯 Project renamed to: {}", name.original());
}
