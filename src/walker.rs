use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::WalkSettings;
use crate::{ProjectError, Result};

/// Find every candidate file under `root`.
///
/// Excluded directories are pruned before they are read. Entries within a
/// directory are visited in file-name order. Symbolic links are followed;
/// broken links and link loops are logged and skipped.
pub fn find_files(root: &Path, settings: &WalkSettings) -> Result<Vec<PathBuf>> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(ProjectError::Configuration(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry, settings));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && is_candidate(entry.path(), settings) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "File walk complete");
    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, settings: &WalkSettings) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| settings.excluded_dirs.iter().any(|d| d == name))
            .unwrap_or(false)
}

/// Check a single path against the extension allow-list and name exclusions
pub fn is_candidate(path: &Path, settings: &WalkSettings) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if settings.excluded_files.iter().any(|f| f == name) {
        return false;
    }
    if settings.always_include.iter().any(|f| f == name) {
        return true;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| settings.extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::TemplateFixture;

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_find_files_filters_by_extension() {
        let fixture = TemplateFixture::new().unwrap();
        fixture.add_file("index.html", "<html></html>").unwrap();
        fixture.add_file("package.json", "{}").unwrap();
        fixture.add_file("src/main.tsx", "").unwrap();
        fixture.add_file("src/util.ts", "").unwrap();
        fixture.add_file("src/legacy.js", "").unwrap();
        fixture.add_file("docs/guide.md", "").unwrap();
        fixture.add_file("logo.png", "").unwrap();
        fixture.add_file("styles.css", "").unwrap();

        let files = find_files(fixture.root(), &WalkSettings::default()).unwrap();
        let found = names(&files, fixture.root());

        assert_eq!(
            found,
            vec![
                "docs/guide.md",
                "index.html",
                "package.json",
                "src/legacy.js",
                "src/main.tsx",
                "src/util.ts",
            ]
        );
    }

    #[test]
    fn test_find_files_skips_excluded_dirs() {
        let fixture = TemplateFixture::new().unwrap();
        fixture.add_file("app.ts", "").unwrap();
        fixture.add_file("node_modules/pkg/index.js", "").unwrap();
        fixture.add_file(".git/config.json", "").unwrap();
        fixture.add_file("dist/bundle.js", "").unwrap();
        fixture.add_file("build/out.html", "").unwrap();
        fixture.add_file("src/node_modules/nested.js", "").unwrap();

        let files = find_files(fixture.root(), &WalkSettings::default()).unwrap();
        assert_eq!(names(&files, fixture.root()), vec!["app.ts"]);
    }

    #[test]
    fn test_find_files_skips_excluded_file_names() {
        let fixture = TemplateFixture::new().unwrap();
        fixture.add_file("create-project.js", "").unwrap();
        fixture.add_file(".DS_Store", "").unwrap();
        fixture.add_file("keep.md", "").unwrap();
        fixture.add_file("template.config.json", "{}").unwrap();

        let files = find_files(fixture.root(), &WalkSettings::default()).unwrap();
        assert_eq!(names(&files, fixture.root()), vec!["keep.md", "template.config.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let fixture = TemplateFixture::new().unwrap();
        let shared = fixture.add_dir("shared").unwrap();
        fixture.add_file("shared/theme.ts", "").unwrap();
        fixture.add_file("app.ts", "").unwrap();
        symlink(&shared, fixture.path("linked")).unwrap();
        symlink(fixture.path("app.ts"), fixture.path("alias.ts")).unwrap();
        symlink(fixture.path("missing.ts"), fixture.path("broken.ts")).unwrap();
        // A link back to the root must not loop forever
        symlink(fixture.root(), fixture.path("shared/loop")).unwrap();

        let files = find_files(fixture.root(), &WalkSettings::default()).unwrap();
        assert_eq!(
            names(&files, fixture.root()),
            vec!["alias.ts", "app.ts", "linked/theme.ts", "shared/theme.ts"]
        );
    }

    #[test]
    fn test_always_include_overrides_extension() {
        let mut settings = WalkSettings::default();
        settings.extensions = vec!["ts".to_string()];

        assert!(is_candidate(Path::new("README.md"), &settings));
        assert!(!is_candidate(Path::new("CHANGELOG.md"), &settings));
        assert!(is_candidate(Path::new("main.ts"), &settings));
        assert!(!is_candidate(Path::new("Makefile"), &settings));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let fixture = TemplateFixture::new().unwrap();
        let result = find_files(&fixture.path("does-not-exist"), &WalkSettings::default());
        assert!(result.is_err());
    }
}
