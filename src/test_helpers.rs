//! Test helpers for building template trees in temporary directories
//!
//! # Usage
//!
//! ```rust,ignore
//! use create_project::test_helpers::TemplateFixture;
//!
//! let fixture = TemplateFixture::new()?;
//! fixture.add_file("package.json", r#"{"name": "vite-app-template"}"#)?;
//! fixture.add_placeholders(r#"{"SITE_TITLE": "My Site"}"#)?;
//! // run against fixture.root()
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::PLACEHOLDER_FILE;
use crate::Result;

/// A template checkout living in a temporary directory
///
/// The directory is removed when the fixture is dropped.
pub struct TemplateFixture {
    temp_dir: TempDir,
}

impl TemplateFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// A fixture with a small Vite-style template already in place
    ///
    /// Structure created:
    /// - `README.md`, `index.html`, `package.json`
    /// - `src/main.tsx`
    /// - `node_modules/dep/index.js` (must never be touched)
    pub fn vite_template() -> Result<Self> {
        let fixture = Self::new()?;
        fixture.add_file("README.md", "# VITE_APP_TEMPLATE\n\nRun `npm start` in vite-app-template.\n")?;
        fixture.add_file("index.html", "<title>VITE_APP_TEMPLATE</title>\n")?;
        fixture.add_file("package.json", "{\n  \"name\": \"vite-app-template\"\n}\n")?;
        fixture.add_file("src/main.tsx", "export const APP = \"VITE_APP_TEMPLATE\";\n")?;
        fixture.add_file("node_modules/dep/index.js", "module.exports = 'vite-app-template';\n")?;
        Ok(fixture)
    }

    /// Write a file relative to the root, creating parent directories
    pub fn add_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Write the placeholder file at the root
    pub fn add_placeholders(&self, json: &str) -> Result<PathBuf> {
        self.add_file(PLACEHOLDER_FILE, json)
    }

    pub fn add_dir(&self, relative_path: &str) -> Result<PathBuf> {
        let dir = self.path(relative_path);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn read(&self, relative_path: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(relative_path))?)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}
