use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "create-project.toml";

/// Placeholder file looked up in the working directory.
pub const PLACEHOLDER_FILE: &str = "template.config.json";

/// Tool settings for create-project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub placeholders: Placeholders,
    pub walk: WalkSettings,
    pub run: RunSettings,
    pub logging: LoggingConfig,
}

/// The two identity tokens baked into the template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub kebab: String,
    pub upper: String,
}

/// File selection rules for the walker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSettings {
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// File names accepted regardless of extension.
    pub always_include: Vec<String>,
    pub excluded_dirs: Vec<String>,
    pub excluded_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub placeholder_file: String,
    /// Subdirectory the walk is scoped to; must exist when set.
    pub sources_dir: Option<String>,
    /// Offered as the prompt default.
    pub default_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            kebab: "vite-app-template".to_string(),
            upper: "VITE_APP_TEMPLATE".to_string(),
        }
    }
}

impl Default for WalkSettings {
    fn default() -> Self {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            extensions: strings(&["json", "html", "md", "js", "ts", "tsx"]),
            always_include: strings(&["README.md"]),
            excluded_dirs: strings(&["node_modules", ".git", "dist", "build"]),
            excluded_files: strings(&[
                "create-project.js",
                ".DS_Store",
                "Thumbs.db",
                "desktop.ini",
            ]),
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            placeholder_file: PLACEHOLDER_FILE.to_string(),
            sources_dir: None,
            default_name: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(), // pretty, compact, json
        }
    }
}

impl Config {
    /// Load settings for the template in `dir`, with precedence (highest last):
    /// 1. Default values
    /// 2. create-project.toml in `dir` (if it exists)
    /// 3. Environment variables (CREATE_PROJECT_*)
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let settings_file = dir.join(SETTINGS_FILE);
        if settings_file.exists() {
            builder = builder.add_source(File::from(settings_file));
        }

        // CREATE_PROJECT_RUN__SOURCES_DIR -> run.sources_dir
        builder = builder.add_source(
            Environment::with_prefix("CREATE_PROJECT")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("walk.extensions")
                .with_list_parse_key("walk.always_include")
                .with_list_parse_key("walk.excluded_dirs")
                .with_list_parse_key("walk.excluded_files")
                .try_parsing(true),
        );

        let config = builder.build()?.try_deserialize::<Config>()?;
        Ok(config)
    }
}
