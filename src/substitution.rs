//! Placeholder substitution.
//!
//! Replacements run in a fixed order so longer or bracketed placeholders are
//! consumed before anything that could partially overlap them:
//!
//! 1. `["KEY"]` array placeholders whose value is a list, longest key first
//! 2. the bare `KEY`, longest key first
//! 3. the upper-snake project token (original name)
//! 4. the kebab-case project token (sanitized name, lower-cased)
//!
//! Every pattern is matched literally.

use regex::{NoExpand, Regex};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Placeholders;
use crate::error::ProjectError;
use crate::models::{PlaceholderMap, PlaceholderValue, ProjectName};
use crate::Result;

/// Literal pattern compiled once per run
#[derive(Debug)]
struct LiteralPattern {
    regex: Regex,
}

impl LiteralPattern {
    fn new(literal: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&regex::escape(literal))?,
        })
    }

    fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// Replace every occurrence, returning how many were replaced.
    fn replace_all(&self, content: &mut String, replacement: &str) -> usize {
        let count = self.regex.find_iter(content).count();
        if count > 0 {
            let replaced = self.regex.replace_all(content, NoExpand(replacement)).into_owned();
            *content = replaced;
        }
        count
    }
}

#[derive(Debug)]
struct KeyRule {
    key: String,
    value: PlaceholderValue,
    bracketed: LiteralPattern,
    bare: LiteralPattern,
    in_content_attr: Regex,
}

impl KeyRule {
    fn new(key: &str, value: &PlaceholderValue) -> Result<Self> {
        let escaped = regex::escape(key);
        Ok(Self {
            key: key.to_string(),
            value: value.clone(),
            bracketed: LiteralPattern::new(&format!("[\"{}\"]", key))?,
            bare: LiteralPattern::new(key)?,
            in_content_attr: Regex::new(&format!(r#"content="[^"]*{}[^"]*""#, escaped))?,
        })
    }

    fn apply(&self, content: &mut String) -> usize {
        let mut count = 0;

        if self.value.is_list() && self.bracketed.is_match(content) {
            count += self.bracketed.replace_all(content, &self.value.to_json());
        }

        if self.bare.is_match(content) {
            let replacement = match &self.value {
                PlaceholderValue::List(_) if self.in_content_attr.is_match(content) => {
                    self.value.joined().unwrap_or_default()
                }
                PlaceholderValue::List(_) | PlaceholderValue::Mapping(_) => self.value.to_json(),
                PlaceholderValue::Scalar(s) => s.clone(),
            };
            count += self.bare.replace_all(content, &replacement);
        }

        count
    }
}

/// Result of substituting one piece of content
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

/// All replacements for a run, compiled up front
#[derive(Debug)]
pub struct Substituter {
    key_rules: Vec<KeyRule>,
    upper: Option<(LiteralPattern, String)>,
    kebab: Option<(LiteralPattern, String)>,
}

impl Substituter {
    pub fn new(name: &ProjectName, placeholders: &PlaceholderMap, tokens: &Placeholders) -> Result<Self> {
        let mut keys: Vec<(&String, &PlaceholderValue)> = placeholders
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .collect();
        // Stable: equal lengths keep the map's alphabetical order
        keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let key_rules = keys
            .into_iter()
            .map(|(key, value)| KeyRule::new(key, value))
            .collect::<Result<Vec<_>>>()?;

        let token = |literal: &str, value: String| -> Result<Option<(LiteralPattern, String)>> {
            if literal.is_empty() {
                return Ok(None);
            }
            Ok(Some((LiteralPattern::new(literal)?, value)))
        };

        Ok(Self {
            key_rules,
            upper: token(&tokens.upper, name.original().to_string())?,
            kebab: token(&tokens.kebab, name.kebab())?,
        })
    }

    /// Apply every replacement to `content`.
    pub fn apply(&self, content: &str) -> Substitution {
        let mut content = content.to_string();
        let mut replacements = 0;

        for rule in &self.key_rules {
            let n = rule.apply(&mut content);
            if n > 0 {
                debug!(key = %rule.key, count = n, "Replaced placeholder key");
            }
            replacements += n;
        }

        for (pattern, value) in self.upper.iter().chain(self.kebab.iter()) {
            replacements += pattern.replace_all(&mut content, value);
        }

        Substitution { content, replacements }
    }

    /// Rewrite `path` in place. Returns whether the file changed.
    ///
    /// With `dry_run` the change is computed but not written.
    pub fn replace_in_file(&self, path: &Path, dry_run: bool) -> Result<bool> {
        let original = fs::read_to_string(path).map_err(|source| ProjectError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let result = self.apply(&original);
        if result.replacements == 0 || result.content == original {
            return Ok(false);
        }

        if !dry_run {
            write_in_place(path, &result.content).map_err(|source| ProjectError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }

        debug!(path = %path.display(), replacements = result.replacements, dry_run, "File updated");
        Ok(true)
    }
}

/// Sibling file the new content is staged in before it replaces `path`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".create-project.tmp");
    path.with_file_name(name)
}

/// Replace the file's content without leaving it half-written.
///
/// Symlinks are resolved first so the link itself survives, and the
/// original permissions are carried over to the new file.
fn write_in_place(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let permissions = fs::metadata(&target)?.permissions();
    let staged = staging_path(&target);

    fs::write(&staged, content)?;
    let finished = fs::set_permissions(&staged, permissions).and_then(|_| fs::rename(&staged, &target));
    if finished.is_err() {
        let _ = fs::remove_file(&staged);
    }
    finished
}

/// One-shot convenience over [`Substituter::apply`].
pub fn substitute(
    content: &str,
    name: &ProjectName,
    placeholders: &PlaceholderMap,
    tokens: &Placeholders,
) -> Result<Substitution> {
    Ok(Substituter::new(name, placeholders, tokens)?.apply(content))
}
