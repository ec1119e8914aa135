//! Project name sanitization and validation.

use crate::error::NameError;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

/// Normalize free text into `[A-Za-z0-9-]`.
///
/// Every other character becomes a dash, runs of dashes collapse to one,
/// and leading/trailing dashes are stripped. The result may be empty.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Validate raw input, returning the sanitized name.
pub fn validate(raw: &str) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::EmptyName);
    }
    if trimmed.chars().all(|c| c == '-') {
        return Err(NameError::DashesOnly);
    }

    let sanitized = sanitize(trimmed);
    let Some(first) = sanitized.chars().next() else {
        return Err(NameError::AllInvalidCharacters);
    };
    if !first.is_ascii_alphabetic() {
        return Err(NameError::MustStartWithLetter(sanitized));
    }
    // ASCII only from here on, so byte length == char count.
    if sanitized.len() < MIN_NAME_LEN {
        return Err(NameError::TooShort {
            name: sanitized,
            min: MIN_NAME_LEN,
        });
    }
    if sanitized.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong {
            len: sanitized.len(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(sanitized)
}
