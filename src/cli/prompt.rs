use anyhow::{Context, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};

const PROMPT: &str = "Enter project name";

/// Ask for the project name, blocking until a line is entered.
///
/// Uses an interactive prompt on a terminal and reads a single line from
/// stdin otherwise, so the tool can be driven from a pipe.
pub fn project_name(default: Option<&str>) -> Result<String> {
    if io::stdin().is_terminal() {
        let mut input = Input::<String>::new().with_prompt(PROMPT).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        return input.interact_text().context("Failed to read project name");
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read project name from stdin")?;

    Ok(choose(&line, default))
}

fn choose(line: &str, default: Option<&str>) -> String {
    match default {
        Some(default) if line.trim().is_empty() => default.to_string(),
        _ => line.to_string(),
    }
}
