use clap::{Arg, ArgAction, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    if let Err(e) = cli::run_command(&matches) {
        eprintln!("❌ {:#}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("create-project")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rename a project template in place")
        .long_about(
            "Replaces the template's placeholder tokens with a new project name, \
             plus any extra placeholders listed in template.config.json",
        )
        .arg(
            Arg::new("project-name")
                .help("Project name (prompted for when omitted)")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("dir")
                .short('C')
                .long("dir")
                .help("Template directory to work in")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("sources")
                .long("sources")
                .help("Only rename files under this subdirectory")
                .value_name("NAME")
                .num_args(0..=1)
                .default_missing_value("Sources"),
        )
        .arg(
            Arg::new("placeholders")
                .long("placeholders")
                .help("Placeholder file to use instead of template.config.json")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Show what would change without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_sources_flag_defaults_to_sources() {
        let matches = build_cli().get_matches_from(["create-project", "demo", "--sources"]);
        assert_eq!(matches.get_one::<String>("sources").map(String::as_str), Some("Sources"));
        assert_eq!(matches.get_one::<String>("project-name").map(String::as_str), Some("demo"));
    }

    #[test]
    fn test_sources_flag_with_value() {
        let matches = build_cli().get_matches_from(["create-project", "--sources", "App", "-n"]);
        assert_eq!(matches.get_one::<String>("sources").map(String::as_str), Some("App"));
        assert!(matches.get_flag("dry-run"));
        assert!(matches.get_one::<String>("project-name").is_none());
    }
}
