use create_project::name::{sanitize, validate};
use create_project::{NameError, ProjectName};

#[test]
fn test_spaces_and_punctuation_become_dashes() {
    let name = ProjectName::parse("My App!").unwrap();
    assert_eq!(name.sanitized(), "My-App");
    assert_eq!(name.original(), "My App!");
    assert_eq!(name.kebab(), "my-app");
}

#[test]
fn test_digit_first_is_rejected() {
    assert!(matches!(validate("123"), Err(NameError::MustStartWithLetter(_))));
    assert!(matches!(validate("  1st place"), Err(NameError::MustStartWithLetter(_))));
}

#[test]
fn test_single_letter_is_too_short() {
    assert!(matches!(validate("a"), Err(NameError::TooShort { .. })));
}

#[test]
fn test_dash_only_input() {
    assert_eq!(validate("---"), Err(NameError::DashesOnly));
    assert_eq!(validate(" - "), Err(NameError::DashesOnly));
}

#[test]
fn test_symbol_only_input() {
    for input in ["!!!", "@#$", "___", "..."] {
        assert_eq!(sanitize(input), "");
        assert_eq!(validate(input), Err(NameError::AllInvalidCharacters), "input {:?}", input);
    }
}

#[test]
fn test_blank_input() {
    assert_eq!(validate(""), Err(NameError::EmptyName));
    assert_eq!(ProjectName::parse("   ").unwrap_err(), NameError::EmptyName);
}

#[test]
fn test_too_long_after_sanitizing() {
    // 26 words of "ab" joined by spaces sanitizes to 77 chars
    let input = vec!["ab"; 26].join(" ");
    assert!(matches!(validate(&input), Err(NameError::TooLong { max: 50, .. })));
}

#[test]
fn test_sanitizing_can_shorten_below_limit() {
    let input = format!("{}!!!!!!!!!!", "a".repeat(50));
    assert_eq!(validate(&input).unwrap(), "a".repeat(50));
}

#[test]
fn test_error_messages_are_readable() {
    assert_eq!(NameError::EmptyName.to_string(), "Project name cannot be empty");
    assert_eq!(
        NameError::TooLong { len: 60, max: 50 }.to_string(),
        "Project name must be at most 50 characters (got 60)"
    );
}
