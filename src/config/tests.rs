// Config loading and template tests

use super::*;

fn no_env(_key: &str) -> Option<String> {
    None
}

#[test]
fn defaults_without_file_or_env() {
    let config = Config::from_parts(FileConfig::default(), no_env);
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.theme, "Deck Dark");
    assert!(config.resources.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
        base_url = "https://templates.example.com/v1"
        theme = "Deck Light"

        [logging]
        level = "debug"
        file_enabled = true
        file_rotation = "hourly"
        "#,
    )
    .unwrap();

    let config = Config::from_parts(file, no_env);
    assert_eq!(config.base_url, "https://templates.example.com/v1");
    assert_eq!(config.theme, "Deck Light");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    // Unset logging keys keep their defaults
    assert_eq!(config.logging.file_prefix, "promptdeck.log");
}

#[test]
fn env_beats_file() {
    let file: FileConfig = toml::from_str(r#"base_url = "http://from-file""#).unwrap();
    let config = Config::from_parts(file, |key| match key {
        "PROMPTDECK_BASE_URL" => Some("http://from-env".to_string()),
        _ => None,
    });
    assert_eq!(config.base_url, "http://from-env");
}

#[test]
fn resources_section_parses_in_order() {
    let file: FileConfig = toml::from_str(
        r#"
        [[resources]]
        identifier = "a.txt"
        title = "A"
        description = "first"

        [[resources]]
        identifier = "b.txt"
        title = "B"
        description = "second"
        "#,
    )
    .unwrap();

    let resources = file.resources.expect("resources expected");
    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].identifier, "a.txt");
    assert_eq!(resources[1].title, "B");
}

#[test]
fn unknown_rotation_is_rejected() {
    let result: Result<FileConfig, _> = toml::from_str(
        r#"
        [logging]
        file_rotation = "weekly"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn template_round_trips_through_the_parser() {
    let template = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&template).expect("template must parse");
    let config = Config::from_parts(file, no_env);
    assert_eq!(config.base_url, Config::default().base_url);
    assert_eq!(config.theme, Config::default().theme);
}
