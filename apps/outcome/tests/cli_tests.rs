//! Tests for CLI parsing, config loading and command execution.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use outcome::cli::{Cli, Commands, cmd_run, cmd_walkthrough, execute, resolve_config};
use outcome::{AppConfig, AppError, ChainRequest, OutputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_no_subcommand_defaults_to_none() {
    let cli = Cli::try_parse_from(["outcome"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.json_mode);
    assert!(cli.config.is_none());
}

#[test]
fn test_run_collects_repeated_wrappers() {
    let cli = Cli::try_parse_from([
        "outcome",
        "run",
        "SUCCESS",
        "-w",
        "X",
        "--wrap",
        "Y",
        "--follow-up",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Run {
            value,
            fail,
            wrap,
            follow_up,
        }) => {
            assert_eq!(value, "SUCCESS");
            assert!(!fail);
            assert_eq!(wrap, vec!["X".to_string(), "Y".to_string()]);
            assert!(follow_up);
        }
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["outcome", "walkthrough", "--json-mode", "-q"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Walkthrough)));
    assert!(cli.json_mode);
    assert!(cli.quiet);
}

#[test]
fn test_run_requires_value() {
    assert!(Cli::try_parse_from(["outcome", "run"]).is_err());
}

// =============================================================================
// CONFIG TESTS
// =============================================================================

#[test]
fn test_config_file_loads() {
    let file = config_file(
        r#"
        [output]
        format = "json"
        banner = false

        [walkthrough]
        success_value = "FINE"
        "#,
    );

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.banner);
    assert_eq!(config.walkthrough.success_value, "FINE");
    assert_eq!(config.walkthrough.failed_value, "THIS OPERATION FAILED!");
}

#[test]
fn test_missing_config_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = AppConfig::load(&missing).unwrap_err();
    assert!(matches!(err, AppError::ConfigRead { .. }));
}

#[test]
fn test_malformed_config_file_is_parse_error() {
    let file = config_file("[output\nformat = ");

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, AppError::ConfigParse { .. }));
    assert!(err.to_string().starts_with("Invalid config"));
}

#[test]
fn test_oversized_config_file_is_read_error() {
    let mut contents = String::from("[walkthrough]\nsuccess_value = \"");
    contents.push_str(&"x".repeat(1024 * 1024 + 1));
    contents.push_str("\"\n");
    let file = config_file(&contents);

    let err = AppConfig::load(file.path()).unwrap_err();
    match err {
        AppError::ConfigRead { reason, .. } => assert!(reason.contains("exceeds maximum")),
        other => panic!("expected ConfigRead, got {other:?}"),
    }
}

// =============================================================================
// FLAG OVERRIDE TESTS
// =============================================================================

#[test]
fn test_json_mode_overrides_config_format() {
    let file = config_file("[output]\nformat = \"text\"\nbanner = true\n");
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["outcome", "-c", path.as_str(), "--json-mode"]).unwrap();
    let config = resolve_config(&cli).unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.banner);
}

#[test]
fn test_config_format_kept_without_flag() {
    let file = config_file("[output]\nformat = \"json\"\n");
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["outcome", "-c", path.as_str()]).unwrap();
    let config = resolve_config(&cli).unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_quiet_suppresses_banner() {
    let cli = Cli::try_parse_from(["outcome", "-q"]).unwrap();
    assert!(!resolve_config(&cli).unwrap().output.banner);

    let cli = Cli::try_parse_from(["outcome"]).unwrap();
    assert!(resolve_config(&cli).unwrap().output.banner);
}

#[test]
fn test_config_banner_false_suppresses_banner() {
    let file = config_file("[output]\nbanner = false\n");
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["outcome", "--config", path.as_str()]).unwrap();
    let config = resolve_config(&cli).unwrap();

    assert!(!config.output.banner);
    assert_eq!(config.output.format, OutputFormat::Text);
}

// =============================================================================
// EXECUTION TESTS
// =============================================================================

#[test]
fn test_commands_succeed_in_both_formats() {
    let mut config = AppConfig::default();
    assert!(cmd_walkthrough(&config).is_ok());

    config.output.format = OutputFormat::Json;
    assert!(cmd_walkthrough(&config).is_ok());
}

#[test]
fn test_failed_chain_is_not_a_command_error() {
    let config = AppConfig::default();
    let request = ChainRequest {
        value: "BROKEN".to_string(),
        fail: true,
        wrappers: vec!["X".to_string()],
        follow_up: true,
    };

    assert!(cmd_run(&config, &request).is_ok());
}

#[test]
fn test_execute_with_config_file() {
    let file = config_file("[output]\nbanner = false\n");
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["outcome", "--config", path.as_str(), "run", "v"]).unwrap();
    assert!(execute(cli).is_ok());
}

#[test]
fn test_execute_with_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml").to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["outcome", "-c", path.as_str()]).unwrap();
    assert!(matches!(execute(cli), Err(AppError::ConfigRead { .. })));
}
