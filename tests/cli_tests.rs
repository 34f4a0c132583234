use std::path::PathBuf;

use clap::Parser;
use ui_codegen::cli::config::{
    AppConfig, Cli, Commands, DEFAULT_OUTPUT_PATH, load_config, parse_config,
};
use ui_codegen::element::naming::DEFAULT_PREFIXES;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_bind_minimal() {
    let cli = Cli::parse_from(["ui-codegen", "bind", "--tree", "ui.yaml"]);
    match cli.command {
        Commands::Bind { input } => {
            assert_eq!(input.tree, PathBuf::from("ui.yaml"));
            assert!(input.roots.is_empty());
        }
        _ => panic!("Expected Bind command"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(cli.output.is_none());
}

#[test]
fn cli_parse_bind_with_roots() {
    let cli = Cli::parse_from([
        "ui-codegen",
        "bind",
        "--tree",
        "ui.json",
        "--root",
        "ShopUI",
        "--root",
        "BagUI",
    ]);
    match cli.command {
        Commands::Bind { input } => {
            assert_eq!(input.roots, vec!["ShopUI", "BagUI"]);
        }
        _ => panic!("Expected Bind command"),
    }
}

#[test]
fn cli_parse_logic_force() {
    let cli = Cli::parse_from(["ui-codegen", "logic", "--tree", "ui.yaml", "--force"]);
    match cli.command {
        Commands::Logic { force, .. } => assert!(force),
        _ => panic!("Expected Logic command"),
    }

    let cli = Cli::parse_from(["ui-codegen", "logic", "--tree", "ui.yaml"]);
    match cli.command {
        Commands::Logic { force, .. } => assert!(!force),
        _ => panic!("Expected Logic command"),
    }
}

#[test]
fn cli_parse_all_with_globals() {
    let cli = Cli::parse_from([
        "ui-codegen",
        "-vv",
        "all",
        "--tree",
        "ui.yaml",
        "--output",
        "Gen/UI",
        "--config",
        "custom.yaml",
    ]);
    assert!(matches!(cli.command, Commands::All { .. }));
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output.as_deref(), Some("Gen/UI"));
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

#[test]
fn cli_parse_preview_requires_root() {
    let cli = Cli::parse_from(["ui-codegen", "preview", "--tree", "ui.yaml", "--root", "ShopUI"]);
    match cli.command {
        Commands::Preview { tree, root } => {
            assert_eq!(tree, PathBuf::from("ui.yaml"));
            assert_eq!(root, "ShopUI");
        }
        _ => panic!("Expected Preview command"),
    }

    assert!(Cli::try_parse_from(["ui-codegen", "preview", "--tree", "ui.yaml"]).is_err());
}

#[test]
fn cli_rejects_missing_tree() {
    assert!(Cli::try_parse_from(["ui-codegen", "bind"]).is_err());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);
    assert_eq!(config.naming.prefixes.len(), DEFAULT_PREFIXES.len());
    assert!(config.trace.file.is_none());
}

#[test]
fn config_partial_yaml_fills_defaults() {
    let config = parse_config("output:\n  path: Gen/UI\n").unwrap();
    assert_eq!(config.output.path, "Gen/UI");
    assert_eq!(config.naming.prefixes[0], "Btn");

    let config = parse_config("naming:\n  prefixes: [ui]\ntrace:\n  file: journal.jsonl\n").unwrap();
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);
    assert!(config.naming_convention().is_valid_name("uiClose"));
    assert_eq!(config.trace.file.as_deref(), Some("journal.jsonl"));
}

#[test]
fn config_empty_file_is_default() {
    let config = parse_config("   \n").unwrap();
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);
}

#[test]
fn load_config_missing_or_malformed_falls_back() {
    let config = load_config(Some("/definitely/not/here.yaml"));
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "output: [not, a, map").unwrap();
    let config = load_config(path.to_str());
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);

    let good = dir.path().join("good.yaml");
    std::fs::write(&good, "output:\n  path: Custom\n").unwrap();
    assert_eq!(load_config(good.to_str()).output.path, "Custom");
}

#[test]
fn cli_output_overrides_config() {
    let config = parse_config("output:\n  path: FromFile\n")
        .unwrap()
        .with_output_override(Some("FromCli"));
    assert_eq!(config.output.path, "FromCli");

    let config = AppConfig::default().with_output_override(None);
    assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);
}
