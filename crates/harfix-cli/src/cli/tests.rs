use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_normalize_url() {
    match parse(&["harfix", "normalize-url", "/api/v1/users?b=1&a=2"]) {
        CliCommand::NormalizeUrl { url } => assert_eq!(url, "/api/v1/users?b=1&a=2"),
        _ => panic!("expected NormalizeUrl"),
    }
}

#[test]
fn cli_parse_normalize() {
    match parse(&["harfix", "normalize", "fixtures/users.har"]) {
        CliCommand::Normalize { path, write } => {
            assert_eq!(path, "fixtures/users.har");
            assert!(!write);
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_normalize_write() {
    match parse(&["harfix", "normalize", "users.har", "--write"]) {
        CliCommand::Normalize { write, .. } => assert!(write),
        _ => panic!("expected Normalize with write"),
    }
}

#[test]
fn cli_parse_init() {
    match parse(&["harfix", "init", "fixtures/new.har"]) {
        CliCommand::Init { path } => assert_eq!(path, "fixtures/new.har"),
        _ => panic!("expected Init"),
    }
}

#[test]
fn cli_parse_scenarios() {
    match parse(&["harfix", "scenarios", "fixtures"]) {
        CliCommand::Scenarios { dir } => assert_eq!(dir, "fixtures"),
        _ => panic!("expected Scenarios"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["harfix", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["harfix", "man"]), CliCommand::Man));
}

#[test]
fn cli_rejects_missing_args() {
    assert!(Cli::try_parse_from(["harfix", "normalize"]).is_err());
    assert!(Cli::try_parse_from(["harfix", "completions", "cmd.exe"]).is_err());
}

mod fixture_commands {
    use crate::cli::commands::{run_init, run_scenarios};
    use harfix_core::config::HarfixConfig;
    use harfix_core::har;
    use tempfile::tempdir;

    #[test]
    fn init_creates_default_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixtures").join("list-users.har");
        let cfg = HarfixConfig::default();

        run_init(&cfg, &path).unwrap();

        let doc = har::read_har_file(&path, &HarfixConfig::default().creator()).unwrap();
        assert!(doc.entries().is_empty());
        assert_eq!(doc.log.creator, cfg.creator());
        let (name, entries) = har::load_har_from_file(&path).unwrap();
        assert_eq!(name, "list-users");
        assert!(entries.is_empty());
    }

    #[test]
    fn init_leaves_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recorded.har");
        let existing = "{\"log\":{\"entries\":[]},\"keep\":true}\n";
        std::fs::write(&path, existing).unwrap();

        run_init(&HarfixConfig::default(), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), existing);
    }

    #[test]
    fn scenarios_on_empty_dir_is_ok() {
        let dir = tempdir().unwrap();
        run_scenarios(dir.path()).unwrap();
    }

    #[test]
    fn scenarios_rejects_broken_fixture() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("broken.har"), "{ not json").unwrap();
        assert!(run_scenarios(dir.path()).is_err());
    }

    #[test]
    fn scenarios_missing_dir_errors() {
        let dir = tempdir().unwrap();
        assert!(run_scenarios(&dir.path().join("absent")).is_err());
    }
}
