use super::*;
use std::path::Path;

#[test]
fn cli_parse_pagination() {
    match parse(&["urlscout", "pagination"]) {
        CliCommand::Pagination => {}
        _ => panic!("expected Pagination"),
    }
}

#[test]
fn cli_parse_files_default_dir() {
    match parse(&["urlscout", "files"]) {
        CliCommand::Files { dir } => assert!(dir.is_none()),
        _ => panic!("expected Files"),
    }
}

#[test]
fn cli_parse_files_with_dir() {
    match parse(&["urlscout", "files", "/srv/site/wp-content"]) {
        CliCommand::Files { dir } => {
            assert_eq!(dir.as_deref(), Some(Path::new("/srv/site/wp-content")))
        }
        _ => panic!("expected Files"),
    }
}

#[test]
fn cli_parse_discover() {
    match parse(&["urlscout", "discover"]) {
        CliCommand::Discover { json } => assert!(!json),
        _ => panic!("expected Discover"),
    }
    match parse(&["urlscout", "discover", "--json"]) {
        CliCommand::Discover { json } => assert!(json),
        _ => panic!("expected Discover --json"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["urlscout", "discover", "--config", "/tmp/site.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/site.toml")));
    let cli = Cli::try_parse_from(["urlscout", "--config", "a.toml", "pagination"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("a.toml")));
}
