//! Tests for add and list subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_add() {
    match parse(&[
        "vidcat",
        "add",
        "https://www.youtube.com/watch?v=ZxJ0A5xcqEI",
        "--name",
        "New Horse Shopping",
    ]) {
        CliCommand::Add { url, name, notes } => {
            assert_eq!(url, "https://www.youtube.com/watch?v=ZxJ0A5xcqEI");
            assert_eq!(name, "New Horse Shopping");
            assert!(notes.is_none());
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_with_notes() {
    match parse(&[
        "vidcat",
        "add",
        "https://www.youtube.com/watch?v=abc",
        "--name",
        "Trot",
        "--notes",
        "slow motion",
    ]) {
        CliCommand::Add { notes, .. } => assert_eq!(notes.as_deref(), Some("slow motion")),
        _ => panic!("expected Add with notes"),
    }
}

#[test]
fn cli_parse_add_requires_name() {
    assert!(Cli::try_parse_from(["vidcat", "add", "https://www.youtube.com/watch?v=abc"]).is_err());
}

#[test]
fn cli_parse_list() {
    match parse(&["vidcat", "list"]) {
        CliCommand::List { search, json } => {
            assert!(search.is_none());
            assert!(!json);
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_search_json() {
    match parse(&["vidcat", "list", "abc", "--json"]) {
        CliCommand::List { search, json } => {
            assert_eq!(search.as_deref(), Some("abc"));
            assert!(json);
        }
        _ => panic!("expected List with search"),
    }
}
