use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use templater::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("templater")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./site", "./build"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.root_dir, Some(PathBuf::from("./site")));
    assert_eq!(parsed.build_dir, Some(PathBuf::from("./build")));
    assert!(parsed.encoding.is_none());
    assert!(parsed.config.is_none());
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--encoding",
        "latin-1",
        "--config",
        "templater.yml",
        "--verbose",
        "./site",
        "./build",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.encoding.as_deref(), Some("latin-1"));
    assert_eq!(parsed.config, Some(PathBuf::from("templater.yml")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-e", "ascii", "-c", "t.json", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.encoding.as_deref(), Some("ascii"));
    assert_eq!(parsed.config, Some(PathBuf::from("t.json")));
    assert!(parsed.verbose);
    assert!(parsed.root_dir.is_none());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./site", "./build", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_help_lists_supported_encodings() {
    let help = Args::command().render_help().to_string();
    assert!(help.contains("utf-8"));
    assert!(help.contains("ascii"));
    assert!(help.contains("latin-1"));
}
