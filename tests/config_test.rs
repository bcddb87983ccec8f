use std::fs;
use std::path::PathBuf;

use clap::Parser;
use templater::cli::Args;
use templater::config::{get_config, load_config, parse_config, Config};
use templater::encoding::Encoding;
use templater::error::Error;
use tempfile::TempDir;

fn args(list: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("templater").chain(list.iter().copied())).unwrap()
}

#[test]
fn test_parse_json_config() {
    let file = parse_config(r#"{"root_dir": "site", "encoding": "latin-1"}"#).unwrap();
    assert_eq!(file.root_dir, Some(PathBuf::from("site")));
    assert_eq!(file.build_dir, None);
    assert_eq!(file.encoding, Some(Encoding::Latin1));
    assert!(file.ignore.is_empty());
}

#[test]
fn test_parse_yaml_config() {
    let file = parse_config("build_dir: out\nignore:\n  - '*.bak'\n").unwrap();
    assert_eq!(file.build_dir, Some(PathBuf::from("out")));
    assert_eq!(file.ignore, vec!["*.bak".to_string()]);
}

#[test]
fn test_parse_invalid_config() {
    let result = parse_config("encoding: klingon\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));

    let result = parse_config("unknown_key: 1\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_load_config_resolves_relative_paths() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("templater.yaml");
    fs::write(&config_path, "root_dir: site\nbuild_dir: out\n").unwrap();

    let file = load_config(&config_path).unwrap();
    assert_eq!(file.root_dir, Some(temp_dir.path().join("site")));
    assert_eq!(file.build_dir, Some(temp_dir.path().join("out")));
}

#[test]
fn test_load_config_rejects_unknown_extension() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("templater.toml");
    fs::write(&config_path, "root_dir = 'site'\n").unwrap();

    assert!(matches!(load_config(&config_path), Err(Error::ConfigError(_))));
    assert!(matches!(
        load_config(temp_dir.path().join("missing.json")),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_get_config_from_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    let config = get_config(&args(&[root, "build", "-e", "ASCII"])).unwrap();
    assert_eq!(
        config,
        Config::new(temp_dir.path(), "build").with_encoding(Encoding::Ascii)
    );
}

#[test]
fn test_get_config_arguments_override_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("site")).unwrap();
    let config_path = temp_dir.path().join("templater.json");
    fs::write(
        &config_path,
        r#"{"root_dir": "site", "build_dir": "out", "encoding": "latin-1", "ignore": ["*.bak"]}"#,
    )
    .unwrap();
    let config_arg = config_path.to_str().unwrap();

    let config = get_config(&args(&["-c", config_arg])).unwrap();
    assert_eq!(config.root_dir, temp_dir.path().join("site"));
    assert_eq!(config.build_dir, temp_dir.path().join("out"));
    assert_eq!(config.encoding, Encoding::Latin1);
    assert_eq!(config.ignore, vec!["*.bak".to_string()]);

    let root = temp_dir.path().to_str().unwrap();
    let config = get_config(&args(&["-c", config_arg, "-e", "utf-8", root, "dist"])).unwrap();
    assert_eq!(config.root_dir, temp_dir.path());
    assert_eq!(config.build_dir, PathBuf::from("dist"));
    assert_eq!(config.encoding, Encoding::Utf8);
}

#[test]
fn test_get_config_errors() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    assert!(matches!(get_config(&args(&[])), Err(Error::ConfigError(_))));
    assert!(matches!(get_config(&args(&[root])), Err(Error::ConfigError(_))));
    assert!(matches!(
        get_config(&args(&[root, "build", "--encoding", "ebcdic"])),
        Err(Error::ConfigError(_))
    ));

    let missing = temp_dir.path().join("missing");
    assert!(matches!(
        get_config(&args(&[missing.to_str().unwrap(), "build"])),
        Err(Error::ConfigError(_))
    ));
}
