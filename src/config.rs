//! Configuration handling for the templater.
//! Merges an optional JSON/YAML configuration file with command-line values
//! into the immutable [`Config`] a run is bound to.

use crate::cli::Args;
use crate::constants::CONFIG_EXTENSIONS;
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for a single templater run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding templates and static files
    pub root_dir: PathBuf,
    /// Destination root for all generated and copied output
    pub build_dir: PathBuf,
    /// Encoding of template sources and rendered output
    pub encoding: Encoding,
    /// Extra glob patterns excluding files from the copy pass
    pub ignore: Vec<String>,
}

impl Config {
    /// Creates a configuration with the default encoding and no extra ignore patterns.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(root_dir: P, build_dir: Q) -> Self {
        Self {
            root_dir: root_dir.into(),
            build_dir: build_dir.into(),
            encoding: Encoding::default(),
            ignore: Vec::new(),
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_ignore<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }
}

/// Contents of a configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub encoding: Option<Encoding>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(v) => Ok(v),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads a configuration file. Relative paths inside it are resolved
/// against the directory containing the file.
///
/// # Errors
/// * `Error::ConfigError` if the file is missing, has an unsupported extension or fails to parse
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ConfigFile> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    let extension = config_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if !CONFIG_EXTENSIONS.contains(&extension) {
        return Err(Error::ConfigError(format!(
            "Unsupported configuration file '{}' (expected one of: {})",
            config_path.display(),
            CONFIG_EXTENSIONS.join(", ")
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path)?;
    let mut file = parse_config(&content)?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    file.root_dir = file.root_dir.map(|p| base.join(p));
    file.build_dir = file.build_dir.map(|p| base.join(p));
    Ok(file)
}

/// Builds the run configuration from command-line arguments, falling back
/// to the configuration file for values not given on the command line.
///
/// # Errors
/// * `Error::ConfigError` if the root or build directory is missing, the
///   encoding is unknown, or the configuration file is invalid
pub fn get_config(args: &Args) -> Result<Config> {
    let file = match &args.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };

    let root_dir = args
        .root_dir
        .clone()
        .or(file.root_dir)
        .ok_or_else(|| Error::ConfigError("root directory is not set".to_string()))?;
    let build_dir = args
        .build_dir
        .clone()
        .or(file.build_dir)
        .ok_or_else(|| Error::ConfigError("build directory is not set".to_string()))?;
    let encoding = match &args.encoding {
        Some(label) => label.parse()?,
        None => file.encoding.unwrap_or_default(),
    };

    if !root_dir.is_dir() {
        return Err(Error::ConfigError(format!(
            "root directory '{}' does not exist",
            root_dir.display()
        )));
    }

    Ok(Config::new(root_dir, build_dir)
        .with_encoding(encoding)
        .with_ignore(file.ignore))
}
