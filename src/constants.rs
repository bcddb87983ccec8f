//! Common constants used throughout the templater.

/// Suffix marking a file as a template; stripped from the rendered target name
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Template extensions whose output is HTML-escaped
pub const AUTOESCAPE_EXTENSIONS: [&str; 2] = ["html", "xml"];

/// Built-in ignore rule: editor backup files
pub const DEFAULT_IGNORE_PATTERNS: [&str; 1] = ["*~"];

/// Canonical labels of the accepted encodings
pub const SUPPORTED_ENCODINGS: [&str; 3] = ["utf-8", "ascii", "latin-1"];

/// Supported configuration file extensions
pub const CONFIG_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];
