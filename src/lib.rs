//! templater renders a tree of Jinja templates into a build directory and
//! copies every other file next to them, for scaffolding projects or static sites.

/// Command-line interface module for the templater
pub mod cli;

/// Run configuration, merged from the command line and an optional JSON/YAML file
pub mod config;

/// Common constants
pub mod constants;

/// Text encodings for template sources and rendered output
pub mod encoding;

/// Error types and handling for the templater
pub mod error;

/// Ignore rules applied to the copy pass
pub mod ignore;

/// Core orchestration: ensures directories, renders templates and copies files
pub mod processor;

/// Template discovery and rendering
pub mod renderer;
