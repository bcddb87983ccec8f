//! Command-line interface implementation for the templater.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for the templater.
#[derive(Parser, Debug)]
#[command(author, version, about = "templater: render a template tree into a build directory", long_about = None)]
pub struct Args {
    /// Directory holding templates and static files
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Directory receiving rendered and copied files
    #[arg(value_name = "BUILD_DIR")]
    pub build_dir: Option<PathBuf>,

    /// Text encoding of the templates and rendered output:
    /// utf-8, ascii or latin-1 (default: utf-8)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Path to a JSON or YAML configuration file.
    /// Command-line values take precedence over values from the file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
