//! templater's main application entry point.

use templater::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    processor::ProjectTemplater,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves configuration from arguments and the optional config file
/// 2. Builds the template environment
/// 3. Renders templates and copies static files into the build directory
fn run(args: Args) -> Result<()> {
    let config = get_config(&args)?;
    log::debug!("Using configuration {:?}", config);

    let templater = ProjectTemplater::new(config)?;
    let summary = templater.run()?;

    log::info!(
        "Rendered {} and copied {} file(s) into {}",
        summary.rendered.len(),
        summary.copied.len(),
        templater.config().build_dir.display()
    );
    Ok(())
}
