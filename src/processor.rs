//! The render and copy passes over a template tree.

use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    constants::TEMPLATE_SUFFIX,
    error::{Error, Result},
    ignore::IgnoreRules,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};

/// Outcome of a successful [`ensure_dir`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Creates `path` and any missing ancestors.
///
/// # Errors
/// * `Error::Fatal` for any failure other than the directory already existing,
///   including `path` existing as something other than a directory
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<DirStatus> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(DirStatus::AlreadyExists);
    }
    match fs::create_dir_all(path) {
        Ok(()) => {
            debug!("Created directory {}", path.display());
            Ok(DirStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(DirStatus::AlreadyExists)
        }
        Err(e) => Err(Error::Fatal(e.to_string())),
    }
}

/// Returns true if the file name marks a template.
pub fn is_template_name(name: &str) -> bool {
    name.ends_with(TEMPLATE_SUFFIX)
}

/// Name a template renders to: the template name without its trailing suffix.
/// Returns `None` for names that are not templates or leave no file name behind.
pub fn target_name(template_name: &str) -> Option<&str> {
    let target = template_name.strip_suffix(TEMPLATE_SUFFIX)?;
    if target.is_empty() || target.ends_with('/') {
        return None;
    }
    Some(target)
}

/// Mirrored layout: rendered files keep their relative directory under the build directory.
pub fn render_target_path<P: AsRef<Path>>(build_dir: P, target_name: &str) -> PathBuf {
    build_dir.as_ref().join(target_name)
}

/// Flat layout: copied files land directly in the build directory under their base name.
pub fn copy_target_path<P: AsRef<Path>, N: AsRef<OsStr>>(build_dir: P, file_name: N) -> PathBuf {
    build_dir.as_ref().join(file_name.as_ref())
}

/// Names of the files produced by one run, in processing order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rendered: Vec<String>,
    pub copied: Vec<String>,
}

/// Renders and copies a template tree into a build directory.
pub struct ProjectTemplater {
    config: Config,
    renderer: Box<dyn TemplateRenderer>,
    ignore: IgnoreRules,
}

impl ProjectTemplater {
    /// Creates a templater backed by a MiniJinja environment rooted at `config.root_dir`.
    ///
    /// # Errors
    /// * `Error::IgnoreError` if a configured ignore pattern is invalid
    pub fn new(config: Config) -> Result<Self> {
        let renderer = Box::new(MiniJinjaRenderer::new(&config.root_dir, config.encoding));
        Self::with_renderer(config, renderer)
    }

    /// Creates a templater using the given rendering engine.
    pub fn with_renderer(config: Config, renderer: Box<dyn TemplateRenderer>) -> Result<Self> {
        let ignore = IgnoreRules::new(&config.ignore)?;
        Ok(Self {
            config,
            renderer,
            ignore,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the render pass and then the copy pass.
    ///
    /// Stops at the first error; files written before it stay in place.
    ///
    /// # Errors
    /// * `Error::Fatal` if the build directory or a target directory cannot be created
    /// * `Error::TemplateError` if a template fails to load or render
    /// * `Error::IoError` if a file cannot be written or copied
    pub fn run(&self) -> Result<RunSummary> {
        let status = ensure_dir(&self.config.build_dir)?;
        debug!(
            "Build directory {} ({:?})",
            self.config.build_dir.display(),
            status
        );

        let mut summary = RunSummary::default();
        self.render_templates(&mut summary)?;
        self.copy_files(&mut summary)?;
        Ok(summary)
    }

    fn render_templates(&self, summary: &mut RunSummary) -> Result<()> {
        let context = serde_json::json!({});

        for name in self.renderer.list_templates()? {
            debug!("Discovered template '{}'", name);
            if !is_template_name(&name) {
                continue;
            }
            if self.renderer.template_path(&name).is_none() {
                debug!("Skipping '{}': no backing file", name);
                continue;
            }
            let Some(target_name) = target_name(&name) else {
                debug!("Skipping '{}': empty target name", name);
                continue;
            };

            let target_path = render_target_path(&self.config.build_dir, target_name);
            if let Some(parent) = target_path.parent() {
                ensure_dir(parent)?;
            }

            let output = self.renderer.render(&name, &context)?;
            fs::write(&target_path, self.config.encoding.encode(&output)?)?;

            println!("Rendered '{}'", target_name);
            summary.rendered.push(target_name.to_string());
        }
        Ok(())
    }

    fn copy_files(&self, summary: &mut RunSummary) -> Result<()> {
        let build_dir = fs::canonicalize(&self.config.build_dir)?;

        let walker = WalkDir::new(&self.config.root_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_build_dir(entry, &build_dir));

        for entry in walker {
            let entry = entry?;
            let source = entry.path();
            if !source.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let display_name = file_name.to_string_lossy();
            if is_template_name(&display_name) {
                continue;
            }
            if self.ignore.should_ignore_name(file_name) {
                debug!("Ignoring {}", source.display());
                continue;
            }

            let target_path = copy_target_path(&self.config.build_dir, file_name);
            fs::copy(source, &target_path)?;

            println!("Copied '{}'", display_name);
            summary.copied.push(display_name.into_owned());
        }
        Ok(())
    }
}

/// The copy walk never descends into the build directory when it sits inside the root.
fn is_build_dir(entry: &DirEntry, build_dir: &Path) -> bool {
    entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|path| path == build_dir)
}
