//! Template discovery and rendering for the templater.
//! Templates are loaded from the root directory by their `/`-separated
//! relative name and rendered with MiniJinja.
use crate::constants::{AUTOESCAPE_EXTENSIONS, TEMPLATE_SUFFIX};
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Lists every template name the engine can discover, in a stable order.
    fn list_templates(&self) -> Result<Vec<String>>;

    /// Resolves a template name to the file backing it, if there is one.
    fn template_path(&self, name: &str) -> Option<PathBuf>;

    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name as returned by `list_templates`
    /// * `context` - Context variables for rendering
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine bound to a root directory.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    root_dir: PathBuf,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that loads templates below `root_dir`, following
    /// symbolic links and decoding sources with `encoding`.
    pub fn new<P: AsRef<Path>>(root_dir: P, encoding: Encoding) -> Self {
        let root_dir = root_dir.as_ref().to_path_buf();
        let mut env = Environment::new();

        let loader_root = root_dir.clone();
        env.set_loader(move |name| load_source(&loader_root, encoding, name));
        env.set_auto_escape_callback(auto_escape_for);

        Self { env, root_dir }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn list_templates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root_dir) else {
                continue;
            };
            match template_name(relative) {
                Some(name) => names.push(name),
                None if relative
                    .as_os_str()
                    .to_string_lossy()
                    .ends_with(TEMPLATE_SUFFIX) =>
                {
                    return Err(Error::EncodingError(format!(
                        "template path '{}' is not valid UTF-8",
                        relative.display()
                    )));
                }
                None => debug!("Skipping non UTF-8 path {}", relative.display()),
            }
        }
        Ok(names)
    }

    fn template_path(&self, name: &str) -> Option<PathBuf> {
        safe_join(&self.root_dir, name).filter(|path| path.is_file())
    }

    /// # Errors
    /// * `Error::TemplateError` if the template cannot be loaded, parsed or rendered
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

/// Joins a relative path's components with `/`.
fn template_name(relative: &Path) -> Option<String> {
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Maps a template name below `base`, refusing names that could escape it.
fn safe_join(base: &Path, name: &str) -> Option<PathBuf> {
    let mut path = base.to_path_buf();
    for segment in name.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

fn load_source(
    root: &Path,
    encoding: Encoding,
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    let Some(path) = safe_join(root, name) else {
        return Ok(None);
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("could not read template '{}'", name),
            )
            .with_source(e))
        }
    };
    encoding.decode(&bytes).map(Some).map_err(|e| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not decode template '{}' as {}", name, encoding),
        )
        .with_source(e)
    })
}

/// Escapes HTML only for templates whose own extension is html or xml,
/// so `page.html.j2` renders unescaped while an included `partial.html` is escaped.
fn auto_escape_for(name: &str) -> AutoEscape {
    let escaped = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUTOESCAPE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        });
    if escaped {
        AutoEscape::Html
    } else {
        AutoEscape::None
    }
}
