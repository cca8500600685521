//! Template rendering: the gateway's configuration step, also usable on its own.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{AppError, Environment, TemplateRenderer, VariableFilter};
use crate::ports::Filesystem;

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub template: PathBuf,
    /// Destination file. `None` returns the rendered bytes instead.
    pub output: Option<PathBuf>,
    /// Substitute only these variables. Empty substitutes all.
    pub variables: Vec<String>,
}

/// Result of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Written { path: PathBuf },
    Rendered(Vec<u8>),
}

pub fn execute<F: Filesystem>(
    filesystem: &F,
    env: &Environment,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let filter = VariableFilter::from_names(options.variables.iter().cloned());
    let rendered = render_template(filesystem, env, &options.template, filter)?;

    match &options.output {
        Some(path) => {
            write_rendered(filesystem, path, &rendered)?;
            Ok(RenderOutcome::Written { path: path.clone() })
        }
        None => Ok(RenderOutcome::Rendered(rendered)),
    }
}

/// Read `template` and substitute placeholders from `env`.
pub(crate) fn render_template<F: Filesystem>(
    filesystem: &F,
    env: &Environment,
    template: &Path,
    filter: VariableFilter,
) -> Result<Vec<u8>, AppError> {
    let content = filesystem
        .read(template)
        .map_err(|source| AppError::TemplateRead { path: template.to_path_buf(), source })?;

    let renderer = TemplateRenderer::new(env).with_filter(filter);
    for name in renderer.unset_variables(&content) {
        warn!(variable = %name, template = %template.display(), "variable is unset, substituting empty string");
    }
    Ok(renderer.render(&content))
}

/// Overwrite `output` with the rendered content.
pub(crate) fn write_rendered<F: Filesystem>(
    filesystem: &F,
    output: &Path,
    content: &[u8],
) -> Result<(), AppError> {
    filesystem
        .write(output, content)
        .map_err(|source| AppError::ConfigWrite { path: output.to_path_buf(), source })?;
    info!(path = %output.display(), "wrote rendered configuration");
    Ok(())
}
