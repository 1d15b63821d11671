use crate::collector::{collect, Registry};
use crate::context::{TemplateContext, TemplateOptions};
use crate::renderer::render_template;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};
use uxcore_manifest::{FileSystem, Manifest};

/// Errors that abort an emit run
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rendered template set together with the components it was built from
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub registry: Registry,
    pub xml: String,
}

impl GeneratedDocument {
    pub fn component_count(&self) -> usize {
        self.registry.len()
    }
}

/// Result of a completed emit run
#[derive(Debug, Clone, PartialEq)]
pub struct EmitSummary {
    pub component_count: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// Collect the manifest's components and render the whole template set
pub fn generate(manifest: &Manifest, options: &TemplateOptions) -> GeneratedDocument {
    let registry = collect(manifest, options);

    let mut ctx = TemplateContext::new();
    ctx.add(format!("<templateSet group=\"{}\">", options.group));
    for (key, descriptor) in &registry {
        ctx.add(render_template(key, descriptor, options));
    }
    ctx.add("</templateSet>");

    GeneratedDocument {
        registry,
        xml: ctx.get_output(),
    }
}

/// Generate the template set and write it to `output_path`, replacing any
/// previous file
#[instrument(skip(manifest, options, fs), fields(output = %output_path.display()))]
pub fn emit(
    manifest: &Manifest,
    options: &TemplateOptions,
    output_path: &Path,
    fs: &dyn FileSystem,
) -> Result<EmitSummary, EmitError> {
    let document = generate(manifest, options);

    fs.write(output_path, &document.xml)
        .map_err(|source| EmitError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!(
        components = document.component_count(),
        bytes = document.xml.len(),
        "Template set written"
    );

    Ok(EmitSummary {
        component_count: document.component_count(),
        output_path: output_path.to_path_buf(),
        bytes_written: document.xml.len(),
    })
}
