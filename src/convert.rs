use crate::render::{RenderError, Renderer};
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display("Please select or drop an HTML file"))]
    MissingInput,
    /// Displays exactly the renderer's message.
    #[snafu(display("{}", source))]
    RenderFailure { source: RenderError },
}

/// The paths collected by the pickers at the moment conversion is requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionInputs {
    pub html: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
    pub assets: Option<PathBuf>,
}

/// Everything a renderer needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub html: PathBuf,
    /// Relative references inside the HTML resolve against this directory.
    pub base_dir: PathBuf,
    pub stylesheets: Vec<PathBuf>,
    /// Informational only; renderers resolve assets through `base_dir`.
    pub assets_root: Option<PathBuf>,
    pub output: PathBuf,
}

impl ConversionRequest {
    pub fn new(html: &Path, stylesheet: Option<&Path>, assets_root: Option<&Path>, output: PathBuf) -> Self {
        Self {
            html: html.to_path_buf(),
            base_dir: base_dir_of(html).to_path_buf(),
            stylesheets: stylesheet.map(Path::to_path_buf).into_iter().collect(),
            assets_root: assets_root.map(Path::to_path_buf),
            output,
        }
    }
}

/// Directory containing `html`, or `.` for a bare file name.
pub fn base_dir_of(html: &Path) -> &Path {
    html.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Written(PathBuf),
    /// The user dismissed the output prompt.
    Cancelled,
}

/// Runs one conversion.
///
/// `prompt_output` is asked for the destination only once the inputs are
/// known to be usable; returning `None` aborts without error.
pub fn convert<R, P>(renderer: &R, inputs: &ConversionInputs, prompt_output: P) -> Result<Conversion, ConvertError>
where
    R: Renderer + ?Sized,
    P: FnOnce(&Path) -> Option<PathBuf>,
{
    let html = inputs
        .html
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConvertError::MissingInput)?;

    let Some(output) = prompt_output(html) else {
        tracing::debug!("Output prompt cancelled");
        return Ok(Conversion::Cancelled);
    };

    let request = ConversionRequest::new(html, inputs.stylesheet.as_deref(), inputs.assets.as_deref(), output);
    if let Some(assets) = &request.assets_root {
        tracing::debug!(
            assets = %assets.display(),
            base_dir = %request.base_dir.display(),
            "Assets folder is not passed to the renderer; references resolve against the HTML directory"
        );
    }

    renderer.render(&request).context(RenderFailureSnafu)?;
    Ok(Conversion::Written(request.output))
}
