use crate::convert::ConversionRequest;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("{} not found: {}", program, source))]
    NotFound { program: String, source: which::Error },
    #[snafu(display("failed to launch {}: {}", program, source))]
    Launch {
        program: String,
        source: std::io::Error,
    },
    /// The renderer ran but exited unsuccessfully. The message is the last
    /// line it printed on stderr, which holds the exception text after any
    /// warnings and traceback.
    #[snafu(display("{}", describe_failure(program, code, stderr)))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    #[snafu(display("failed to write {}: {}", path.display(), source))]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn describe_failure(program: &str, code: &Option<i32>, stderr: &str) -> String {
    if let Some(line) = stderr.lines().map(str::trim).filter(|line| !line.is_empty()).last() {
        return line.to_string();
    }
    match code {
        Some(code) => format!("{} exited with code {}", program, code),
        None => format!("{} was terminated by a signal", program),
    }
}

/// Turns an HTML file into a PDF at `request.output`.
///
/// Implementations must not leave anything at the output path when they fail.
pub trait Renderer {
    fn render(&self, request: &ConversionRequest) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Executable name looked up on `PATH`, or a full path to it.
    pub program: String,
    /// Passed to the program before the generated arguments.
    pub extra_args: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "weasyprint".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Renders through the `weasyprint` command-line program.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    program: String,
    extra_args: Vec<String>,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}

impl WeasyPrint {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            program: config.program.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn locate(&self) -> Result<PathBuf, RenderError> {
        which::which(&self.program).context(NotFoundSnafu {
            program: &self.program,
        })
    }

    fn command(&self, executable: &Path, request: &ConversionRequest, target: &Path) -> Command {
        let mut command = Command::new(executable);
        command.args(&self.extra_args);
        command.arg("--base-url").arg(&request.base_dir);
        for stylesheet in &request.stylesheets {
            command.arg("--stylesheet").arg(stylesheet);
        }
        command.arg(&request.html).arg(target);
        command
    }
}

impl Renderer for WeasyPrint {
    fn render(&self, request: &ConversionRequest) -> Result<(), RenderError> {
        let executable = self.locate()?;

        // Render next to the destination and move into place on success, so a
        // failed run never clobbers or creates the destination file.
        let out_dir = request
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let target = tempfile::Builder::new()
            .prefix(".pdfdrop-")
            .suffix(".pdf")
            .tempfile_in(out_dir)
            .context(OutputSnafu {
                path: &request.output,
            })?
            .into_temp_path();

        tracing::info!(
            program = %executable.display(),
            html = %request.html.display(),
            output = %request.output.display(),
            stylesheets = request.stylesheets.len(),
            "Rendering PDF"
        );

        let output = self
            .command(&executable, request, &target)
            .output()
            .context(LaunchSnafu {
                program: &self.program,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(code = ?output.status.code(), %stderr, "Renderer exited unsuccessfully");
            return FailedSnafu {
                program: &self.program,
                code: output.status.code(),
                stderr,
            }
            .fail();
        }

        target
            .persist(&request.output)
            .map_err(|e| e.error)
            .context(OutputSnafu {
                path: &request.output,
            })?;

        tracing::info!(output = %request.output.display(), "PDF written");
        Ok(())
    }
}
