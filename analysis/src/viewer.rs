use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info, warn};

/// How a rendered figure is put in front of the user
///
/// Every variant except `None` blocks until the figure has been dismissed, so figures
/// are shown strictly one after another.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum ViewerConfig {
    /// hand the figure to an opener and wait for Enter on stdin
    Prompt {
        #[serde(default = "default_opener")]
        open: Option<PathBuf>,
    },
    /// run a viewer with the figure path appended and wait for it to exit
    Exec {
        exec: PathBuf,
        #[serde(default)]
        params: Vec<String>,
    },
    /// render only
    None,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::Prompt {
            open: default_opener(),
        }
    }
}

impl ViewerConfig {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn show(&self, title: &str, figure: &Path) -> Result<(), AnalysisError> {
        match self {
            Self::Prompt { open } => {
                if let Some(opener) = open {
                    match Command::new(opener).arg(figure).status() {
                        Ok(status) if !status.success() => {
                            warn!("Opener {opener:?} exited with {status}, figure is at {figure:?}")
                        }
                        Ok(_) => {}
                        Err(error) => {
                            warn!(error = ?error, "Failed to start opener {opener:?}, figure is at {figure:?}")
                        }
                    }
                }

                // same stream as the log output so the two never interleave mid-line
                wait_for_enter(title, figure, &mut io::stderr(), &mut io::stdin().lock())
            }
            Self::Exec { exec, params } => {
                debug!("Waiting on viewer {exec:?} for {figure:?}");

                let status = Command::new(exec)
                    .args(params)
                    .arg(figure)
                    .status()
                    .map_err(AnalysisError::Viewer)?;

                if !status.success() {
                    warn!("Viewer {exec:?} exited with {status}");
                }

                Ok(())
            }
            Self::None => {
                info!("Rendered {title}");

                Ok(())
            }
        }
    }
}

/// write the prompt to `output` and block until a line (or EOF) arrives on `input`
pub fn wait_for_enter<W: Write, R: BufRead>(
    title: &str,
    figure: &Path,
    output: &mut W,
    input: &mut R,
) -> Result<(), AnalysisError> {
    write!(output, "{title} ({}) - press Enter to continue ", figure.display())
        .and_then(|_| output.flush())
        .map_err(AnalysisError::Viewer)?;

    // EOF counts as dismissal, otherwise piping into the binary would hang
    let mut line = String::new();
    input.read_line(&mut line).map_err(AnalysisError::Viewer)?;

    Ok(())
}

fn default_opener() -> Option<PathBuf> {
    Some(PathBuf::from("xdg-open"))
}
