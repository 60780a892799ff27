// src/error.rs
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures that stop a pipeline stage.
/// Per-field parse problems never surface here; they default or omit.
#[derive(Debug)]
pub enum PipelineError {
    /// Expected input file is not on disk (previous stage not run yet).
    MissingInput(PathBuf),
    /// Page source or session failure while collecting.
    Collection(String),
    /// The page loaded but no listing cards could be read.
    NoListings,
    Io(io::Error),
    Csv(csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::MissingInput(p) => {
                write!(f, "input file '{}' not found; run the previous stage first", p.display())
            }
            PipelineError::Collection(msg) => write!(f, "collection failed: {msg}"),
            PipelineError::NoListings => {
                write!(f, "no listings found on the page; the markup may have changed")
            }
            PipelineError::Io(e) => write!(f, "I/O error: {e}"),
            PipelineError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Io(e) => Some(e),
            PipelineError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        PipelineError::Io(e)
    }
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        PipelineError::Csv(e)
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        PipelineError::Collection(e.to_string())
    }
}
