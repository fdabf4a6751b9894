//! Failures of a single bmpfx run, tagged with the stage that failed.

use bmpfx_io::IoError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failed run, recovered from the `anyhow` chain to pick the exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not open {}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("could not write {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}
