//! Process exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success, `--help`, `--version` |
//! | 1 | unknown filter flag |
//! | 2 | more than one filter flag |
//! | 3 | any other usage error |
//! | 4 | input cannot be opened or read |
//! | 5 | output cannot be created or written |
//! | 6 | input is not a 24-bit uncompressed BMP |
//! | 7 | image does not fit in memory or in a BMP |

use crate::error::CliError;
use bmpfx_io::IoError;
use clap::error::ErrorKind;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Success = 0,
    InvalidFilter = 1,
    MultipleFilters = 2,
    Usage = 3,
    OpenInput = 4,
    CreateOutput = 5,
    UnsupportedFormat = 6,
    OutOfMemory = 7,
}

impl Exit {
    /// Maps a command-line parse failure.
    pub fn from_clap(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::Success,
            ErrorKind::UnknownArgument => Self::InvalidFilter,
            ErrorKind::ArgumentConflict => Self::MultipleFilters,
            _ => Self::Usage,
        }
    }

    /// Maps a failed run. Errors raised before any file is touched count as
    /// usage errors.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CliError>() {
            Some(e) => Self::from_cli_error(e),
            None => Self::Usage,
        }
    }

    fn from_cli_error(err: &CliError) -> Self {
        match err {
            CliError::OpenInput { .. } => Self::OpenInput,
            CliError::CreateOutput { .. } => Self::CreateOutput,
            CliError::Decode { source, .. } if source.is_resource_error() => Self::OutOfMemory,
            CliError::Decode { source, .. } if source.is_format_error() => Self::UnsupportedFormat,
            CliError::Decode { .. } => Self::OpenInput,
            CliError::Encode { source, .. } if source.is_resource_error() => Self::OutOfMemory,
            CliError::Encode {
                source: IoError::EncodeError(_),
                ..
            } => Self::OutOfMemory,
            CliError::Encode { .. } => Self::CreateOutput,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}
