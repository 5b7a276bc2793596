use std::path::PathBuf;

use thiserror::Error;

/// Exit code for failures that have no dedicated code (clipboard, keystrokes, config, io).
pub const EXIT_FAILURE: u8 = 4;

/// Exit code for command-line usage errors. Kept apart from 2, which means "search found nothing".
pub const EXIT_USAGE: u8 = 64;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot search for '{0}': a search term is required")]
    InvalidSearchTarget(String),

    #[error("could not find '{0}'")]
    SearchNotFound(String),

    #[error("{} is not a directory and cannot be changed into", .0.display())]
    NotADirectory(PathBuf),

    #[error("no candidate was selected")]
    SelectionCancelled,

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("keystroke error: {0}")]
    Keystrokes(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// - 1: search requested without a search term
    /// - 2: search term not found
    /// - 3: change-directory target is not a directory
    /// - 4: anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidSearchTarget(_) => 1,
            Self::SearchNotFound(_) => 2,
            Self::NotADirectory(_) => 3,
            _ => EXIT_FAILURE,
        }
    }

    /// The flag that led to this error, shown in verbose mode.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Self::InvalidSearchTarget(_) | Self::SearchNotFound(_) | Self::SelectionCancelled => {
                Some("-w/--from-where")
            }
            Self::NotADirectory(_) => Some("-d/--change-directory"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
