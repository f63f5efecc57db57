use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by catalog lookups and rename planning.
///
/// Everything here rejects the whole call. Copy failures during an export are
/// recorded per entry in [`crate::ExportResult`] and never surface as `Err`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown convention '{label}' for player {player}")]
    UnknownConvention { player: String, label: String },

    #[error("selected file not found among sources: {}", .0.display())]
    UnknownSelection(PathBuf),

    #[error("invalid extension '{extension}' for {}: only .mp4 files can be renamed", .path.display())]
    InvalidExtension { path: PathBuf, extension: String },

    #[error("invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("convention suffix must not be empty")]
    EmptySuffix,

    #[error("invalid suffix '{0}': path separators and NUL are not allowed")]
    InvalidSuffix(String),

    #[error("duplicate convention '{label}' for player {player}")]
    DuplicateConvention { player: String, label: String },

    #[error("duplicate player: {0}")]
    DuplicatePlayer(String),

    #[error("convention '{label}' is declared for {owner} but listed under {player}")]
    ForeignConvention {
        player: String,
        owner: String,
        label: String,
    },

    #[error("output directory {} is the input directory", .0.display())]
    OutputIsInput(PathBuf),

    #[error("invalid selection pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to read input directory {}: {source}", .path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    CopyFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{failed} of {total} files failed to export")]
    ExportIncomplete { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for errors caused by what the caller asked for rather than by the
    /// environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlayer(_)
                | Self::UnknownConvention { .. }
                | Self::UnknownSelection(_)
                | Self::InvalidExtension { .. }
                | Self::InvalidFileName(_)
                | Self::MissingArgument(_)
                | Self::EmptySuffix
                | Self::InvalidSuffix(_)
                | Self::OutputIsInput(_)
                | Self::InvalidGlob { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
