use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when filling a tree or writing it out.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The empty string was offered as a word.
    #[error("cannot add an empty word")]
    EmptyWord,

    /// The word holds a character outside `a`–`z` after lowercasing.
    #[error("cannot add {word:?}: {letter:?} is not a letter from a to z")]
    InvalidLetter {
        /// The rejected word, as given.
        word: String,
        /// The first character that is not a letter.
        letter: char,
    },

    /// A word list could not be read.
    #[error("failed to read word list {}", path.display())]
    Read {
        /// The word list that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A tree dump could not be written.
    #[error("failed to write tree to {}", path.display())]
    Write {
        /// The dump target that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Write {
            path: path.into(),
            source,
        }
    }
}
