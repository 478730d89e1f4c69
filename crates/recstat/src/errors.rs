//! # Error Types

use std::path::PathBuf;

/// Errors from recstat operations.
#[derive(Debug, thiserror::Error)]
pub enum RecstatError {
    /// A label file line did not have the `name,"label"` shape.
    #[error("malformed label on line {line_no}: {reason}: {line:?}")]
    MalformedLabel {
        /// The 1-based line number.
        line_no: usize,

        /// The offending line.
        line: String,

        /// What was wrong with it.
        reason: &'static str,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target id type.
    #[error("token id {0} out of range")]
    TokenOutOfRange(u64),

    /// A character has no id in the vocabulary.
    #[error("character {0:?} is not in the vocabulary")]
    UnknownChar(char),

    /// A label does not fit the requested encoding length.
    #[error("label of {len} characters exceeds max length {max_len}")]
    LabelTooLong {
        /// The label length in characters.
        len: usize,

        /// The maximum label length.
        max_len: usize,
    },

    /// An image could not be opened or decoded.
    #[error("failed to load image {path:?}")]
    ImageLoad {
        /// The image path.
        path: PathBuf,

        /// The decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A path expected to be a directory was not.
    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (integer, vocab line, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for recstat operations.
pub type RSResult<T> = core::result::Result<T, RecstatError>;
