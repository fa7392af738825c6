//! Error types for fixture generation
//!
//! Provides error handling for:
//! - Encoding text into a named charset (text → bytes)
//! - Strict decoding of fixture bytes (bytes → text)
//! - Writing fixtures to disk (bytes → file)
//! - Generation stage transitions
//! - Parsing fixture digests

use crate::stage::Stage;
use std::path::PathBuf;

/// Top-level error for a generator run
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// IO error while creating, writing, syncing or renaming a fixture
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text could not be represented in the target encoding
    #[error("encoding failed for {file_name}: {source}")]
    Encode {
        file_name: String,
        #[source]
        source: EncodeError,
    },

    /// Generator advanced past its final stage
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

impl FixtureError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create encoding error for a fixture file name
    pub fn encode_error(file_name: impl Into<String>, source: EncodeError) -> Self {
        Self::Encode {
            file_name: file_name.into(),
            source,
        }
    }

    /// True if the failure came from the filesystem rather than the text
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Errors during encoding (text → bytes)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A code point has no representation in the encoding
    #[error("character {character:?} (U+{code_point:04X}) at offset {offset} is not representable in {encoding}")]
    Unmappable {
        encoding: &'static str,
        character: char,
        code_point: u32,
        offset: usize,
    },

    /// Label does not name a supported encoding
    #[error("unsupported encoding label: '{0}'")]
    UnknownLabel(String),
}

/// Errors during strict decoding (bytes → text)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input holds a byte sequence that is malformed in the encoding
    #[error("malformed {encoding} input")]
    Malformed { encoding: &'static str },
}

/// Errors in the generation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// No successor exists
    #[error("no stage follows {0:?}")]
    Exhausted(Stage),
}

/// Errors parsing a digest from hex
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// Invalid digest length
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
