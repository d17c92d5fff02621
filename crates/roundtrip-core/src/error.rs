// crates/roundtrip-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid number of arguments: expected {expected}, given {given}")]
    ArgumentCount { expected: usize, given: usize },

    /// `slot` is 1-indexed, counted after the program name.
    #[error("invalid value for argument at position {slot} ({name}): {reason} (got {value:?})")]
    ArgumentParse {
        slot: usize,
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("buffer size overflows: {type_size} * {element_count}")]
    BufferSizeOverflow { type_size: u32, element_count: u32 },

    #[error("cannot allocate {size} bytes aligned to {alignment}")]
    Allocation { size: usize, alignment: usize },

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl HarnessError {
    /// True for errors raised before any allocation or codec call.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            HarnessError::ArgumentCount { .. } | HarnessError::ArgumentParse { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("runtime init failed: {0}")]
    Init(String),

    #[error("compress failed: {0}")]
    Compress(String),

    #[error("decompress failed: {0}")]
    Decompress(String),

    #[error("decompressed {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
