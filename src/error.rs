//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::picking::PickId;

/// Errors produced by the colorpick crate.
#[derive(Debug)]
pub enum PickError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Mapping or polling the readback staging buffer failed.
    Readback(String),
    /// A readback destination did not match the target's byte size.
    BufferSize {
        /// Bytes required for the full target.
        expected: usize,
        /// Bytes supplied by the caller.
        actual: usize,
    },
    /// The picker was used after [`destroy`](crate::picking::Picker::destroy).
    Destroyed,
    /// A record with this ID is already in the picking scene.
    DuplicateId(PickId),
    /// Every encodable pick ID has been handed out.
    IdSpaceExhausted,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Readback(msg) => write!(f, "pixel readback failed: {msg}"),
            Self::BufferSize { expected, actual } => write!(
                f,
                "readback buffer is {actual} bytes, target needs {expected}"
            ),
            Self::Destroyed => write!(f, "picker has been destroyed"),
            Self::DuplicateId(id) => {
                write!(f, "pick id {id} is already in the picking scene")
            }
            Self::IdSpaceExhausted => write!(f, "no pick ids left to assign"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for PickError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
