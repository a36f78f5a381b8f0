//! Error types for vertex and index operations.

use thiserror::Error;

use crate::index::IndexDataType;
use crate::topology::TriangleIndexMode;

/// Errors reported by the checked entry points of this crate.
///
/// The per-frame index fill functions never return errors; they only
/// debug-assert their preconditions. These errors come from name parsing and
/// from [`fill_index_bytes`](crate::topology::fill_index_bytes).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    #[error("unknown {kind} name: {name:?}")]
    UnknownConstant { kind: &'static str, name: String },
    #[error("{mode:?} cannot be built from {vertex_count} vertices")]
    InvalidVertexCount {
        mode: TriangleIndexMode,
        vertex_count: usize,
    },
    #[error("index buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("vertex index {max_index} does not fit in {index_type}")]
    IndexOutOfRange {
        max_index: usize,
        index_type: IndexDataType,
    },
    #[error("index buffer is not aligned for {0}")]
    MisalignedBuffer(IndexDataType),
}

pub type VertexResult<T> = Result<T, VertexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VertexError::UnknownConstant {
            kind: "usage",
            name: "Static".to_string(),
        };
        assert_eq!(err.to_string(), "unknown usage name: \"Static\"");

        let err = VertexError::IndexOutOfRange {
            max_index: 70_000,
            index_type: IndexDataType::Uint16,
        };
        assert_eq!(err.to_string(), "vertex index 70000 does not fit in uint16");

        let err = VertexError::BufferTooSmall {
            required: 12,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "index buffer too small: need 12 bytes, got 8"
        );
    }
}
