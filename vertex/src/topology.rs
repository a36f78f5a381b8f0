//! Triangle index generation.
//!
//! Vertex runs meant to be drawn as strips, fans or quad lists are expanded
//! into plain triangle-list indices, so every batch can be submitted with a
//! single triangle-list pipeline.
//!
//! The caller sizes the output with [`TriangleIndexMode::index_count`], picks
//! an index type wide enough for `vertex_start + vertex_count - 1` (see
//! [`IndexDataType::from_max`]) and then fills the buffer in place:
//!
//! ```ignore
//! let mode = TriangleIndexMode::Quads;
//! let mut indices = vec![0u16; mode.index_count(8)];
//! fill_indices_u16(mode, 0, 8, &mut indices);
//! assert_eq!(&indices[..6], &[0, 1, 2, 2, 1, 3]);
//! ```
//!
//! [`fill_indices`] only debug-asserts its preconditions. Use
//! [`fill_index_bytes`] when writing into raw buffer memory that should be
//! validated first.

use crate::error::{VertexError, VertexResult};
use crate::index::{IndexDataType, IndexElement};

/// How a contiguous run of vertices is assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleIndexMode {
    /// No index expansion.
    #[default]
    None,
    /// Triangle strip: each vertex after the first two adds one triangle.
    Strip,
    /// Triangle fan around the first vertex.
    Fan,
    /// Independent quads, four vertices each, split into two triangles.
    Quads,
}

impl TriangleIndexMode {
    /// Smallest vertex run this mode accepts.
    pub const fn min_vertex_count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Strip | Self::Fan => 2,
            Self::Quads => 4,
        }
    }

    /// Check whether `vertex_count` satisfies this mode's preconditions.
    ///
    /// Quads additionally require a multiple of four.
    pub const fn accepts_vertex_count(self, vertex_count: usize) -> bool {
        match self {
            Self::None | Self::Strip | Self::Fan => vertex_count >= self.min_vertex_count(),
            Self::Quads => vertex_count >= self.min_vertex_count() && vertex_count % 4 == 0,
        }
    }

    /// Number of triangle-list indices needed for `vertex_count` vertices.
    ///
    /// Strips and fans need `3 * (vertex_count - 2)`; runs shorter than two
    /// vertices yield 0. Quads need six indices per complete quad, so trailing
    /// vertices that do not form a whole quad are ignored. Counts too large for
    /// `usize` saturate at `usize::MAX`.
    pub const fn index_count(self, vertex_count: usize) -> usize {
        match self {
            Self::None => 0,
            Self::Strip | Self::Fan => vertex_count.saturating_sub(2).saturating_mul(3),
            Self::Quads => (vertex_count / 4).saturating_mul(6),
        }
    }
}

/// Write triangle-list indices for a run of `vertex_count` vertices starting
/// at `vertex_start` into `indices`.
///
/// Exactly `mode.index_count(vertex_count)` elements are written at the front
/// of `indices`; anything past that is left untouched.
///
/// # Panics
///
/// Panics if `indices` is shorter than the required index count. In debug
/// builds it also panics when `vertex_count` is invalid for `mode` or when the
/// last referenced vertex does not fit in `T`.
#[inline]
pub fn fill_indices<T: IndexElement>(
    mode: TriangleIndexMode,
    vertex_start: T,
    vertex_count: usize,
    indices: &mut [T],
) {
    let count = mode.index_count(vertex_count);
    let start = vertex_start.to_usize();

    debug_assert!(
        mode.accepts_vertex_count(vertex_count),
        "{mode:?} cannot be built from {vertex_count} vertices"
    );
    debug_assert!(
        vertex_count == 0
            || start
                .checked_add(vertex_count - 1)
                .is_some_and(|last| last <= T::INDEX_TYPE.max_value()),
        "vertex range {start}..{} does not fit in {}",
        start.saturating_add(vertex_count),
        T::INDEX_TYPE,
    );
    debug_assert!(
        indices.len() >= count,
        "index buffer holds {} indices, {count} required",
        indices.len()
    );

    let indices = &mut indices[..count];

    match mode {
        TriangleIndexMode::None => {}
        TriangleIndexMode::Strip => {
            // Odd triangles swap their last two vertices to keep the winding.
            for (i, triangle) in indices.chunks_exact_mut(3).enumerate() {
                let odd = i & 1;
                let v = start + i;
                triangle[0] = T::from_usize(v);
                triangle[1] = T::from_usize(v + 1 + odd);
                triangle[2] = T::from_usize(v + 2 - odd);
            }
        }
        TriangleIndexMode::Fan => {
            let pivot = T::from_usize(start);
            for (i, triangle) in indices.chunks_exact_mut(3).enumerate() {
                let v = start + i + 2;
                triangle[0] = pivot;
                triangle[1] = T::from_usize(v - 1);
                triangle[2] = T::from_usize(v);
            }
        }
        TriangleIndexMode::Quads => {
            // 0---2
            // | / |
            // 1---3
            for (quad, out) in indices.chunks_exact_mut(6).enumerate() {
                let base = start + quad * 4;
                out[0] = T::from_usize(base);
                out[1] = T::from_usize(base + 1);
                out[2] = T::from_usize(base + 2);

                out[3] = T::from_usize(base + 2);
                out[4] = T::from_usize(base + 1);
                out[5] = T::from_usize(base + 3);
            }
        }
    }
}

/// [`fill_indices`] for 16-bit index buffers.
pub fn fill_indices_u16(
    mode: TriangleIndexMode,
    vertex_start: u16,
    vertex_count: usize,
    indices: &mut [u16],
) {
    fill_indices(mode, vertex_start, vertex_count, indices);
}

/// [`fill_indices`] for 32-bit index buffers.
pub fn fill_indices_u32(
    mode: TriangleIndexMode,
    vertex_start: u32,
    vertex_count: usize,
    indices: &mut [u32],
) {
    fill_indices(mode, vertex_start, vertex_count, indices);
}

/// Validate and fill a raw index buffer of the given element type.
///
/// `bytes` is reinterpreted as `u16` or `u32` elements depending on
/// `index_type`, so it must be aligned to the element size. Returns the number
/// of indices written.
pub fn fill_index_bytes(
    mode: TriangleIndexMode,
    index_type: IndexDataType,
    vertex_start: usize,
    vertex_count: usize,
    bytes: &mut [u8],
) -> VertexResult<usize> {
    crate::profile_scope!("fill_index_bytes");

    if !mode.accepts_vertex_count(vertex_count) {
        log::warn!("Rejected index fill: {mode:?} with {vertex_count} vertices");
        return Err(VertexError::InvalidVertexCount { mode, vertex_count });
    }

    let count = mode.index_count(vertex_count);
    if count == 0 {
        return Ok(0);
    }

    let last = vertex_start.checked_add(vertex_count - 1);
    if !last.is_some_and(|last| last <= index_type.max_value()) {
        let max_index = last.unwrap_or(usize::MAX);
        log::warn!("Rejected index fill: vertex {max_index} does not fit in {index_type}");
        return Err(VertexError::IndexOutOfRange {
            max_index,
            index_type,
        });
    }

    let required = count.checked_mul(index_type.size()).unwrap_or(usize::MAX);
    if bytes.len() < required {
        log::warn!(
            "Rejected index fill: buffer holds {} bytes, {required} required",
            bytes.len()
        );
        return Err(VertexError::BufferTooSmall {
            required,
            actual: bytes.len(),
        });
    }

    let bytes = &mut bytes[..required];
    match index_type {
        IndexDataType::Uint16 => {
            let indices: &mut [u16] = bytemuck::try_cast_slice_mut(bytes)
                .map_err(|_| VertexError::MisalignedBuffer(index_type))?;
            fill_indices_u16(mode, vertex_start as u16, vertex_count, indices);
        }
        IndexDataType::Uint32 => {
            let indices: &mut [u32] = bytemuck::try_cast_slice_mut(bytes)
                .map_err(|_| VertexError::MisalignedBuffer(index_type))?;
            fill_indices_u32(mode, vertex_start as u32, vertex_count, indices);
        }
    }

    log::trace!("Filled {count} {index_type} indices for {mode:?}");
    Ok(count)
}
