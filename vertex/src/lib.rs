//! # RedLilium Vertex
//!
//! Vertex and index format metadata for RedLilium Engine's batched 2D
//! rendering:
//!
//! - [`CommonFormat`] - Fixed vertex layouts with their stride and [`AttribFlags`]
//! - [`IndexDataType`] - Index element width and selection by maximum index
//! - [`TriangleIndexMode`] - Strip/fan/quad expansion into triangle-list indices
//! - [`constants`] - Name lookup for attributes, index types and usages
//!
//! Everything here is pure and allocation-free apart from the name tables,
//! which are built once on first use and shared read-only between threads.

pub mod constants;
pub mod error;
pub mod format;
pub mod index;
pub mod profiling;
pub mod topology;
pub mod usage;

pub use constants::{ConstantTable, NamedConstant};
pub use error::{VertexError, VertexResult};
pub use format::{
    AttribFlags, Color, CommonFormat, PositionUv, PositionUv16Color, PositionUvColor,
    VertexAttribId,
};
pub use index::{IndexDataType, IndexElement, index_data_size};
pub use topology::{
    TriangleIndexMode, fill_index_bytes, fill_indices, fill_indices_u16, fill_indices_u32,
};
pub use usage::Usage;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version.
pub fn init() {
    log::info!("RedLilium Vertex v{} initialized", VERSION);
}

static_assertions::assert_impl_all!(CommonFormat: Send, Sync);
static_assertions::assert_impl_all!(TriangleIndexMode: Send, Sync);
