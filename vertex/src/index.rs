//! Index element types.

use bytemuck::Pod;

/// Element type of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexDataType {
    /// 16-bit unsigned integers (max index 65535).
    #[default]
    Uint16,
    /// 32-bit unsigned integers.
    Uint32,
}

impl IndexDataType {
    /// Get the size in bytes of each index.
    pub const fn size(self) -> usize {
        match self {
            Self::Uint16 => size_of::<u16>(),
            Self::Uint32 => size_of::<u32>(),
        }
    }

    /// Largest vertex index representable by this type.
    pub const fn max_value(self) -> usize {
        match self {
            Self::Uint16 => u16::MAX as usize,
            Self::Uint32 => u32::MAX as usize,
        }
    }

    /// Choose the narrowest type able to store `max_vertex_index`.
    ///
    /// Anything above `u16::MAX` uses [`IndexDataType::Uint32`], which is assumed
    /// to cover every supported vertex count.
    pub const fn from_max(max_vertex_index: usize) -> Self {
        if max_vertex_index > u16::MAX as usize {
            Self::Uint32
        } else {
            Self::Uint16
        }
    }
}

/// Size in bytes of one index of an optional type; `None` means no index buffer.
pub const fn index_data_size(index_type: Option<IndexDataType>) -> usize {
    match index_type {
        Some(index_type) => index_type.size(),
        None => 0,
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An integer type that index buffers can be written in.
///
/// Implemented for `u16` and `u32` only.
pub trait IndexElement: Pod + Eq + Ord + sealed::Sealed {
    /// The matching [`IndexDataType`].
    const INDEX_TYPE: IndexDataType;

    /// Convert from `usize`. The value must fit; out-of-range values are truncated.
    fn from_usize(value: usize) -> Self;

    /// Widen to `usize`.
    fn to_usize(self) -> usize;
}

impl IndexElement for u16 {
    const INDEX_TYPE: IndexDataType = IndexDataType::Uint16;

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as u16
    }

    #[inline(always)]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl IndexElement for u32 {
    const INDEX_TYPE: IndexDataType = IndexDataType::Uint32;

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as u32
    }

    #[inline(always)]
    fn to_usize(self) -> usize {
        self as usize
    }
}
