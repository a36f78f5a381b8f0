//! Fixed vertex formats.
//!
//! This module provides:
//! - [`CommonFormat`] - The closed set of vertex layouts used by 2D batching
//! - [`AttribFlags`] - Which attribute channels a format carries
//! - [`VertexAttribId`] - Semantic channel identifiers
//! - The `#[repr(C)]` vertex records written into vertex buffers
//!
//! # Binary Layout
//!
//! Records are tightly packed, in field order, with no padding:
//!
//! | Format | Fields | Stride |
//! |---|---|---|
//! | [`CommonFormat::Position`] | `x, y: f32` | 8 |
//! | [`CommonFormat::Color`] | `r, g, b, a: u8` | 4 |
//! | [`CommonFormat::PositionUv`] | `x, y, s, t: f32` | 16 |
//! | [`CommonFormat::PositionUvColor`] | `x, y, s, t: f32`, color | 20 |
//! | [`CommonFormat::PositionUv16Color`] | `x, y: f32`, `s, t: u16`, color | 16 |
//!
//! The strides reported by [`CommonFormat::stride`] are checked against the
//! record sizes at compile time.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

bitflags! {
    /// Attribute channels present in a vertex format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttribFlags: u32 {
        /// 2D position.
        const POS = 1 << 0;
        /// Texture coordinates.
        const TEXCOORD = 1 << 1;
        /// Per-vertex color.
        const COLOR = 1 << 2;
        /// Color constant across the whole draw.
        const CONSTANT_COLOR = 1 << 3;
    }
}

impl Default for AttribFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Semantic identifier of a vertex attribute channel.
///
/// Names for configuration are registered in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribId {
    /// Vertex position (`"VertexPosition"`).
    Position,
    /// Texture coordinates (`"VertexTexCoord"`).
    TexCoord,
    /// Per-vertex color (`"VertexColor"`).
    Color,
    /// Draw-wide constant color (`"ConstantColor"`).
    ConstantColor,
}

impl VertexAttribId {
    /// Get the presence flag for this attribute.
    pub fn flag(self) -> AttribFlags {
        match self {
            Self::Position => AttribFlags::POS,
            Self::TexCoord => AttribFlags::TEXCOORD,
            Self::Color => AttribFlags::COLOR,
            Self::ConstantColor => AttribFlags::CONSTANT_COLOR,
        }
    }
}

/// 8-bit RGBA color, packed into 4 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Position + texcoord record ([`CommonFormat::PositionUv`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PositionUv {
    pub x: f32,
    pub y: f32,
    pub s: f32,
    pub t: f32,
}

/// Position + texcoord + color record ([`CommonFormat::PositionUvColor`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PositionUvColor {
    pub x: f32,
    pub y: f32,
    pub s: f32,
    pub t: f32,
    pub color: Color,
}

/// Position + 16-bit normalized texcoord + color record
/// ([`CommonFormat::PositionUv16Color`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PositionUv16Color {
    pub x: f32,
    pub y: f32,
    pub s: u16,
    pub t: u16,
    pub color: Color,
}

const_assert_eq!(size_of::<Color>(), 4);
const_assert_eq!(
    size_of::<PositionUv>(),
    size_of::<f32>() * 2 + size_of::<f32>() * 2
);
const_assert_eq!(
    size_of::<PositionUvColor>(),
    size_of::<f32>() * 2 + size_of::<f32>() * 2 + size_of::<Color>()
);
const_assert_eq!(
    size_of::<PositionUv16Color>(),
    size_of::<f32>() * 2 + size_of::<u16>() * 2 + size_of::<Color>()
);

/// A fixed, named vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommonFormat {
    /// No vertex data.
    #[default]
    None,
    /// Position only (`XYf`).
    Position,
    /// Color only (`RGBAub`).
    Color,
    /// Position + texcoord (`XYf_STf`).
    PositionUv,
    /// Position + texcoord + color (`XYf_STf_RGBAub`).
    PositionUvColor,
    /// Position + 16-bit texcoord + color (`XYf_STus_RGBAub`).
    PositionUv16Color,
}

impl CommonFormat {
    /// All formats, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Position,
        Self::Color,
        Self::PositionUv,
        Self::PositionUvColor,
        Self::PositionUv16Color,
    ];

    /// Get the size in bytes of one vertex. Returns 0 for [`CommonFormat::None`].
    pub const fn stride(self) -> usize {
        match self {
            Self::None => 0,
            Self::Position => size_of::<f32>() * 2,
            Self::Color => size_of::<u8>() * 4,
            Self::PositionUv => size_of::<PositionUv>(),
            Self::PositionUvColor => size_of::<PositionUvColor>(),
            Self::PositionUv16Color => size_of::<PositionUv16Color>(),
        }
    }

    /// Get the attribute channels this format carries.
    pub const fn flags(self) -> AttribFlags {
        match self {
            Self::None => AttribFlags::empty(),
            Self::Position => AttribFlags::POS,
            Self::Color => AttribFlags::COLOR,
            Self::PositionUv => AttribFlags::POS.union(AttribFlags::TEXCOORD),
            Self::PositionUvColor | Self::PositionUv16Color => AttribFlags::POS
                .union(AttribFlags::TEXCOORD)
                .union(AttribFlags::COLOR),
        }
    }

    /// Check if this format carries the given attribute.
    pub fn has_attribute(self, attribute: VertexAttribId) -> bool {
        self.flags().contains(attribute.flag())
    }
}

const_assert_eq!(CommonFormat::Position.stride(), 8);
const_assert_eq!(CommonFormat::PositionUvColor.stride(), 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stride() {
        assert_eq!(CommonFormat::None.stride(), 0);
        assert_eq!(CommonFormat::Position.stride(), 8);
        assert_eq!(CommonFormat::Color.stride(), 4);
        assert_eq!(CommonFormat::PositionUv.stride(), 16);
        assert_eq!(CommonFormat::PositionUvColor.stride(), 8 + 8 + 4);
        assert_eq!(CommonFormat::PositionUv16Color.stride(), 8 + 4 + 4);
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(CommonFormat::None.flags(), AttribFlags::empty());
        assert_eq!(CommonFormat::Position.flags(), AttribFlags::POS);
        assert_eq!(CommonFormat::Color.flags(), AttribFlags::COLOR);
        assert_eq!(
            CommonFormat::PositionUv.flags(),
            AttribFlags::POS | AttribFlags::TEXCOORD
        );
        assert_eq!(
            CommonFormat::PositionUv16Color.flags(),
            AttribFlags::POS | AttribFlags::TEXCOORD | AttribFlags::COLOR
        );
    }

    #[test]
    fn test_defined_formats_are_non_empty() {
        for format in CommonFormat::ALL {
            if format == CommonFormat::None {
                continue;
            }
            assert!(format.stride() > 0, "{format:?} has zero stride");
            assert!(!format.flags().is_empty(), "{format:?} has no attributes");
            assert!(!format.flags().contains(AttribFlags::CONSTANT_COLOR));
        }
    }

    #[test]
    fn test_has_attribute() {
        assert!(CommonFormat::PositionUv.has_attribute(VertexAttribId::TexCoord));
        assert!(!CommonFormat::PositionUv.has_attribute(VertexAttribId::Color));
        assert!(CommonFormat::Color.has_attribute(VertexAttribId::Color));
        assert!(!CommonFormat::None.has_attribute(VertexAttribId::Position));
    }

    #[test]
    fn test_record_bytes_are_packed() {
        let vertex = PositionUv16Color {
            x: 1.0,
            y: 2.0,
            s: 0x0102,
            t: 0xFFFF,
            color: Color::new(10, 20, 30, 40),
        };
        let bytes = bytemuck::bytes_of(&vertex);

        assert_eq!(bytes.len(), CommonFormat::PositionUv16Color.stride());
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
        assert_eq!(&bytes[8..10], &0x0102u16.to_ne_bytes());
        assert_eq!(&bytes[10..12], &[0xFF, 0xFF]);
        assert_eq!(&bytes[12..16], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_color_offset_in_float_record() {
        let vertex = PositionUvColor {
            color: Color::WHITE,
            ..Default::default()
        };
        let bytes = bytemuck::bytes_of(&vertex);
        assert_eq!(&bytes[..16], &[0u8; 16]);
        assert_eq!(&bytes[16..], &[255, 255, 255, 255]);
    }
}
