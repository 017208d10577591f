//! The fixed vertex binding layout.
//!
//! The rendering pipeline this loader feeds reads a fixed attribute
//! contract: position and normal interleaved in one buffer, color tightly
//! packed in a second.
//!
//! | slot | attribute | components | normalized | stride | offset |
//! |------|-----------|------------|------------|--------|--------|
//! | 0    | position  | 3 × f32    | no         | 24     | 0      |
//! | 1    | color     | 4 × f32    | no         | 0      | 0      |
//! | 2    | normal    | 3 × f32    | yes        | 24     | 12     |

/// Attribute slot the pipeline reads positions from.
pub const POSITION_SLOT: u32 = 0;
/// Attribute slot the pipeline reads colors from.
pub const COLOR_SLOT: u32 = 1;
/// Attribute slot the pipeline reads normals from.
pub const NORMAL_SLOT: u32 = 2;

/// Byte stride of one interleaved position+normal record (6 × f32).
const VERTEX_STRIDE: u32 = 24;
/// Byte offset of the normal within an interleaved record.
const NORMAL_OFFSET: u32 = 12;

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Number of components.
    pub fn components(&self) -> u32 {
        match self {
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }

    /// Size in bytes of this format.
    pub fn size(&self) -> u32 {
        self.components() * 4
    }
}

/// A single vertex attribute binding description.
///
/// `stride == 0` means tightly packed (records are `format.size()` apart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Attribute slot the pipeline binds this to.
    pub slot: u32,
    /// Data format.
    pub format: VertexAttributeFormat,
    /// Whether integer-to-float conversion normalizes the value.
    pub normalized: bool,
    /// Byte stride between consecutive records.
    pub stride: u32,
    /// Byte offset of this attribute within a record.
    pub offset: u32,
}

impl VertexAttribute {
    /// The position attribute of the interleaved vertex buffer.
    pub fn position() -> Self {
        Self {
            slot: POSITION_SLOT,
            format: VertexAttributeFormat::Float3,
            normalized: false,
            stride: VERTEX_STRIDE,
            offset: 0,
        }
    }

    /// The normal attribute of the interleaved vertex buffer.
    pub fn normal() -> Self {
        Self {
            slot: NORMAL_SLOT,
            format: VertexAttributeFormat::Float3,
            normalized: true,
            stride: VERTEX_STRIDE,
            offset: NORMAL_OFFSET,
        }
    }

    /// The color attribute of the tightly packed color buffer.
    pub fn color() -> Self {
        Self {
            slot: COLOR_SLOT,
            format: VertexAttributeFormat::Float4,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }
}
