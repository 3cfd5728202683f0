use alloc::format;

use crate::error::PlanarError;

/// Maximum number of interleaved components per pixel.
pub const MAX_COMPONENTS: u8 = 4;

/// Byte order of an interleaved pixel group.
///
/// Only the explicit orders exist. Decoders that report a "platform default"
/// order must resolve it (see [`ByteOrder::native`]) before constructing a
/// [`PixelFormat`] — the format descriptor is the single source of truth for
/// endianness, and mixing it with a separate host-order report yields a wrong
/// alpha plane index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Components stored in declared order (big-endian pixel group).
    Big,
    /// Components stored reversed in memory (little-endian pixel group).
    Little,
}

impl ByteOrder {
    /// The host byte order, for resolving "platform default" reports.
    pub fn native() -> ByteOrder {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// Whether this is the little-endian order.
    pub fn is_little(&self) -> bool {
        matches!(self, ByteOrder::Little)
    }
}

/// Where the alpha component sits in the declared component order.
///
/// `First`/`Last` also describe opaque padding bytes (BGRX-style layouts):
/// a padding byte occupies the alpha position and is excluded from plane
/// transforms exactly like real alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaPosition {
    /// No alpha or padding component; every component carries color.
    None,
    /// Alpha (or padding) leads the component order.
    First,
    /// Alpha (or padding) trails the component order.
    Last,
}

/// Describes the memory layout of one interleaved pixel.
///
/// Immutable value type. `bits_per_component` is fixed at 8 for this crate;
/// `bits_per_pixel` must equal `bits_per_component * component_count`.
/// `premultiplied` records whether color is already scaled by alpha — it is
/// informational only and does not change how planes are processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormat {
    pub bits_per_component: u8,
    pub bits_per_pixel: u8,
    pub component_count: u8,
    pub byte_order: ByteOrder,
    pub alpha: AlphaPosition,
    pub premultiplied: bool,
}

impl PixelFormat {
    /// An 8-bit interleaved format with `component_count` components.
    pub fn interleaved8(
        component_count: u8,
        byte_order: ByteOrder,
        alpha: AlphaPosition,
    ) -> PixelFormat {
        PixelFormat {
            bits_per_component: 8,
            bits_per_pixel: component_count.wrapping_mul(8),
            component_count,
            byte_order,
            alpha,
            premultiplied: false,
        }
    }

    /// Non-premultiplied RGBA with alpha trailing the component order.
    pub fn rgba8(byte_order: ByteOrder) -> PixelFormat {
        Self::interleaved8(4, byte_order, AlphaPosition::Last)
    }

    /// Interleaved bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.component_count as usize
    }

    /// Check the descriptor fields for internal consistency.
    pub fn validate(&self) -> Result<(), PlanarError> {
        if self.bits_per_component != 8 {
            return Err(PlanarError::InvalidFormat(format!(
                "bits per component must be 8, got {}",
                self.bits_per_component
            )));
        }
        if self.component_count == 0 || self.component_count > MAX_COMPONENTS {
            return Err(PlanarError::UnsupportedComponentCount(self.component_count));
        }
        let expected = self.bits_per_component as u32 * self.component_count as u32;
        if u32::from(self.bits_per_pixel) != expected {
            return Err(PlanarError::InvalidFormat(format!(
                "bits per pixel {} does not match {} components of {} bits",
                self.bits_per_pixel, self.component_count, self.bits_per_component
            )));
        }
        if self.alpha != AlphaPosition::None && self.component_count < 2 {
            return Err(PlanarError::InvalidFormat(format!(
                "alpha requires at least 2 components, got {}",
                self.component_count
            )));
        }
        Ok(())
    }

    /// Which plane, in interleaved memory order, holds the alpha component.
    ///
    /// A little-endian pixel group stores its components reversed, so the
    /// declared position and the byte order together decide the memory-order
    /// index:
    ///
    /// | alpha   | byte order | index               |
    /// |---------|------------|---------------------|
    /// | `First` | `Big`      | 0                   |
    /// | `First` | `Little`   | `component_count-1` |
    /// | `Last`  | `Big`      | `component_count-1` |
    /// | `Last`  | `Little`   | 0                   |
    pub fn alpha_plane_index(&self) -> Option<usize> {
        let last = (self.component_count as usize).saturating_sub(1);
        match self.alpha {
            AlphaPosition::None => None,
            AlphaPosition::First => Some(if self.byte_order.is_little() { last } else { 0 }),
            AlphaPosition::Last => Some(if self.byte_order.is_little() { 0 } else { last }),
        }
    }
}
