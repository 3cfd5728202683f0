//! # zenplanar
//!
//! Planar/interleaved pixel buffer conversion with per-plane lookup-table
//! transforms.
//!
//! An interleaved 8-bit image (ARGB, RGBA, BGRA, ...) is split into one
//! [`PlaneBuffer`] per component, a 256-entry [`LookupTable`] is applied to
//! every color plane, and the planes are reassembled into an interleaved
//! buffer. The plane holding alpha (or an opaque padding byte) is located
//! from the [`PixelFormat`] and copied through unchanged, so transparency is
//! never quantized.
//!
//! ## Alpha location
//!
//! Where alpha sits in memory depends on both the declared position and the
//! pixel group's byte order — a little-endian group stores its components
//! reversed. [`PixelFormat::alpha_plane_index`] resolves this once per
//! format. Only explicit byte orders are representable; resolve any
//! "platform default" report with [`ByteOrder::native`] before building a
//! format.
//!
//! ## Non-Goals
//!
//! - Decoding or encoding image files (pair this crate with a codec)
//! - Color-space conversion
//! - Bit depths other than 8 bits per component
//!
//! ## Usage
//!
//! ```
//! use zenplanar::{ByteOrder, PixelFormat, TransformRequest, Unstoppable};
//!
//! // 2x1 RGBA image from your decoder, alpha last, little-endian group
//! let format = PixelFormat::rgba8(ByteOrder::Little);
//! let pixels = [10u8, 80, 160, 255, 5, 76, 151, 0];
//!
//! let output = TransformRequest::quantize(75)
//!     .run(&pixels, 2, 1, 8, &format, Unstoppable)?;
//!
//! // Alpha lands in plane 0 for this format and passes through untouched.
//! assert_eq!(output.pixels(), &[10, 75, 150, 225, 5, 75, 150, 0]);
//! # Ok::<(), zenplanar::PlanarError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod error;
mod format;
mod limits;
mod lut;
mod pipeline;
mod plane;

// Re-exports
pub use convert::{deinterleave, interleave};
pub use enough::{Stop, Unstoppable};
pub use error::PlanarError;
pub use format::{AlphaPosition, ByteOrder, MAX_COMPONENTS, PixelFormat};
pub use limits::Limits;
pub use lut::LookupTable;
pub use pipeline::{TransformOutput, TransformRequest, transform_planes};
pub use plane::PlaneBuffer;
