//! Interleaved ↔ planar buffer conversion.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::PlanarError;
use crate::format::PixelFormat;
use crate::limits::Limits;
use crate::plane::{PlaneBuffer, alloc_zeroed};

/// Split an interleaved buffer into one plane per component.
///
/// Byte `i` of each pixel group lands in plane `i` at the same (x, y)
/// position. Source rows are `row_stride` bytes apart (`row_stride` may
/// exceed `width * bytes_per_pixel`; the padding is skipped). Output planes
/// are packed and share the source's width and height.
pub fn deinterleave(
    pixels: &[u8],
    width: u32,
    height: u32,
    row_stride: usize,
    format: &PixelFormat,
    stop: impl Stop,
) -> Result<Vec<PlaneBuffer>, PlanarError> {
    deinterleave_with(pixels, width, height, row_stride, format, None, &stop)
}

pub(crate) fn deinterleave_with(
    pixels: &[u8],
    width: u32,
    height: u32,
    row_stride: usize,
    format: &PixelFormat,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<PlaneBuffer>, PlanarError> {
    format.validate()?;
    if width == 0 || height == 0 {
        return Err(PlanarError::ZeroDimensions { width, height });
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let bpp = format.bytes_per_pixel();
    let row_bytes = (width as usize)
        .checked_mul(bpp)
        .ok_or(PlanarError::DimensionsTooLarge { width, height })?;
    if row_stride < row_bytes {
        return Err(PlanarError::StrideTooSmall {
            row_stride,
            min_stride: row_bytes,
        });
    }
    let needed = (height as usize - 1)
        .checked_mul(row_stride)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or(PlanarError::DimensionsTooLarge { width, height })?;
    if pixels.len() < needed {
        return Err(PlanarError::BufferTooSmall {
            needed,
            actual: pixels.len(),
        });
    }

    let mut planes = Vec::with_capacity(bpp);
    for _ in 0..bpp {
        planes.push(PlaneBuffer::with_limits(width, height, limits)?);
    }

    for y in 0..height as usize {
        if y % 16 == 0 {
            stop.check()?;
        }
        let src_row = &pixels[y * row_stride..y * row_stride + row_bytes];
        for (i, plane) in planes.iter_mut().enumerate() {
            for (dst, group) in plane.row_mut(y).iter_mut().zip(src_row.chunks_exact(bpp)) {
                *dst = group[i];
            }
        }
    }

    Ok(planes)
}

/// Reassemble planes into a packed interleaved buffer.
///
/// Inverse of [`deinterleave`]: byte `i` of each pixel group is read from
/// plane `i`. All planes must match the format's component count and share
/// one width/height; both are checked before anything is written, so a
/// failed call emits no partial output. The result is packed with
/// `row_stride = width * bytes_per_pixel`.
pub fn interleave(
    planes: &[PlaneBuffer],
    format: &PixelFormat,
    stop: impl Stop,
) -> Result<Vec<u8>, PlanarError> {
    interleave_with(planes, format, None, &stop)
}

pub(crate) fn interleave_with(
    planes: &[PlaneBuffer],
    format: &PixelFormat,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PlanarError> {
    format.validate()?;
    let bpp = format.bytes_per_pixel();
    if planes.len() != bpp {
        return Err(PlanarError::PlaneCountMismatch {
            expected: bpp,
            actual: planes.len(),
        });
    }

    let width = planes[0].width();
    let height = planes[0].height();
    for (index, plane) in planes.iter().enumerate() {
        if plane.width() != width || plane.height() != height {
            return Err(PlanarError::PlaneSizeMismatch {
                index,
                width: plane.width(),
                height: plane.height(),
                expected_width: width,
                expected_height: height,
            });
        }
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let row_bytes = (width as usize)
        .checked_mul(bpp)
        .ok_or(PlanarError::DimensionsTooLarge { width, height })?;
    let bytes = row_bytes
        .checked_mul(height as usize)
        .ok_or(PlanarError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(bytes)?;
    }
    let mut out = alloc_zeroed(bytes)?;

    for y in 0..height as usize {
        if y % 16 == 0 {
            stop.check()?;
        }
        let out_row = &mut out[y * row_bytes..(y + 1) * row_bytes];
        for (i, plane) in planes.iter().enumerate() {
            for (group, &src) in out_row.chunks_exact_mut(bpp).zip(plane.row(y)) {
                group[i] = src;
            }
        }
    }

    Ok(out)
}
