use alloc::vec::Vec;

use enough::Stop;
#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::convert::{deinterleave_with, interleave_with};
use crate::error::PlanarError;
use crate::format::PixelFormat;
use crate::limits::Limits;
use crate::lut::LookupTable;
use crate::plane::PlaneBuffer;

/// Run every plane through `table`, except the plane at `alpha_index`, which
/// is copied verbatim.
///
/// The alpha index is computed once per format (see
/// [`PixelFormat::alpha_plane_index`]) and reused for the whole plane set.
/// With no alpha index, every plane is transformed.
pub fn transform_planes(
    planes: &[PlaneBuffer],
    alpha_index: Option<usize>,
    table: &LookupTable,
    stop: impl Stop,
) -> Result<Vec<PlaneBuffer>, PlanarError> {
    transform_planes_with(planes, alpha_index, table, &stop)
}

pub(crate) fn transform_planes_with(
    planes: &[PlaneBuffer],
    alpha_index: Option<usize>,
    table: &LookupTable,
    stop: &dyn Stop,
) -> Result<Vec<PlaneBuffer>, PlanarError> {
    planes
        .iter()
        .enumerate()
        .map(|(index, plane)| {
            if Some(index) == alpha_index {
                plane.duplicate()
            } else {
                table.apply_with(plane, stop)
            }
        })
        .collect()
}

/// Transformed interleaved image, ready for the caller's encoder.
#[derive(Clone, Debug)]
pub struct TransformOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Always packed: `width * bytes_per_pixel`.
    pub row_stride: usize,
    pub format: PixelFormat,
}

impl TransformOutput {
    /// Access the interleaved pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the interleaved pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret the pixel data as a typed pixel slice.
    ///
    /// Returns [`PlanarError::InvalidFormat`] if `P`'s size doesn't match the
    /// format's bytes per pixel.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P>(&self) -> Result<&[P], PlanarError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if core::mem::size_of::<P>() != self.format.bytes_per_pixel() {
            return Err(PlanarError::InvalidFormat(alloc::format!(
                "pixel type is {} bytes, format has {} bytes per pixel",
                core::mem::size_of::<P>(),
                self.format.bytes_per_pixel()
            )));
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`PlanarError::InvalidFormat`] if `P`'s size doesn't match the
    /// format's bytes per pixel.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P>(&self) -> Result<imgref::ImgRef<'_, P>, PlanarError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// One-shot pipeline: deinterleave, transform each plane, reinterleave.
///
/// The plane holding alpha (or padding) is copied instead of transformed, so
/// opacity survives the table exactly. Each stage works on freshly owned
/// buffers; an error aborts the run and drops any intermediates with it.
#[derive(Clone, Debug)]
pub struct TransformRequest {
    table: LookupTable,
    limits: Option<Limits>,
}

impl TransformRequest {
    /// Transform through an explicit lookup table.
    pub fn with_table(table: LookupTable) -> TransformRequest {
        TransformRequest {
            table,
            limits: None,
        }
    }

    /// Quantize color channels to multiples of `step`
    /// (see [`LookupTable::quantize`]).
    pub fn quantize(step: u8) -> TransformRequest {
        Self::with_table(LookupTable::quantize(step))
    }

    /// Apply resource limits to the run.
    pub fn limits(mut self, limits: Limits) -> TransformRequest {
        self.limits = Some(limits);
        self
    }

    /// Run the pipeline over one interleaved image.
    pub fn run(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        row_stride: usize,
        format: &PixelFormat,
        stop: impl Stop,
    ) -> Result<TransformOutput, PlanarError> {
        self.run_with(pixels, width, height, row_stride, format, &stop)
    }

    fn run_with(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        row_stride: usize,
        format: &PixelFormat,
        stop: &dyn Stop,
    ) -> Result<TransformOutput, PlanarError> {
        let limits = self.limits.as_ref();
        let planes = deinterleave_with(pixels, width, height, row_stride, format, limits, stop)?;
        let alpha_index = format.alpha_plane_index();
        let transformed = transform_planes_with(&planes, alpha_index, &self.table, stop)?;
        let out = interleave_with(&transformed, format, limits, stop)?;
        Ok(TransformOutput {
            pixels: out,
            width,
            height,
            row_stride: width as usize * format.bytes_per_pixel(),
            format: *format,
        })
    }
}
