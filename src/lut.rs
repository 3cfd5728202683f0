use enough::Stop;

use crate::error::PlanarError;
use crate::plane::PlaneBuffer;

/// A 256-entry byte mapping: index = input value, entry = output value.
///
/// Built once, immutable afterwards; applying it replaces per-pixel
/// computation with a table read.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    entries: [u8; 256],
}

impl LookupTable {
    /// Build a table from a byte mapping function.
    pub fn from_fn(f: impl Fn(u8) -> u8) -> LookupTable {
        let mut entries = [0u8; 256];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        LookupTable { entries }
    }

    /// The identity mapping: every byte maps to itself.
    pub fn identity() -> LookupTable {
        Self::from_fn(|v| v)
    }

    /// A quantization table: `v` maps to `(v / step) * step` (integer
    /// division), snapping each byte to the nearest lower multiple of
    /// `step`. A `step` of 0 yields the identity table.
    pub fn quantize(step: u8) -> LookupTable {
        if step == 0 {
            return Self::identity();
        }
        Self::from_fn(|v| (v / step) * step)
    }

    /// The mapped value for input byte `v`.
    pub fn get(&self, v: u8) -> u8 {
        self.entries[v as usize]
    }

    /// All 256 entries, indexed by input byte.
    pub fn entries(&self) -> &[u8; 256] {
        &self.entries
    }

    /// Map every byte of `plane` through the table into a freshly allocated
    /// plane of identical dimensions.
    pub fn apply(&self, plane: &PlaneBuffer, stop: impl Stop) -> Result<PlaneBuffer, PlanarError> {
        self.apply_with(plane, &stop)
    }

    pub(crate) fn apply_with(
        &self,
        plane: &PlaneBuffer,
        stop: &dyn Stop,
    ) -> Result<PlaneBuffer, PlanarError> {
        let mut out = PlaneBuffer::new(plane.width(), plane.height())?;
        for (row_idx, (dst, src)) in out.rows_mut().zip(plane.rows()).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = self.entries[s as usize];
            }
        }
        Ok(out)
    }
}

impl core::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LookupTable")
            .field("entries", &&self.entries[..])
            .finish()
    }
}
