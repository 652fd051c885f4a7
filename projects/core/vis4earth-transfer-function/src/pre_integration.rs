//! Pre-integrated transfer function tables.
//!
//! A pre-integrated table stores, for every pair of scalars sampled at the front and
//! back of a ray segment, the colour and opacity of the whole segment. Renderers look it
//! up instead of the plain ramp to avoid slicing artifacts with large sampling steps.

use crate::error::{TransferFunctionError, TransferFunctionResult};
use crate::ramp::{ColorRamp, RESOLUTION};
use half::f16;

/// Settings for building a [`PreIntegratedTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreIntegrationSettings {
    /// Ray marching step, in units of the step the ramp opacities are defined for.
    pub step: f32,
}

impl Default for PreIntegrationSettings {
    fn default() -> Self {
        Self { step: 1.0 }
    }
}

/// A `RESOLUTION x RESOLUTION` RGBA half-float table.
///
/// Texel `(front, back)` is stored at row `back`, column `front`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreIntegratedTable {
    texels: Vec<f16>,
}

impl PreIntegratedTable {
    /// Width and height of the table.
    pub const SIZE: usize = RESOLUTION;

    /// Integrates `ramp` over every scalar interval.
    ///
    /// Each texel holds the opacity-weighted mean colour of the ramp over
    /// `[min(front, back), max(front, back)]` and the mean opacity corrected for
    /// the step as `1 - (1 - alpha)^step`.
    ///
    /// # Errors
    ///
    /// [`TransferFunctionError::InvalidStep`] unless `settings.step` is finite and positive.
    pub fn build(
        ramp: &ColorRamp,
        settings: PreIntegrationSettings,
    ) -> TransferFunctionResult<Self> {
        let step = settings.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(TransferFunctionError::InvalidStep(step));
        }

        let prefix = PrefixSums::new(ramp);
        let mut texels = Vec::with_capacity(Self::SIZE * Self::SIZE * 4);
        for back in 0..Self::SIZE {
            for front in 0..Self::SIZE {
                let rgba = prefix.segment(front.min(back), front.max(back), step as f64);
                texels.extend(rgba.iter().map(|&channel| f16::from_f64(channel)));
            }
        }

        log::debug!("Built {0}x{0} pre-integrated table with step {step}", Self::SIZE);
        Ok(Self { texels })
    }

    /// Texels as a flat row-major `[r, g, b, a, ...]` slice.
    pub fn as_flat(&self) -> &[f16] {
        &self.texels
    }

    /// Consumes the table, returning its flat texels.
    pub fn into_flat(self) -> Vec<f16> {
        self.texels
    }

    /// The entry for a segment entering at `front` and leaving at `back`.
    pub fn texel(&self, front: usize, back: usize) -> Option<[f32; 4]> {
        if front >= Self::SIZE || back >= Self::SIZE {
            return None;
        }
        let offset = (back * Self::SIZE + front) * 4;
        let texel = &self.texels[offset..offset + 4];
        Some([
            texel[0].to_f32(),
            texel[1].to_f32(),
            texel[2].to_f32(),
            texel[3].to_f32(),
        ])
    }
}

/// Running sums over the ramp so any interval mean is two lookups.
struct PrefixSums {
    /// Sum of alpha over `[0, i)`.
    alpha: Vec<f64>,
    /// Sum of alpha-weighted colour over `[0, i)`.
    weighted: Vec<[f64; 3]>,
    /// Sum of unweighted colour over `[0, i)`, used where the interval is fully transparent.
    plain: Vec<[f64; 3]>,
}

impl PrefixSums {
    fn new(ramp: &ColorRamp) -> Self {
        let mut alpha = vec![0.0; RESOLUTION + 1];
        let mut weighted = vec![[0.0; 3]; RESOLUTION + 1];
        let mut plain = vec![[0.0; 3]; RESOLUTION + 1];

        for (i, texel) in ramp.as_flat().chunks_exact(4).enumerate() {
            let a = texel[3].to_f64();
            alpha[i + 1] = alpha[i] + a;
            for c in 0..3 {
                let value = texel[c].to_f64();
                weighted[i + 1][c] = weighted[i][c] + value * a;
                plain[i + 1][c] = plain[i][c] + value;
            }
        }

        Self {
            alpha,
            weighted,
            plain,
        }
    }

    fn segment(&self, lo: usize, hi: usize, step: f64) -> [f64; 4] {
        let count = (hi - lo + 1) as f64;
        let alpha_sum = self.alpha[hi + 1] - self.alpha[lo];

        let mut rgba = [0.0; 4];
        for c in 0..3 {
            let mean = if alpha_sum > 0.0 {
                (self.weighted[hi + 1][c] - self.weighted[lo][c]) / alpha_sum
            } else {
                (self.plain[hi + 1][c] - self.plain[lo][c]) / count
            };
            rgba[c] = mean.clamp(0.0, 1.0);
        }

        let mean_alpha = (alpha_sum / count).clamp(0.0, 1.0);
        rgba[3] = 1.0 - (1.0 - mean_alpha).powf(step);
        rgba
    }
}
