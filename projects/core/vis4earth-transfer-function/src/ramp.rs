//! Fixed-resolution colour ramps.

use crate::control_points::ControlPoints;
use crate::curve::ColorCurve;
use crate::error::{TransferFunctionError, TransferFunctionResult};
use half::f16;

/// Number of texels in a colour ramp. The ramp covers scalars `[0, RESOLUTION)`.
pub const RESOLUTION: usize = 256;

/// A `RESOLUTION`-texel RGBA half-float lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    texels: Vec<f16>,
}

impl ColorRamp {
    /// Interpolates a ramp from control points.
    ///
    /// # Errors
    ///
    /// [`TransferFunctionError::NoControlPoints`] if `points` is empty.
    pub fn from_points(points: &ControlPoints) -> TransferFunctionResult<Self> {
        lerp_from_points_to_flat_array(points).map(|texels| Self { texels })
    }

    /// Interpolates a ramp from the keys of a colour curve.
    ///
    /// # Errors
    ///
    /// [`TransferFunctionError::NoControlPoints`] if the curve has no keys.
    pub fn from_curve(curve: &ColorCurve) -> TransferFunctionResult<Self> {
        Self::from_points(&curve.sample_points())
    }

    /// Texels as a flat `[r, g, b, a, r, g, b, a, ...]` slice.
    pub fn as_flat(&self) -> &[f16] {
        &self.texels
    }

    /// Consumes the ramp, returning its flat texels.
    pub fn into_flat(self) -> Vec<f16> {
        self.texels
    }

    /// The colour at integer scalar `scalar`, widened to `f32`.
    pub fn texel(&self, scalar: usize) -> Option<[f32; 4]> {
        if scalar >= RESOLUTION {
            return None;
        }
        let texel = self.texels.get(scalar * 4..scalar * 4 + 4)?;
        Some([
            texel[0].to_f32(),
            texel[1].to_f32(),
            texel[2].to_f32(),
            texel[3].to_f32(),
        ])
    }
}

/// Interpolates control points into a flat RGBA16F array of [`RESOLUTION`] texels.
///
/// For each integer scalar `s` the bracketing pair is found by a cursor that only moves
/// forward. Scalars before the first key take the first colour, scalars at or past
/// the last key take the last colour.
///
/// # Errors
///
/// [`TransferFunctionError::NoControlPoints`] if `points` is empty.
pub fn lerp_from_points_to_flat_array(points: &ControlPoints) -> TransferFunctionResult<Vec<f16>> {
    let points = points.as_slice();
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TransferFunctionError::NoControlPoints),
    };

    let mut texels = Vec::with_capacity(RESOLUTION * 4);
    // Index of the first point whose scalar exceeds the current one.
    let mut next = 0;
    for s in 0..RESOLUTION {
        let scalar = s as f32;
        while next < points.len() && points[next].scalar <= scalar {
            next += 1;
        }

        let rgba = if next == 0 {
            first.rgba
        } else if next == points.len() {
            last.rgba
        } else {
            let prev = &points[next - 1];
            let cur = &points[next];
            let k = if cur.scalar == prev.scalar {
                0.0
            } else {
                (scalar - prev.scalar) / (cur.scalar - prev.scalar)
            };
            core::array::from_fn(|c| (1.0 - k) * prev.rgba[c] + k * cur.rgba[c])
        };

        texels.extend(rgba.iter().map(|&channel| f16::from_f32(channel)));
    }

    Ok(texels)
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    fn assert_rgba_near(actual: [f32; 4], expected: [f32; 4], tolerance: f32) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() <= tolerance, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn red_to_blue_ramp() {
        let points: ControlPoints = [(0.0, RED), (255.0, BLUE)].into_iter().collect();
        let ramp = ColorRamp::from_points(&points).unwrap();

        assert_eq!(ramp.as_flat().len(), RESOLUTION * 4);
        assert_eq!(ramp.texel(0), Some(RED));
        assert_eq!(ramp.texel(255), Some(BLUE));
        assert_rgba_near(ramp.texel(128).unwrap(), [0.5, 0.0, 0.5, 1.0], 1e-2);
        assert_eq!(ramp.texel(RESOLUTION), None);
        assert_eq!(ramp.texel(usize::MAX / 2), None);
        assert_eq!(ramp.texel(usize::MAX), None);
    }

    #[test]
    fn holds_end_colours_outside_domain() {
        let points: ControlPoints = [(100.0, RED), (200.0, GREEN)].into_iter().collect();
        let ramp = ColorRamp::from_points(&points).unwrap();

        assert_eq!(ramp.texel(0), Some(RED));
        assert_eq!(ramp.texel(99), Some(RED));
        assert_eq!(ramp.texel(200), Some(GREEN));
        assert_eq!(ramp.texel(255), Some(GREEN));
        assert_rgba_near(ramp.texel(150).unwrap(), [0.5, 0.5, 0.0, 1.0], 1e-3);
    }

    #[test]
    fn single_point_is_constant() {
        let points: ControlPoints = [(42.0, GREEN)].into_iter().collect();
        let ramp = ColorRamp::from_points(&points).unwrap();
        for s in 0..RESOLUTION {
            assert_eq!(ramp.texel(s), Some(GREEN));
        }
    }

    #[test]
    fn no_points_is_an_error() {
        assert!(matches!(
            ColorRamp::from_points(&ControlPoints::new()),
            Err(TransferFunctionError::NoControlPoints)
        ));
    }

    #[test]
    fn fractional_keys_interpolate_between_texels() {
        let points: ControlPoints = [(0.5, RED), (1.5, BLUE)].into_iter().collect();
        let ramp = ColorRamp::from_points(&points).unwrap();
        assert_eq!(ramp.texel(0), Some(RED));
        assert_rgba_near(ramp.texel(1).unwrap(), [0.5, 0.0, 0.5, 1.0], 1e-3);
        assert_eq!(ramp.texel(2), Some(BLUE));
    }

    #[test]
    fn from_curve_matches_from_points() {
        let points: ControlPoints = [(10.0, RED), (90.0, GREEN), (250.0, BLUE)]
            .into_iter()
            .collect();
        let curve = ColorCurve::from_points(&points);
        assert_eq!(
            ColorRamp::from_curve(&curve).unwrap(),
            ColorRamp::from_points(&points).unwrap()
        );
    }
}
