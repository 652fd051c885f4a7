//! Ordered control point sets.

/// A scalar mapped to a colour. Channels are normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Scalar value the colour is pinned to.
    pub scalar: f32,
    /// Red, green, blue and alpha in `[0, 1]`.
    pub rgba: [f32; 4],
}

/// Control points kept sorted by strictly increasing scalar.
///
/// Inserting a scalar that is already present replaces the whole point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints {
    points: Vec<ControlPoint>,
}

impl ControlPoints {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, keeping the set ordered.
    ///
    /// # Returns
    ///
    /// The colour previously stored at `scalar`, if any.
    pub fn insert(&mut self, scalar: f32, rgba: [f32; 4]) -> Option<[f32; 4]> {
        // -0.0 and 0.0 are the same key.
        let scalar = if scalar == 0.0 { 0.0 } else { scalar };
        let point = ControlPoint { scalar, rgba };

        match self
            .points
            .binary_search_by(|existing| existing.scalar.total_cmp(&scalar))
        {
            Ok(index) => Some(core::mem::replace(&mut self.points[index], point).rgba),
            Err(index) => {
                self.points.insert(index, point);
                None
            }
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending scalar order.
    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Iterates points in ascending scalar order.
    pub fn iter(&self) -> core::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }
}

impl FromIterator<(f32, [f32; 4])> for ControlPoints {
    fn from_iter<I: IntoIterator<Item = (f32, [f32; 4])>>(iter: I) -> Self {
        let mut points = ControlPoints::new();
        for (scalar, rgba) in iter {
            points.insert(scalar, rgba);
        }
        points
    }
}

impl<'a> IntoIterator for &'a ControlPoints {
    type Item = &'a ControlPoint;
    type IntoIter = core::slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
