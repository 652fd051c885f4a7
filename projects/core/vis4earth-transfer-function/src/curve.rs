//! Editable piecewise-linear colour curves.

use crate::control_points::ControlPoints;
use core::fmt;
use derive_enum_all_values::AllValues;

/// One channel of a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Channel {
    /// Red.
    Red = 0,
    /// Green.
    Green = 1,
    /// Blue.
    Blue = 2,
    /// Alpha (opacity).
    Alpha = 3,
}

impl Channel {
    /// Index into an `[r, g, b, a]` array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        })
    }
}

/// A key of a [`LinearCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveKey {
    /// Position of the key.
    pub time: f32,
    /// Value at `time`.
    pub value: f32,
}

/// A 1D curve linearly interpolated between keys and held constant past either end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearCurve {
    keys: Vec<CurveKey>,
}

impl LinearCurve {
    /// Creates a curve without keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, replacing the value of an existing key at the same time.
    pub fn add_key(&mut self, time: f32, value: f32) {
        match self
            .keys
            .binary_search_by(|key| key.time.total_cmp(&time))
        {
            Ok(index) => self.keys[index].value = value,
            Err(index) => self.keys.insert(index, CurveKey { time, value }),
        }
    }

    /// Removes every key.
    pub fn reset(&mut self) {
        self.keys.clear();
    }

    /// Keys in ascending time order.
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// `true` when the curve has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluates the curve at `time`. An empty curve evaluates to `0.0`.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // first.time < time < last.time, so 0 < next < len
        let next = self.keys.partition_point(|key| key.time <= time);
        let prev = &self.keys[next - 1];
        let next = &self.keys[next];
        let k = (time - prev.time) / (next.time - prev.time);
        prev.value + (next.value - prev.value) * k
    }
}

/// Four independent curves, one per RGBA channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorCurve {
    channels: [LinearCurve; 4],
}

impl ColorCurve {
    /// Builds a curve with one key per channel per control point.
    pub fn from_points(points: &ControlPoints) -> Self {
        let mut curve = Self::default();
        curve.reset_from_points(points);
        curve
    }

    /// Replaces all keys with those of `points`.
    pub fn reset_from_points(&mut self, points: &ControlPoints) {
        for channel in &mut self.channels {
            channel.reset();
        }
        for point in points {
            for (channel, value) in self.channels.iter_mut().zip(point.rgba) {
                channel.add_key(point.scalar, value);
            }
        }
    }

    /// The curve of a single channel.
    pub fn channel(&self, channel: Channel) -> &LinearCurve {
        &self.channels[channel.index()]
    }

    /// Mutable access to a single channel, for editing.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut LinearCurve {
        &mut self.channels[channel.index()]
    }

    /// Evaluates all four channels at `time`.
    pub fn evaluate(&self, time: f32) -> [f32; 4] {
        [
            self.channels[0].evaluate(time),
            self.channels[1].evaluate(time),
            self.channels[2].evaluate(time),
            self.channels[3].evaluate(time),
        ]
    }

    /// Union of the key times of all channels, ascending and deduplicated.
    pub fn key_times(&self) -> Vec<f32> {
        let mut times: Vec<f32> = self
            .channels
            .iter()
            .flat_map(|channel| channel.keys().iter().map(|key| key.time))
            .collect();
        times.sort_by(f32::total_cmp);
        times.dedup();
        times
    }

    /// Samples every channel at every key time.
    ///
    /// Channels edited independently may have keys at different times; each sampled
    /// point carries all four channels evaluated at its time.
    pub fn sample_points(&self) -> ControlPoints {
        self.key_times()
            .into_iter()
            .map(|time| (time, self.evaluate(time)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn empty_curve_evaluates_to_zero() {
        assert_eq!(LinearCurve::new().evaluate(12.0), 0.0);
    }

    #[rstest]
    #[case(-5.0, 1.0)]
    #[case(0.0, 1.0)]
    #[case(5.0, 2.0)]
    #[case(10.0, 3.0)]
    #[case(15.0, 4.0)]
    #[case(20.0, 5.0)]
    #[case(99.0, 5.0)]
    fn interpolates_and_holds_ends(#[case] time: f32, #[case] expected: f32) {
        let mut curve = LinearCurve::new();
        curve.add_key(20.0, 5.0);
        curve.add_key(0.0, 1.0);
        curve.add_key(10.0, 3.0);
        assert!((curve.evaluate(time) - expected).abs() < 1e-6);
    }

    #[test]
    fn add_key_replaces_same_time() {
        let mut curve = LinearCurve::new();
        curve.add_key(1.0, 0.25);
        curve.add_key(1.0, 0.75);
        assert_eq!(curve.keys(), &[CurveKey { time: 1.0, value: 0.75 }]);
    }

    #[test]
    fn from_points_keys_every_channel() {
        let points: ControlPoints = [(0.0, RED), (100.0, GREEN)].into_iter().collect();
        let curve = ColorCurve::from_points(&points);
        for channel in Channel::all_values().iter().copied() {
            assert_eq!(curve.channel(channel).keys().len(), 2);
        }
        assert_eq!(curve.evaluate(50.0), [0.5, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn sample_points_uses_union_of_key_times() {
        let points: ControlPoints = [(0.0, RED), (100.0, GREEN)].into_iter().collect();
        let mut curve = ColorCurve::from_points(&points);
        curve.channel_mut(Channel::Alpha).add_key(50.0, 0.0);

        let sampled = curve.sample_points();
        let scalars: Vec<f32> = sampled.iter().map(|p| p.scalar).collect();
        assert_eq!(scalars, [0.0, 50.0, 100.0]);
        assert_eq!(sampled.as_slice()[1].rgba, [0.5, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn reset_from_points_drops_old_keys() {
        let mut curve = ColorCurve::from_points(&points(&[(0.0, RED), (9.0, RED)]));
        curve.reset_from_points(&points(&[(3.0, BLUE)]));
        assert_eq!(curve.key_times(), [3.0]);
    }
}
