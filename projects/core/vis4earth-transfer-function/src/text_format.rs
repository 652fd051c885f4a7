//! The plain text transfer function format.
//!
//! One control point per line: `scalar r g b a`, five whitespace-separated numbers with
//! colour channels in `[0, 255]`. Blank lines are ignored and lines may come in any order.
//! Files are written in ascending scalar order.

use crate::control_points::ControlPoints;
use crate::curve::{Channel, ColorCurve};
use crate::error::{LineError, TransferFunctionError, TransferFunctionResult};
use std::fs;
use std::path::Path;

/// Exclusive upper bound accepted for a colour channel on input.
pub const CHANNEL_LIMIT: f32 = 255.5;

/// Parses control points from the text format.
///
/// A later line with the same scalar as an earlier one replaces it.
///
/// # Errors
///
/// [`TransferFunctionError::InvalidFileContents`] naming the first bad line (1-based).
pub fn parse_control_points(text: &str) -> TransferFunctionResult<ControlPoints> {
    let mut points = ControlPoints::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (scalar, rgba) = parse_line(line).map_err(|reason| {
            TransferFunctionError::InvalidFileContents {
                line: index + 1,
                reason,
            }
        })?;

        if points.insert(scalar, rgba).is_some() {
            log::warn!(
                "Transfer function line {} redefines scalar {scalar}, replacing the earlier point",
                index + 1
            );
        }
    }
    Ok(points)
}

fn parse_line(line: &str) -> Result<(f32, [f32; 4]), LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(LineError::WrongFieldCount(fields.len()));
    }

    let mut values = [0f32; 5];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LineError::NotANumber((*field).to_string()))?;
    }

    let mut rgba = [0f32; 4];
    for channel in Channel::all_values().iter().copied() {
        let value = values[channel.index() + 1];
        if !(0.0..CHANNEL_LIMIT).contains(&value) {
            return Err(LineError::ChannelOutOfRange { channel, value });
        }
        rgba[channel.index()] = (value / 255.0).clamp(0.0, 1.0);
    }

    Ok((values[0], rgba))
}

/// Formats control points in the text format, scaling channels to `[0, 255]`.
pub fn format_control_points(points: &ControlPoints) -> String {
    let mut text = String::new();
    for point in points {
        let [r, g, b, a] = point.rgba.map(|channel| (channel * 255.0).clamp(0.0, 255.0));
        text.push_str(&format!("{} {r} {g} {b} {a}\n", point.scalar));
    }
    text
}

/// Loads control points from a text file.
///
/// Bytes that are not valid UTF-8 are replaced before parsing, so they surface as
/// [`TransferFunctionError::InvalidFileContents`] on the affected line.
///
/// # Errors
///
/// - [`TransferFunctionError::InvalidFilePath`] if the file cannot be read
/// - [`TransferFunctionError::InvalidFileContents`] if a line is malformed
pub fn load_from_file(path: &Path) -> TransferFunctionResult<ControlPoints> {
    let bytes = fs::read(path).map_err(|source| TransferFunctionError::InvalidFilePath {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_control_points(&String::from_utf8_lossy(&bytes))?;
    log::debug!(
        "Loaded {} control points from {}",
        points.len(),
        path.display()
    );
    Ok(points)
}

/// Saves a colour curve to a text file.
///
/// Every channel is evaluated at the union of all channels' key times.
///
/// # Errors
///
/// - [`TransferFunctionError::InvalidCurve`] if `curve` is `None`
/// - [`TransferFunctionError::InvalidFilePath`] if the file cannot be written
pub fn save_to_file(curve: Option<&ColorCurve>, path: &Path) -> TransferFunctionResult<()> {
    let curve = curve.ok_or(TransferFunctionError::InvalidCurve)?;
    let text = format_control_points(&curve.sample_points());
    fs::write(path, text).map_err(|source| TransferFunctionError::InvalidFilePath {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn parses_and_normalizes_channels() {
        let points = parse_control_points("0 255 0 0 255\n\n100 0 255 0 127.5\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.as_slice()[0].rgba, RED);
        assert_eq!(points.as_slice()[1].scalar, 100.0);
        assert_eq!(points.as_slice()[1].rgba, [0.0, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn sorts_lines_and_later_duplicate_wins() {
        let points = parse_control_points("50 0 0 255 255\n0 255 0 0 255\n50 0 255 0 255").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.as_slice()[0].rgba, RED);
        assert_eq!(points.as_slice()[1].rgba, GREEN);
    }

    #[test]
    fn accepts_channels_just_below_limit() {
        let points = parse_control_points("0 255.4 0 0 0").unwrap();
        assert_eq!(points.as_slice()[0].rgba[0], 1.0);
    }

    #[test]
    fn scalar_is_not_range_checked() {
        let points = parse_control_points("-20 0 0 0 0\n4000 0 0 0 0").unwrap();
        assert_eq!(points.len(), 2);
    }

    #[rstest]
    #[case("0 255 0 0", 1, LineError::WrongFieldCount(4))]
    #[case("0 1 2 3 4\n0 255 0 0 255 7", 2, LineError::WrongFieldCount(6))]
    #[case("0 0 0 0 0\n\n5 300 0 0 0", 3, LineError::ChannelOutOfRange { channel: Channel::Red, value: 300.0 })]
    #[case("0 0 0 255.5 0", 1, LineError::ChannelOutOfRange { channel: Channel::Blue, value: 255.5 })]
    #[case("0 0 0 0 -1", 1, LineError::ChannelOutOfRange { channel: Channel::Alpha, value: -1.0 })]
    #[case("0 0 abc 0 0", 1, LineError::NotANumber("abc".into()))]
    #[case("nan 0 0 0 0", 1, LineError::NotANumber("nan".into()))]
    #[case("0 inf 0 0 0", 1, LineError::NotANumber("inf".into()))]
    fn rejects_malformed_lines(
        #[case] text: &str,
        #[case] expected_line: usize,
        #[case] expected_reason: LineError,
    ) {
        match parse_control_points(text) {
            Err(TransferFunctionError::InvalidFileContents { line, reason }) => {
                assert_eq!(line, expected_line);
                assert_eq!(reason, expected_reason);
            }
            other => panic!("expected InvalidFileContents, got {other:?}"),
        }
    }

    #[test]
    fn formats_ascending_with_scaled_channels() {
        let points: ControlPoints = [(100.0, [0.0, 1.0, 0.0, 0.5]), (0.0, RED)]
            .into_iter()
            .collect();
        assert_eq!(
            format_control_points(&points),
            "0 255 0 0 255\n100 0 255 0 127.5\n"
        );
    }

    #[test]
    fn formats_one_line_per_point_with_clamped_channels() {
        let points: ControlPoints = [
            (0.0, [-0.5, 0.0, 0.0, 0.0]),
            (12.5, [0.2, 0.4, 0.6, 0.8]),
            (255.0, [1.5, 1.0, 1.0, 1.0]),
        ]
        .into_iter()
        .collect();
        let text = format_control_points(&points);
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
        assert!(text.starts_with("0 0 0 0 0\n"));
        assert!(text.ends_with("255 255 255 255 255\n"));
        assert!(text.contains("\n12.5 51 102 153 204\n"));
        assert_eq!(format_control_points(&ControlPoints::new()), "");
    }

    #[test]
    fn save_without_curve_is_invalid() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            save_to_file(None, file.path()),
            Err(TransferFunctionError::InvalidCurve)
        ));
    }

    #[test]
    fn missing_file_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            load_from_file(&path),
            Err(TransferFunctionError::InvalidFilePath { .. })
        ));
    }

    #[test]
    fn unwritable_path_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("tf.txt");
        let curve = ColorCurve::from_points(&points(&[(0.0, RED)]));
        assert!(matches!(
            save_to_file(Some(&curve), &path),
            Err(TransferFunctionError::InvalidFilePath { .. })
        ));
    }
}
