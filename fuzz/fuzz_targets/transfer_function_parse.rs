#![no_main]

// Any text either parses into a usable ramp or fails with a line error, and the
// normalized output parses back to the same number of control points.

use libfuzzer_sys::fuzz_target;
use vis4earth_transfer_function::{
    format_control_points, parse_control_points, ColorCurve, ColorRamp, RESOLUTION,
};

fuzz_target!(|text: &str| {
    let Ok(points) = parse_control_points(text) else {
        return;
    };
    if points.is_empty() {
        return;
    }

    let ramp = ColorRamp::from_points(&points).expect("non-empty points must build a ramp");
    assert_eq!(ramp.as_flat().len(), RESOLUTION * 4);
    for texel in ramp.as_flat() {
        let value = texel.to_f32();
        assert!((0.0..=1.0).contains(&value), "texel {value} out of range");
    }

    let curve = ColorCurve::from_points(&points);
    assert_eq!(curve.key_times().len(), points.len());

    let reparsed = parse_control_points(&format_control_points(&points))
        .expect("formatted control points must parse");
    assert_eq!(reparsed.len(), points.len());
});
