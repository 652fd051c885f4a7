#![no_main]

// Max smoothing never lowers a voxel and never exceeds the volume maximum.

use libfuzzer_sys::{arbitrary, fuzz_target};
use vis4earth_volume_common::{Dimension, VoxelType};
use vis4earth_volume_smooth::{smooth, SmoothDimension, SmoothKind, SmoothSettings};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub extent: [u8; 3],
    pub xyz: bool,
    pub voxels: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let extent = input.extent.map(|e| i64::from(e % 8) + 1);
    let Ok(dimension) = Dimension::new(extent[0], extent[1], extent[2]) else {
        return;
    };
    if input.voxels.len() < dimension.voxel_count() {
        return;
    }
    let data = &input.voxels[..dimension.voxel_count()];

    let settings = SmoothSettings::new(
        if input.xyz {
            SmoothDimension::Xyz
        } else {
            SmoothDimension::Xy
        },
        SmoothKind::Max,
    );
    let smoothed = smooth(data, dimension, VoxelType::UInt8, settings).expect("valid input");

    let max = data.iter().copied().max().unwrap_or(0);
    for (before, after) in data.iter().zip(&smoothed) {
        assert!(after >= before);
        assert!(*after <= max);
    }
});
