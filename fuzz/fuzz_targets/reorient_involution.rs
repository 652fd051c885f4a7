#![no_main]

// Reorienting with an axis specification and then with its inverse restores the input.

use libfuzzer_sys::{arbitrary, fuzz_target};
use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};
use vis4earth_volume_transform::reorient;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub extent: [u8; 3],
    pub axis: [i8; 3],
    pub voxel_type: u8,
    pub seed: u8,
}

fuzz_target!(|input: Input| {
    let extent = input.extent.map(|e| i64::from(e % 9) + 1);
    let Ok(dimension) = Dimension::new(extent[0], extent[1], extent[2]) else {
        return;
    };
    let Ok(axis) = AxisSpec::new(input.axis.map(i32::from)) else {
        return;
    };
    let Ok(voxel_type) = VoxelType::try_from(input.voxel_type % 3) else {
        return;
    };

    let data: Vec<u8> = (0..dimension.byte_len(voxel_type))
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(input.seed))
        .collect();

    let forward = reorient(&data, dimension, voxel_type, axis).expect("valid input");
    assert_eq!(forward.dimension, dimension.permuted(axis));

    let back = reorient(&forward.data, forward.dimension, voxel_type, axis.inverse())
        .expect("valid input");
    assert_eq!(back.dimension, dimension);
    assert_eq!(&*back.data, &data[..]);
});
