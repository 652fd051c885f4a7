//! End-to-end tests: raw file on disk to render resources, through the in-memory backend.

use rstest::rstest;
use tempfile::NamedTempFile;
use vis4earth_transfer_function::{Channel, PreIntegrationSettings, RESOLUTION};
use vis4earth_volume_api::*;
use vis4earth_volume_common::VoxelType;
use vis4earth_volume_smooth::{SmoothDimension, SmoothKind, SmoothSettings};

fn u16_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn read_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

#[test]
fn load_flip_and_smooth_u16_file() {
    let file = NamedTempFile::new().unwrap();
    write_raw_volume(file.path(), &u16_bytes(&[1, 2, 3])).unwrap();

    let desc = LoadFromFileDesc::new(file.path(), [3, 1, 1], VoxelType::UInt16)
        .with_name("density")
        .with_axis([-1, 2, 3])
        .keep_buffer(true);
    let loaded = load_from_file(&InMemoryResourceFactory, &desc).unwrap();
    assert_eq!(loaded.resource.desc.name, "density");
    assert_eq!(read_u16(&loaded.resource.data), [3, 2, 1]);

    let buffer = loaded.buffer.unwrap();
    let smoothed = smooth_from_flat_array(
        &InMemoryResourceFactory,
        &SmoothFromFlatArrayDesc {
            name: "density_smoothed".into(),
            data: &buffer,
            dimension: loaded.dimension,
            voxel_type: loaded.voxel_type,
            settings: SmoothSettings::new(SmoothDimension::Xy, SmoothKind::Average),
            keep_buffer: false,
        },
    )
    .unwrap();

    // Averages: (3+2)/2 rounds up, (3+2+1)/3, (2+1)/2 rounds up.
    assert_eq!(read_u16(&smoothed.resource.data), [3, 2, 2]);
    assert_eq!(smoothed.resource.desc.format, PixelFormat::G16);
}

#[rstest]
#[case([1, 2, 3])]
#[case([3, 2, 1])]
#[case([-2, 3, -1])]
fn loading_from_file_matches_loading_from_memory(#[case] axis: [i32; 3]) {
    let data: Vec<u8> = (0..60).collect();
    let file = NamedTempFile::new().unwrap();
    write_raw_volume(file.path(), &data).unwrap();

    let from_file = load_from_file(
        &InMemoryResourceFactory,
        &LoadFromFileDesc::new(file.path(), [5, 4, 3], VoxelType::UInt8).with_axis(axis),
    )
    .unwrap();
    let from_memory = load_from_memory(
        &InMemoryResourceFactory,
        &LoadFromMemoryDesc::new("memory", &data, [5, 4, 3], VoxelType::UInt8).with_axis(axis),
    )
    .unwrap();

    assert_eq!(from_file.dimension, from_memory.dimension);
    assert_eq!(from_file.resource.data, from_memory.resource.data);
}

#[test]
fn edit_save_and_reload_transfer_function() {
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), "0 255 0 0 255\n255 0 0 255 255\n").unwrap();

    let mut loaded = load_transfer_function(
        &InMemoryResourceFactory,
        &TransferFunctionDesc::new(input.path()).with_name("tf"),
    )
    .unwrap();
    loaded.curve.channel_mut(Channel::Alpha).add_key(128.0, 0.0);
    let edited = update_color_ramp(
        &InMemoryResourceFactory,
        &mut loaded.color_ramp,
        &loaded.curve,
    )
    .unwrap();

    let output = NamedTempFile::new().unwrap();
    save_transfer_function(Some(&loaded.curve), output.path()).unwrap();
    let reloaded =
        load_transfer_function(&InMemoryResourceFactory, &TransferFunctionDesc::new(output.path()))
            .unwrap();

    for scalar in 0..RESOLUTION {
        let before = edited.texel(scalar).unwrap();
        let after = reloaded.ramp.texel(scalar).unwrap();
        for (b, a) in before.iter().zip(after) {
            assert!((b - a).abs() < 1e-3, "scalar {scalar}: {before:?} != {after:?}");
        }
    }

    let table = create_pre_integrated_table(
        &InMemoryResourceFactory,
        "tf_preint",
        &reloaded.ramp,
        PreIntegrationSettings::default(),
    )
    .unwrap();
    assert_eq!(table.texels.len(), RESOLUTION * RESOLUTION * 4);
}
