use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vis4earth_dds::DdsResourceFactory;
use vis4earth_volume_api::{
    load_from_file, smooth_from_flat_array, write_raw_volume, LoadFromFileDesc,
    SmoothFromFlatArrayDesc,
};
use vis4earth_volume_common::VoxelType;
use vis4earth_volume_smooth::{SmoothDimension, SmoothKind, SmoothSettings};

#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[derive(FromArgs, Debug)]
/// Load headerless raw volumes and write them as DDS 3D textures
#[argh(subcommand, name = "volume")]
pub struct VolumeCmd {
    /// raw volume files sharing one layout
    #[argh(positional)]
    pub input: Vec<PathBuf>,

    /// output directory path
    #[argh(option, from_str_fn(crate::util::canonicalize_cli_path))]
    pub output: PathBuf,

    /// extent of every input as X,Y,Z
    #[argh(option, from_str_fn(crate::util::parse_dimension))]
    pub dimension: [i64; 3],

    /// voxel type (uint8, uint16, float32)
    #[argh(option)]
    pub voxel_type: VoxelType,

    /// signed axis permutation as a,b,c [default: 1,2,3]
    #[argh(option, from_str_fn(crate::util::parse_axis), default = "[1, 2, 3]")]
    pub axis: [i32; 3],

    /// also write a smoothed volume using this reduction (max, average)
    #[argh(option)]
    pub smooth: Option<SmoothKind>,

    /// neighbourhood used with --smooth (xy, xyz) [default: xyz]
    #[argh(option, default = "SmoothDimension::Xyz")]
    pub smooth_dimension: SmoothDimension,

    /// also write the reoriented voxels as a raw file
    #[argh(switch)]
    pub raw: bool,
}

pub fn handle_volume_command(cmd: VolumeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let factory = DdsResourceFactory::new(&cmd.output);
    println!("Found {} volumes to convert", cmd.input.len());

    let start = Instant::now();

    #[cfg(feature = "multithreaded")]
    let inputs = cmd.input.par_iter();
    #[cfg(not(feature = "multithreaded"))]
    let inputs = cmd.input.iter();

    inputs.for_each(|path| {
        handle_process_entry_error(path, process_volume(path, &cmd, &factory));
    });

    println!("Conversion completed in {:.2?}", start.elapsed());
    Ok(())
}

fn process_volume(
    path: &Path,
    cmd: &VolumeCmd,
    factory: &DdsResourceFactory,
) -> Result<(), CliError> {
    let keep_buffer = cmd.raw || cmd.smooth.is_some();
    let desc = LoadFromFileDesc::new(path, cmd.dimension, cmd.voxel_type)
        .with_axis(cmd.axis)
        .keep_buffer(keep_buffer);

    let loaded = load_from_file(factory, &desc)?;
    println!(
        "{} -> {} ({}, {})",
        path.display(),
        loaded.resource.path.display(),
        loaded.dimension,
        ByteSize(loaded.dimension.byte_len(loaded.voxel_type) as u64)
    );

    let Some(buffer) = loaded.buffer.as_deref() else {
        return Ok(());
    };

    if cmd.raw {
        let raw_path = cmd.output.join(format!("{}_reoriented.raw", desc.name));
        write_raw_volume(&raw_path, buffer)?;
        println!("{} -> {}", path.display(), raw_path.display());
    }

    if let Some(kind) = cmd.smooth {
        let settings = SmoothSettings::new(cmd.smooth_dimension, kind);
        let smoothed = smooth_from_flat_array(
            factory,
            &SmoothFromFlatArrayDesc {
                name: format!("{}_{}_{}", desc.name, settings.kind, settings.dimension),
                data: buffer,
                dimension: loaded.dimension,
                voxel_type: loaded.voxel_type,
                settings,
                keep_buffer: false,
            },
        )?;
        println!(
            "{} -> {}",
            path.display(),
            smoothed.resource.path.display()
        );
    }

    Ok(())
}
