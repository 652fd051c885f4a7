//! File I/O implementation using lightweight-mmap.

use crate::error::{VolumeDataError, VolumeDataResult};
use crate::file_io::FileIoError;
use crate::traits::RenderResourceFactory;
use crate::volume::{check_content_size, reorient_and_create, LoadedVolume};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::{Path, PathBuf};
use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};

/// Describes a headerless raw volume file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFromFileDesc {
    /// Name given to the created resource. Defaults to the file stem.
    pub name: String,
    /// Path of the raw file.
    pub path: PathBuf,
    /// Expected `[x, y, z]` extent; validated.
    pub dimension: [i64; 3],
    /// Voxel type stored in the file.
    pub voxel_type: VoxelType,
    /// Axis specification; validated. Defaults to `[1, 2, 3]`.
    pub axis: [i32; 3],
    /// Return an owned copy of the reoriented bytes alongside the resource.
    pub keep_buffer: bool,
}

impl LoadFromFileDesc {
    /// Describes `path` with the identity axis specification and no kept buffer.
    pub fn new(path: impl Into<PathBuf>, dimension: [i64; 3], voxel_type: VoxelType) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "volume".to_string());
        Self {
            name,
            path,
            dimension,
            voxel_type,
            axis: AxisSpec::IDENTITY.as_array(),
            keep_buffer: false,
        }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the axis specification.
    pub fn with_axis(mut self, axis: [i32; 3]) -> Self {
        self.axis = axis;
        self
    }

    /// Requests an owned copy of the reoriented bytes.
    pub fn keep_buffer(mut self, keep: bool) -> Self {
        self.keep_buffer = keep;
        self
    }
}

/// Loads a raw volume file, reorients it and uploads it through `factory`.
///
/// The file is memory mapped and reoriented straight from the mapping. Checks run in
/// order and the first failure is returned: dimension, file access, content size,
/// axis specification.
///
/// # Arguments
///
/// * `factory` - Backend creating the volume texture
/// * `desc` - File, expected layout and reorientation
///
/// # Errors
///
/// - [`VolumeDataError::InvalidDimension`] if a dimension component is not positive
/// - [`VolumeDataError::InvalidFilePath`] if the file cannot be opened or mapped
/// - [`VolumeDataError::ContentSizeMismatch`] if the file is not exactly one volume
/// - [`VolumeDataError::InvalidAxisSpec`] if the axis triple is not a signed permutation
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn load_from_file<F: RenderResourceFactory>(
    factory: &F,
    desc: &LoadFromFileDesc,
) -> VolumeDataResult<LoadedVolume<F::Volume>> {
    let dimension = Dimension::from_array(desc.dimension)?;
    let invalid_path = |source: FileIoError| VolumeDataError::InvalidFilePath {
        path: desc.path.clone(),
        source,
    };

    let handle = open_read_handle(&desc.path).map_err(invalid_path)?;
    let file_size = handle
        .size()
        .map_err(|e| FileIoError::FileSize(e.to_string()))
        .and_then(mapping_len)
        .map_err(invalid_path)?;
    check_content_size(
        &desc.path.display().to_string(),
        file_size,
        dimension,
        desc.voxel_type,
    )?;

    // Size matched, so the mapping covers exactly one volume.
    let mapping = ReadOnlyMmap::new(&handle, 0, file_size)
        .map_err(|e| invalid_path(FileIoError::MemoryMapping(e.to_string())))?;
    log::debug!(
        "Mapped {} ({} bytes)",
        desc.path.display(),
        mapping.as_slice().len()
    );

    reorient_and_create(
        factory,
        &desc.name,
        mapping.as_slice(),
        dimension,
        desc.voxel_type,
        desc.axis,
        desc.keep_buffer,
    )
}

/// Writes voxel bytes to a headerless raw file, replacing any existing file.
///
/// # Arguments
///
/// * `path` - Output path. The parent directory must exist.
/// * `data` - Bytes to write; must not be empty.
pub fn write_raw_volume(path: &Path, data: &[u8]) -> Result<(), FileIoError> {
    let path_str = path.to_str().ok_or(FileIoError::NonUtf8Path)?;
    let handle = ReadWriteFileHandle::create_preallocated(path_str, data.len() as i64)
        .map_err(|e| FileIoError::FileHandle(e.to_string()))?;
    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())
        .map_err(|e| FileIoError::MemoryMapping(e.to_string()))?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}

/// Converts a reported file size into a mappable length.
fn mapping_len(file_size: i64) -> Result<usize, FileIoError> {
    usize::try_from(file_size).map_err(|_| {
        FileIoError::FileSize(format!("{file_size} bytes cannot be mapped on this target"))
    })
}

fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, FileIoError> {
    let path_str = path.to_str().ok_or(FileIoError::NonUtf8Path)?;
    ReadOnlyFileHandle::open(path_str).map_err(|e| FileIoError::FileHandle(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{mapping_len, FileIoError};
    use crate::test_prelude::*;

    #[test]
    fn loads_and_reorients_file() {
        let file = create_input_file_with_data(b"abcd");
        let desc = LoadFromFileDesc::new(file.path(), [2, 2, 1], VoxelType::UInt8)
            .with_axis([2, 1, 3])
            .keep_buffer(true);
        let loaded = load_from_file(&InMemoryResourceFactory, &desc).unwrap();

        assert_eq!(loaded.resource.data, b"acbd");
        assert_eq!(loaded.buffer.as_deref(), Some(&b"acbd"[..]));
    }

    #[test]
    fn name_defaults_to_file_stem() {
        let desc = LoadFromFileDesc::new("/data/ct_scan.raw", [1, 1, 1], VoxelType::UInt8);
        assert_eq!(desc.name, "ct_scan");
        assert_eq!(desc.with_name("ct").name, "ct");
    }

    #[rstest]
    #[case(VoxelType::UInt8, 7)]
    #[case(VoxelType::UInt8, 9)]
    #[case(VoxelType::UInt16, 8)]
    #[case(VoxelType::Float32, 16)]
    fn wrong_file_size_is_content_mismatch(#[case] voxel_type: VoxelType, #[case] len: usize) {
        let file = create_input_file_with_data(&vec![0u8; len]);
        let desc = LoadFromFileDesc::new(file.path(), [2, 2, 2], voxel_type);
        match load_from_file(&InMemoryResourceFactory, &desc) {
            Err(VolumeDataError::ContentSizeMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 8 * voxel_type.size());
                assert_eq!(actual, len);
            }
            other => panic!("expected ContentSizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let desc = LoadFromFileDesc::new(dir.path().join("missing.raw"), [1, 1, 1], VoxelType::UInt8);
        assert!(matches!(
            load_from_file(&InMemoryResourceFactory, &desc),
            Err(VolumeDataError::InvalidFilePath { .. })
        ));
    }

    #[test]
    fn dimension_is_checked_before_file_access() {
        let dir = tempfile::tempdir().unwrap();
        let desc = LoadFromFileDesc::new(dir.path().join("missing.raw"), [1, 0, 1], VoxelType::UInt8);
        assert!(matches!(
            load_from_file(&InMemoryResourceFactory, &desc),
            Err(VolumeDataError::InvalidDimension(_))
        ));
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    fn unrepresentable_file_size_is_rejected(#[case] file_size: i64) {
        assert!(matches!(
            mapping_len(file_size),
            Err(FileIoError::FileSize(_))
        ));
    }

    #[test]
    fn file_size_converts_without_truncation() {
        assert_eq!(mapping_len(0).unwrap(), 0);
        assert_eq!(mapping_len(8).unwrap(), 8);
        #[cfg(target_pointer_width = "32")]
        assert!(mapping_len(i64::from(u32::MAX) + 1).is_err());
        #[cfg(target_pointer_width = "64")]
        assert_eq!(mapping_len(i64::MAX).unwrap(), i64::MAX as usize);
    }

    #[test]
    fn write_raw_volume_round_trips() {
        let output = create_output_file();
        write_raw_volume(output.path(), b"voxels").unwrap();
        assert_eq!(read_file_contents(output.path()).unwrap(), b"voxels");
    }
}
