//! Element type of a raw volume.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// The scalar type stored in each voxel of a raw volume file.
///
/// All multi-byte types are stored little-endian.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum VoxelType {
    /// Unsigned 8-bit integer.
    UInt8 = 0,
    /// Unsigned 16-bit integer.
    UInt16 = 1,
    /// 32-bit IEEE-754 float.
    Float32 = 2,
}

/// Errors raised when converting a tag or a name into a [`VoxelType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoxelTypeError {
    /// The numeric tag does not name a voxel type.
    #[error("Invalid voxel type tag {0}")]
    UnknownTag(u8),

    /// The name does not name a voxel type.
    #[error("Invalid voxel type '{0}', expected one of uint8, uint16, float32")]
    UnknownName(String),
}

impl VoxelType {
    /// Size of a single voxel in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            VoxelType::UInt8 => 1,
            VoxelType::UInt16 => 2,
            VoxelType::Float32 => 4,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            VoxelType::UInt8 => "uint8",
            VoxelType::UInt16 => "uint16",
            VoxelType::Float32 => "float32",
        }
    }
}

impl TryFrom<u8> for VoxelType {
    type Error = VoxelTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VoxelType::UInt8),
            1 => Ok(VoxelType::UInt16),
            2 => Ok(VoxelType::Float32),
            other => Err(VoxelTypeError::UnknownTag(other)),
        }
    }
}

impl FromStr for VoxelType {
    type Err = VoxelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALIASES: [(&str, VoxelType); 6] = [
            ("uint8", VoxelType::UInt8),
            ("u8", VoxelType::UInt8),
            ("uint16", VoxelType::UInt16),
            ("u16", VoxelType::UInt16),
            ("float32", VoxelType::Float32),
            ("f32", VoxelType::Float32),
        ];

        let name = s.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, voxel_type)| *voxel_type)
            .ok_or_else(|| VoxelTypeError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for VoxelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
