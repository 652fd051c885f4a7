use thiserror::Error;
use vis4earth_volume_api::{FileIoError, VolumeDataError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    VolumeData(#[from] VolumeDataError),
    #[error(transparent)]
    FileIo(#[from] FileIoError),
}
