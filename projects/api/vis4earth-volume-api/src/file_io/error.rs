use thiserror::Error;

/// Errors raised while opening, mapping or writing a raw volume file.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// The path cannot be passed to the operating system as UTF-8.
    #[error("Path is not valid UTF-8")]
    NonUtf8Path,

    /// The file could not be opened or created.
    #[error("Failed to open file handle: {0}")]
    FileHandle(String),

    /// The file size could not be queried.
    #[error("Failed to query file size: {0}")]
    FileSize(String),

    /// The file could not be memory mapped.
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(String),
}
