//! Render resource backends bundled with the API.

pub mod memory;

pub use memory::{InMemoryColorTexture, InMemoryResourceError, InMemoryResourceFactory, InMemoryVolume};
