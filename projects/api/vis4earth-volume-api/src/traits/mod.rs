//! Traits implemented by render resource backends.

pub mod render_resource_factory;

pub use render_resource_factory::RenderResourceFactory;
