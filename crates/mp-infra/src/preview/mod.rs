pub mod registry;

pub use registry::InMemoryPreviewRegistry;
