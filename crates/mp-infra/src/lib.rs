pub mod config;
pub mod http;
pub mod preview;

pub use http::PortalApiClient;
pub use preview::InMemoryPreviewRegistry;
