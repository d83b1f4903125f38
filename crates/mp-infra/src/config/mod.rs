pub mod portal_api_config;

pub use portal_api_config::PortalApiConfig;
