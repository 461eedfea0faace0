// Infrastructure layer modules
pub mod gateway_response;
pub mod logging;

// Re-exports
pub use gateway_response::{into_http_response, into_proxy_response, proxy_request_body};
pub use logging::init_logging;
