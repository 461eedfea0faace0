// Domain layer modules
pub mod post_request;
pub mod string_encoded;

// Re-exports
pub use post_request::{DecodeError, PostRequest};
