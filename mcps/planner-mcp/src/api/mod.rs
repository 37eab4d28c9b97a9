//! Planner API client
//!
//! Request type, transport trait, and the reqwest-backed transport.

pub mod error;
pub mod http;
pub mod transport;

pub use error::{ApiError, ApiResult};
pub use http::HttpTransport;
pub use transport::{ApiPath, ApiRequest, ApiTransport, Method};
