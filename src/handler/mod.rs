//! Request handler module
//!
//! Request routing dispatch, submission validation, and the per-request
//! processing pipeline around the entry store.

pub mod router;
pub mod validate;

use std::collections::HashMap;

// Re-export main entry point
pub use router::handle_request;

/// Everything a request handler is allowed to look at, captured once by the
/// transport layer. The pipeline below never reads ambient global state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// Raw request body, echoed back verbatim in debug responses
    pub raw_body: String,
    /// Environment snapshot taken when the request arrived
    pub env: HashMap<String, String>,
}
