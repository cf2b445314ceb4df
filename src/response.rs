//! Response assembly module
//!
//! Builds the single JSON object every request answers with: the success
//! payload or an `error` field, plus diagnostics when debug mode is on.
//! The HTTP status is always 200 with the outcome embedded in the body;
//! clients of the original service depend on that contract.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Map, Value};

use crate::config::GuestbookConfig;
use crate::error::ServiceError;
use crate::handler::RequestContext;
use crate::logger;
use crate::store::GuestbookFile;

/// Accumulates the response body the way the request pipeline discovers it:
/// debug annotations first (once the config is known), then the operation's
/// payload or the error.
#[derive(Debug, Default)]
pub struct ResponseAssembler {
    body: Map<String, Value>,
    debug: bool,
}

impl ResponseAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn on debug annotations and record request/config diagnostics.
    pub fn enable_debug(&mut self, ctx: &RequestContext, cfg: &GuestbookConfig) {
        self.debug = true;
        let headers: Map<String, Value> = ctx
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        self.body.insert(
            "server_state".to_string(),
            json!({
                "method": ctx.method,
                "path": ctx.path,
                "headers": headers,
                "env": ctx.env,
            }),
        );
        self.body
            .insert("config_file".to_string(), Value::String(cfg.config_file.clone()));
        self.body
            .insert("entries_file".to_string(), Value::String(cfg.filename.clone()));
        self.body.insert(
            "allow_duplicate_submissions".to_string(),
            Value::Bool(cfg.allow_duplicate_submissions),
        );
    }

    /// Echo the raw, unparsed POST body. Recorded before parsing so it is
    /// present even when the payload turns out to be invalid.
    pub fn record_post_data(&mut self, raw_body: &str) {
        if self.debug {
            self.body
                .insert("post_data".to_string(), Value::String(raw_body.to_string()));
        }
    }

    /// Payload for a successful `list`: the whole guestbook file, or null
    /// when no entries file exists yet.
    pub fn set_entries(&mut self, book: Option<GuestbookFile>) {
        let value = book
            .map(|b| serde_json::to_value(b).unwrap_or(Value::Null))
            .unwrap_or(Value::Null);
        self.body.insert("entries".to_string(), value);
    }

    /// Payload for a successful `submit`.
    pub fn set_entry_saved(&mut self) {
        self.body.insert("entry_saved".to_string(), Value::Bool(true));
    }

    /// Convert a failure into the error envelope. Diagnostic detail is only
    /// exposed in debug mode since it leaks internal paths.
    pub fn set_error(&mut self, err: &ServiceError) {
        if self.debug {
            self.body.insert(
                "error_details".to_string(),
                json!({
                    "message": err.to_string(),
                    "kind": err.kind().name(),
                    "file": err.location().file(),
                    "line": err.location().line(),
                    "trace": format!(
                        "{} raised at {}:{}",
                        err.kind().name(),
                        err.location().file(),
                        err.location().line()
                    ),
                }),
            );
        }
        self.body
            .insert("error".to_string(), Value::String(err.to_string()));
    }

    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }
}

/// Build the JSON response: pretty-printed body, always 200.
pub fn build_json_response(body: &Map<String, Value>) -> Response<Full<Bytes>> {
    let json = serde_json::to_string_pretty(body).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize response: {e}"));
        r#"{"error":"Internal server error"}"#.to_string()
    });

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}
