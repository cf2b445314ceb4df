//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: captures the request context,
//! resolves the per-request guestbook config, dispatches the operation, and
//! envelopes the outcome as JSON. Every taxonomy error is converted into the
//! error envelope here; nothing in the pipeline crashes the service.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use serde_json::{Map, Value};

use super::{validate, RequestContext};
use crate::config::{AppState, GuestbookConfig};
use crate::error::{ErrorKind, ServiceError};
use crate::logger;
use crate::response::{self, ResponseAssembler};

/// The single resource this service exposes.
pub const ENTRIES_PATH: &str = "/entries";

/// Supported operations on the guestbook resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Submit,
}

/// Flat two-branch dispatch: one resource path, GET or POST.
pub fn route(path: &str, method: &str) -> Result<Operation, ServiceError> {
    if path != ENTRIES_PATH {
        return Err(ErrorKind::UnsupportedPath(path.to_string()).into());
    }
    match method {
        "GET" => Ok(Operation::List),
        "POST" => Ok(Operation::Submit),
        other => Err(ErrorKind::UnsupportedMethod(other.to_string()).into()),
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    if state.config.logging.access_log {
        logger::log_request(&method, &path);
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();

    let raw_body = match req.into_body().collect().await {
        Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).into_owned(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            String::new()
        }
    };

    let ctx = RequestContext {
        method,
        path,
        headers,
        raw_body,
        env: std::env::vars().collect(),
    };

    let body = process_request(&ctx, &state).await;
    Ok(response::build_json_response(&body))
}

/// Run the full pipeline for one request and assemble the response body.
pub(crate) async fn process_request(ctx: &RequestContext, state: &AppState) -> Map<String, Value> {
    let mut assembler = ResponseAssembler::new();
    if let Err(err) = run_operation(ctx, state, &mut assembler).await {
        logger::log_request_failed(&err.to_string());
        assembler.set_error(&err);
    }
    assembler.into_body()
}

async fn run_operation(
    ctx: &RequestContext,
    state: &AppState,
    assembler: &mut ResponseAssembler,
) -> Result<(), ServiceError> {
    // Config is resolved fresh on every request, never cached across requests.
    let cfg = GuestbookConfig::resolve(&ctx.env).await?;
    if cfg.enable_debug {
        assembler.enable_debug(ctx, &cfg);
    }

    match route(&ctx.path, &ctx.method)? {
        Operation::List => {
            let book = state.store.read_all(&cfg.filename).await?;
            assembler.set_entries(book);
        }
        Operation::Submit => {
            // Echoed before parsing so debug responses carry the body even
            // when it fails validation.
            assembler.record_post_data(&ctx.raw_body);
            let payload: Option<Value> = serde_json::from_str(&ctx.raw_body).ok();
            let entry = validate::validate_submission(payload.as_ref())?;
            state
                .store
                .append(&cfg.filename, entry, cfg.allow_duplicate_submissions)
                .await?;
            assembler.set_entry_saved();
        }
    }
    Ok(())
}
