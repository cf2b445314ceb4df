//! Per-request guestbook configuration
//!
//! Resolved fresh on every request, never cached: an optional JSON file whose
//! location can be overridden through the `GUESTBOOK_CONFIG_LOCATION`
//! environment variable. Each field overrides its default independently; a
//! missing or wrongly-typed field keeps its own default without invalidating
//! the rest of the file.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::error::{ErrorKind, ServiceError};

pub const CONFIG_LOCATION_VAR: &str = "GUESTBOOK_CONFIG_LOCATION";
pub const DEFAULT_CONFIG_PATH: &str = "./guestbook.config.json";
pub const DEFAULT_ENTRIES_PATH: &str = "./guestbook.entries.json";

/// Runtime behavior flags for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookConfig {
    /// Path the config was resolved from (whether or not the file exists)
    pub config_file: String,
    /// Entries file location
    pub filename: String,
    /// Dump diagnostics into response bodies
    pub enable_debug: bool,
    /// Permit repeated submissions from the same (name, email) pair
    pub allow_duplicate_submissions: bool,
}

impl GuestbookConfig {
    fn defaults(config_file: String) -> Self {
        Self {
            config_file,
            filename: DEFAULT_ENTRIES_PATH.to_string(),
            enable_debug: false,
            allow_duplicate_submissions: false,
        }
    }

    /// Resolve the configuration for one request from the given environment
    /// snapshot. An absent config file yields all defaults; a file that
    /// exists but is not valid JSON fails the request with `CorruptConfig`.
    pub async fn resolve(env: &HashMap<String, String>) -> Result<Self, ServiceError> {
        let config_file = env
            .get(CONFIG_LOCATION_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = Self::defaults(config_file);
        if !Path::new(&cfg.config_file).exists() {
            return Ok(cfg);
        }

        let raw = fs::read_to_string(&cfg.config_file)
            .await
            .map_err(|e| ErrorKind::CorruptConfig(e.to_string()))?;
        let parsed: Value =
            serde_json::from_str(&raw).map_err(|e| ErrorKind::CorruptConfig(e.to_string()))?;

        if let Some(filename) = parsed.get("filename").and_then(Value::as_str) {
            cfg.filename = filename.to_string();
        }
        if let Some(debug) = parsed.get("enable_debug").and_then(Value::as_bool) {
            cfg.enable_debug = debug;
        }
        if let Some(allow) = parsed
            .get("allow_duplicate_submissions")
            .and_then(Value::as_bool)
        {
            cfg.allow_duplicate_submissions = allow;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_pointing_at(path: &Path) -> HashMap<String, String> {
        HashMap::from([(
            CONFIG_LOCATION_VAR.to_string(),
            path.to_str().unwrap().to_string(),
        )])
    }

    #[tokio::test]
    async fn test_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_pointing_at(&dir.path().join("missing.json"));
        let cfg = GuestbookConfig::resolve(&env).await.unwrap();
        assert_eq!(cfg.filename, DEFAULT_ENTRIES_PATH);
        assert!(!cfg.enable_debug);
        assert!(!cfg.allow_duplicate_submissions);
    }

    #[tokio::test]
    async fn test_default_path_without_env_override() {
        let cfg = GuestbookConfig::resolve(&HashMap::new()).await.unwrap();
        assert_eq!(cfg.config_file, DEFAULT_CONFIG_PATH);
    }

    #[tokio::test]
    async fn test_all_fields_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guestbook.config.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"filename": "/tmp/e.json", "enable_debug": true, "allow_duplicate_submissions": true}}"#
        )
        .unwrap();

        let cfg = GuestbookConfig::resolve(&env_pointing_at(&path)).await.unwrap();
        assert_eq!(cfg.filename, "/tmp/e.json");
        assert!(cfg.enable_debug);
        assert!(cfg.allow_duplicate_submissions);
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_keeps_its_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guestbook.config.json");
        std::fs::write(
            &path,
            r#"{"filename": 42, "enable_debug": true}"#,
        )
        .unwrap();

        let cfg = GuestbookConfig::resolve(&env_pointing_at(&path)).await.unwrap();
        assert_eq!(cfg.filename, DEFAULT_ENTRIES_PATH);
        assert!(cfg.enable_debug);
    }

    #[tokio::test]
    async fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guestbook.config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = GuestbookConfig::resolve(&env_pointing_at(&path))
            .await
            .unwrap_err();
        assert_eq!(err.kind().name(), "CorruptConfigError");
    }
}
