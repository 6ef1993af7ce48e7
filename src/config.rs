// src/config.rs
use crate::errors::ServerError;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

pub const CONFIG_FILE: &str = "nyaydoot.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Rows per "Load More" page on the public board. `None` shows everything.
    pub board_page_size: Option<usize>,
    /// Idle report sessions older than this are dropped.
    pub session_ttl_secs: i64,
    /// Upper bound on live sessions; the least recently seen is dropped first.
    pub max_sessions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            board_page_size: None,
            session_ttl_secs: 60 * 60,
            max_sessions: 10_000,
        }
    }
}

/// Shape of `nyaydoot.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    max_workers: Option<usize>,
    board_page_size: Option<usize>,
    session_ttl_secs: Option<i64>,
    max_sessions: Option<usize>,
}

/// Defaults, then `nyaydoot.toml` (if present), then `NYAYDOOT_*` env vars.
pub fn load_settings() -> Result<Settings, ServerError> {
    let mut settings = Settings::default();

    if Path::new(CONFIG_FILE).exists() {
        let raw = fs::read_to_string(CONFIG_FILE)
            .map_err(|e| ServerError::Config(format!("read {CONFIG_FILE} failed: {e}")))?;
        apply_file(&mut settings, &raw)?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> Result<(), ServerError> {
    let file: FileSettings = toml::from_str(raw)
        .map_err(|e| ServerError::Config(format!("invalid {CONFIG_FILE}: {e}")))?;

    if let Some(v) = file.bind_addr {
        settings.bind_addr = parse_addr(&v)?;
    }
    if let Some(v) = file.max_workers {
        settings.max_workers = v;
    }
    if let Some(v) = file.board_page_size {
        settings.board_page_size = page_size(v);
    }
    if let Some(v) = file.session_ttl_secs {
        settings.session_ttl_secs = v;
    }
    if let Some(v) = file.max_sessions {
        settings.max_sessions = v;
    }
    Ok(())
}

fn apply_env<F>(settings: &mut Settings, lookup: F) -> Result<(), ServerError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("NYAYDOOT_BIND_ADDR") {
        settings.bind_addr = parse_addr(&v)?;
    }
    if let Some(v) = lookup("NYAYDOOT_MAX_WORKERS") {
        settings.max_workers = parse_number("NYAYDOOT_MAX_WORKERS", &v)?;
    }
    if let Some(v) = lookup("NYAYDOOT_BOARD_PAGE_SIZE") {
        settings.board_page_size = page_size(parse_number("NYAYDOOT_BOARD_PAGE_SIZE", &v)?);
    }
    if let Some(v) = lookup("NYAYDOOT_SESSION_TTL_SECS") {
        settings.session_ttl_secs = parse_number("NYAYDOOT_SESSION_TTL_SECS", &v)?;
    }
    if let Some(v) = lookup("NYAYDOOT_MAX_SESSIONS") {
        settings.max_sessions = parse_number("NYAYDOOT_MAX_SESSIONS", &v)?;
    }
    Ok(())
}

// 0 means "no paging"
fn page_size(v: usize) -> Option<usize> {
    (v > 0).then_some(v)
}

fn parse_addr(raw: &str) -> Result<SocketAddr, ServerError> {
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid bind address {raw:?}: {e}")))
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid {key} {raw:?}: {e}")))
}
