// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;

/// Form bodies larger than this are refused.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in order. Repeated keys
/// are kept (file inputs with `multiple` send one pair per file).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn parse(raw: &str) -> Self {
        Self(url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri().query().map(Self::parse).unwrap_or_default()
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses `key` as a number; missing or malformed is a bad request.
    pub fn require_number<T: std::str::FromStr>(&self, key: &str) -> Result<T, ServerError> {
        let raw = self
            .get(key)
            .ok_or_else(|| ServerError::BadRequest(format!("missing field {key}")))?;
        raw.trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid {key}: {raw:?}")))
    }
}

/// Reads and decodes a url-encoded request body.
pub fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut raw = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    Ok(Params::parse(&raw))
}
