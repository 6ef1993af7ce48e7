// src/sessions/mod.rs
//
// Per-visitor view state that has to outlive a single request: the report
// wizard and the lawyer carousel. In memory only; a restart forgets it.

pub mod token;

use crate::domain::lawyer::LawyerSelector;
use crate::domain::wizard::ReportWizard;
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use token::{hash_token, new_session_token};

pub const SESSION_COOKIE: &str = "nyaydoot_session";

#[derive(Debug, Default)]
pub struct Session {
    pub wizard: ReportWizard,
    pub lawyers: LawyerSelector,
    /// One-shot message shown on the next page render.
    pub notice: Option<String>,
    last_seen: i64,
}

impl Session {
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

/// The cookie value a request ended up using.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub token: String,
    /// True when the visitor needs a `Set-Cookie`.
    pub is_new: bool,
}

impl SessionHandle {
    pub fn set_cookie_header(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.token
        )
    }
}

/// Expired sessions are swept at most this often.
pub const SWEEP_INTERVAL_SECS: i64 = 60;

struct Sessions {
    by_hash: HashMap<[u8; 32], Session>,
    last_sweep: i64,
}

pub struct SessionStore {
    ttl_secs: i64,
    max_sessions: usize,
    inner: Mutex<Sessions>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64, max_sessions: usize) -> Self {
        Self {
            ttl_secs,
            max_sessions: max_sessions.max(1),
            inner: Mutex::new(Sessions {
                by_hash: HashMap::new(),
                last_sweep: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Sessions>, ServerError> {
        self.inner.lock().map_err(|_| {
            tracing::error!("session store mutex poisoned");
            ServerError::InternalError
        })
    }

    /// Runs `f` against the visitor's live session, if any. Never creates one.
    pub fn peek_session<T, F>(&self, cookie_token: Option<&str>, now: i64, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(Option<&mut Session>) -> T,
    {
        let mut store = self.lock()?;
        self.sweep(&mut store, now);

        let ttl = self.ttl_secs;
        let session = match cookie_token {
            Some(t) => store
                .by_hash
                .get_mut(&hash_token(t))
                .filter(|s| now - s.last_seen < ttl),
            None => None,
        };
        Ok(match session {
            Some(session) => {
                session.last_seen = now;
                f(Some(session))
            }
            None => f(None),
        })
    }

    /// Runs `f` against the visitor's session, creating one when the cookie is
    /// missing, unknown or expired. A full store drops its least recently
    /// seen session to make room.
    pub fn with_session<T, F>(
        &self,
        cookie_token: Option<&str>,
        now: i64,
        f: F,
    ) -> Result<(SessionHandle, T), ServerError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut store = self.lock()?;
        self.sweep(&mut store, now);

        let ttl = self.ttl_secs;
        let mut live = None;
        if let Some(t) = cookie_token {
            let key = hash_token(t);
            match store.by_hash.get(&key).map(|s| now - s.last_seen < ttl) {
                Some(true) => live = Some(t),
                // Stale but not swept yet.
                Some(false) => {
                    store.by_hash.remove(&key);
                }
                None => {}
            }
        }

        let handle = match live {
            Some(t) => SessionHandle {
                token: t.to_string(),
                is_new: false,
            },
            None => {
                if store.by_hash.len() >= self.max_sessions {
                    evict_oldest(&mut store.by_hash);
                }
                SessionHandle {
                    token: new_session_token(),
                    is_new: true,
                }
            }
        };

        let session = store.by_hash.entry(hash_token(&handle.token)).or_default();
        session.last_seen = now;
        let out = f(session);

        Ok((handle, out))
    }

    fn sweep(&self, store: &mut Sessions, now: i64) {
        if now - store.last_sweep < SWEEP_INTERVAL_SECS {
            return;
        }
        store.last_sweep = now;

        let ttl = self.ttl_secs;
        let before = store.by_hash.len();
        store.by_hash.retain(|_, s| now - s.last_seen < ttl);
        if store.by_hash.len() < before {
            tracing::debug!(evicted = before - store.by_hash.len(), "expired sessions dropped");
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|s| s.by_hash.len()).unwrap_or(0)
    }
}

fn evict_oldest(sessions: &mut HashMap<[u8; 32], Session>) {
    let oldest = sessions
        .iter()
        .min_by_key(|(_, s)| s.last_seen)
        .map(|(key, _)| *key);
    if let Some(key) = oldest {
        sessions.remove(&key);
        tracing::debug!("session store full, oldest session dropped");
    }
}

/// Pulls our session token out of a `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::Step;

    #[test]
    fn missing_cookie_starts_a_new_session() {
        let store = SessionStore::new(60, 100);
        let (handle, step) = store.with_session(None, 0, |s| s.wizard.step()).unwrap();
        assert!(handle.is_new);
        assert_eq!(step, Step::BasicDetails);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn known_cookie_resumes_the_same_session() {
        let store = SessionStore::new(60, 100);
        let (handle, _) = store.with_session(None, 0, |s| s.wizard.next()).unwrap();

        let (again, step) = store
            .with_session(Some(&handle.token), 10, |s| s.wizard.step())
            .unwrap();
        assert!(!again.is_new);
        assert_eq!(again.token, handle.token);
        assert_eq!(step, Step::Evidence);
    }

    #[test]
    fn unknown_cookie_is_replaced() {
        let store = SessionStore::new(60, 100);
        let (handle, _) = store.with_session(Some("forged"), 0, |_| ()).unwrap();
        assert!(handle.is_new);
        assert_ne!(handle.token, "forged");
    }

    #[test]
    fn idle_sessions_expire() {
        let store = SessionStore::new(60, 100);
        let (handle, _) = store.with_session(None, 0, |s| s.wizard.next()).unwrap();

        let (again, step) = store
            .with_session(Some(&handle.token), 61, |s| s.wizard.step())
            .unwrap();
        assert!(again.is_new);
        assert_eq!(step, Step::BasicDetails);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn peeking_without_a_cookie_stores_nothing() {
        let store = SessionStore::new(3600, 100);
        for now in 0..500 {
            let step = store
                .peek_session(None, now, |s| s.map(|s| s.wizard.step()))
                .unwrap();
            assert_eq!(step, None);
        }
        let seen = store.peek_session(Some("forged"), 0, |s| s.is_some()).unwrap();
        assert!(!seen);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn peeking_sees_a_live_session() {
        let store = SessionStore::new(60, 100);
        let (handle, _) = store.with_session(None, 0, |s| s.wizard.next()).unwrap();

        let step = store
            .peek_session(Some(&handle.token), 30, |s| s.map(|s| s.wizard.step()))
            .unwrap();
        assert_eq!(step, Some(Step::Evidence));

        // 30 + 59 is still inside the TTL because peeking refreshed it.
        let step = store
            .peek_session(Some(&handle.token), 89, |s| s.map(|s| s.wizard.step()))
            .unwrap();
        assert_eq!(step, Some(Step::Evidence));

        let step = store
            .peek_session(Some(&handle.token), 200, |s| s.map(|s| s.wizard.step()))
            .unwrap();
        assert_eq!(step, None);
    }

    #[test]
    fn full_store_drops_the_least_recently_seen() {
        let store = SessionStore::new(3600, 2);
        let (first, _) = store.with_session(None, 0, |_| ()).unwrap();
        let (second, _) = store.with_session(None, 1, |_| ()).unwrap();
        // Touch the first so the second becomes the oldest.
        store.with_session(Some(&first.token), 2, |_| ()).unwrap();

        store.with_session(None, 3, |_| ()).unwrap();
        assert_eq!(store.len(), 2);

        let (again, _) = store.with_session(Some(&first.token), 4, |_| ()).unwrap();
        assert!(!again.is_new);
        let known = store.peek_session(Some(&second.token), 4, |s| s.is_some()).unwrap();
        assert!(!known);
    }

    #[test]
    fn cookieless_posts_are_capped() {
        let store = SessionStore::new(3600, 50);
        for now in 0..1_000 {
            store.with_session(None, now, |_| ()).unwrap();
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn notices_are_one_shot() {
        let mut session = Session::default();
        session.notice = Some("done".into());
        assert_eq!(session.take_notice().as_deref(), Some("done"));
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn cookie_header_parsing() {
        assert_eq!(
            token_from_cookie_header("theme=dark; nyaydoot_session=abc-_1; other=x"),
            Some("abc-_1")
        );
        assert_eq!(token_from_cookie_header("nyaydoot_session="), None);
        assert_eq!(token_from_cookie_header("theme=dark"), None);

        let handle = SessionHandle {
            token: "tok".into(),
            is_new: true,
        };
        assert_eq!(
            handle.set_cookie_header(),
            "nyaydoot_session=tok; Path=/; HttpOnly; SameSite=Lax"
        );
    }
}
