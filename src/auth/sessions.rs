// src/auth/sessions.rs
//
// Sessions live in one wholesale document: a map from token fingerprint
// to session record. The raw token only ever exists in the cookie.

use crate::auth::token::{new_session_token, token_fingerprint};
use crate::errors::ServerError;
use crate::store::LocalStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SESSIONS_KEY: &str = "sessions";
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: i64,
    pub created_at: i64,
    pub expires_at: i64,
}

type SessionMap = BTreeMap<String, SessionRecord>;

fn load_sessions(store: &LocalStore) -> Result<SessionMap, ServerError> {
    Ok(store.get_json(SESSIONS_KEY)?.unwrap_or_default())
}

/// Mint a session for `user_id` and return the raw token for the cookie.
/// Expired entries are swept out on the same write.
pub fn create_session(store: &LocalStore, user_id: i64, now: i64) -> Result<String, ServerError> {
    let token = new_session_token();

    let mut sessions = load_sessions(store)?;
    sessions.retain(|_, record| record.expires_at > now);
    sessions.insert(
        token_fingerprint(&token),
        SessionRecord {
            user_id,
            created_at: now,
            expires_at: now + SESSION_TTL_SECS,
        },
    );
    store.put_json(SESSIONS_KEY, &sessions, now)?;

    Ok(token)
}

/// Resolve a raw cookie token to a user id. Unknown or expired tokens
/// resolve to signed-out, not to an error.
pub fn resolve_session(
    store: &LocalStore,
    raw_token: &str,
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let sessions = load_sessions(store)?;

    Ok(sessions
        .get(&token_fingerprint(raw_token))
        .filter(|record| record.expires_at > now)
        .map(|record| record.user_id))
}

/// Drop the session for a raw token. Unknown tokens are a no-op.
pub fn revoke_session(store: &LocalStore, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let mut sessions = load_sessions(store)?;
    if sessions.remove(&token_fingerprint(raw_token)).is_some() {
        store.put_json(SESSIONS_KEY, &sessions, now)?;
    }
    Ok(())
}
