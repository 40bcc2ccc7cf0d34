// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Random URL-safe session token from the OS RNG.
/// 32 bytes encodes to a ~43 character cookie value.
pub fn new_session_token() -> String {
    let mut rng = OsRng;
    token_from_rng(&mut rng, SESSION_TOKEN_BYTES)
}

pub fn token_from_rng<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64_url_nopad(&buf)
}

/// SHA-256 fingerprint of a raw token, encoded for use as a document key.
/// Only fingerprints are stored; the raw token lives in the cookie.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    base64_url_nopad(&digest)
}

fn base64_url_nopad(bytes: &[u8]) -> String {
    // URL-safe, no padding: safe in cookies and query strings as-is.
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
