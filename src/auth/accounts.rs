// src/auth/accounts.rs
//
// Demo account flow: registered users are one wholesale JSON array,
// pending registrations one wholesale map, and the verification code is
// the fixed demo value. Passwords are matched in plaintext; this is a
// toy flow, not account security.

use crate::errors::ServerError;
use crate::store::LocalStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const USERS_KEY: &str = "users";
pub const PENDING_KEY: &str = "pending";

pub const DEMO_VERIFICATION_CODE: &str = "123456";

const PASSWORD_SPECIALS: &str = "!?@#$%^&*";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl UserAccount {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub requested_at: i64,
}

/// Step-1 form input, validated by `begin_registration`.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Trim + lowercase, minimal sanity check: local@domain.tld shape.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !email.chars().any(char::is_whitespace)
                && !domain.contains('@')
                && match domain.rsplit_once('.') {
                    Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                    None => false,
                }
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(ServerError::BadRequest(
            "Please enter a valid email address.".into(),
        ))
    }
}

/// At least 6 characters, 1 uppercase, 1 lowercase, and 1 special
/// character from `!?@#$%^&*`.
pub fn password_is_acceptable(password: &str) -> bool {
    password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn password_rule_error() -> ServerError {
    ServerError::BadRequest(format!(
        "Password must be at least 6 characters long, with at least 1 uppercase letter, \
         1 lowercase letter, and 1 special character ({PASSWORD_SPECIALS})."
    ))
}

fn load_users(store: &LocalStore) -> Result<Vec<UserAccount>, ServerError> {
    Ok(store.get_json(USERS_KEY)?.unwrap_or_default())
}

fn load_pending(
    store: &LocalStore,
) -> Result<BTreeMap<String, PendingRegistration>, ServerError> {
    Ok(store.get_json(PENDING_KEY)?.unwrap_or_default())
}

/// Step 1 of registration: validate the form, reject duplicate emails,
/// and park the record until the code is entered. Re-submitting replaces
/// any earlier pending record for the same email.
pub fn begin_registration(
    store: &LocalStore,
    request: RegistrationRequest,
    now: i64,
) -> Result<String, ServerError> {
    let email = normalize_email(&request.email)?;

    if !password_is_acceptable(&request.password) {
        return Err(password_rule_error());
    }

    if load_users(store)?.iter().any(|user| user.email == email) {
        return Err(ServerError::BadRequest(format!(
            "An account already exists for {email}."
        )));
    }

    let mut pending = load_pending(store)?;
    pending.insert(
        email.clone(),
        PendingRegistration {
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: email.clone(),
            password: request.password,
            requested_at: now,
        },
    );
    store.put_json(PENDING_KEY, &pending, now)?;

    // Demo flow: no mailer, the code is fixed and logged instead.
    eprintln!("📧 Verification code for {email}: {DEMO_VERIFICATION_CODE}");

    Ok(email)
}

/// Step 2 of registration: the code must be the demo code, after which
/// the pending record is promoted into the user collection.
pub fn complete_registration(
    store: &LocalStore,
    email: &str,
    code: &str,
    now: i64,
) -> Result<UserAccount, ServerError> {
    let email = normalize_email(email)?;

    if code.trim() != DEMO_VERIFICATION_CODE {
        return Err(ServerError::Unauthorized("Invalid verification code".into()));
    }

    let mut pending = load_pending(store)?;
    let Some(record) = pending.remove(&email) else {
        return Err(ServerError::BadRequest(format!(
            "No pending registration for {email}."
        )));
    };

    let mut users = load_users(store)?;
    if users.iter().any(|user| user.email == email) {
        return Err(ServerError::BadRequest(format!(
            "An account already exists for {email}."
        )));
    }

    let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
    let user = UserAccount {
        id: next_id,
        first_name: record.first_name,
        last_name: record.last_name,
        phone: record.phone,
        email: record.email,
        password: record.password,
    };

    users.push(user.clone());
    store.put_json(USERS_KEY, &users, now)?;
    store.put_json(PENDING_KEY, &pending, now)?;

    eprintln!("✅ Registered {}", user.email);

    Ok(user)
}

/// Plaintext credential match against the stored user array.
pub fn login(store: &LocalStore, email: &str, password: &str) -> Result<UserAccount, ServerError> {
    let email = normalize_email(email)?;

    load_users(store)?
        .into_iter()
        .find(|user| user.email == email && user.password == password)
        .ok_or_else(|| ServerError::Unauthorized("Invalid email or password".into()))
}

pub fn find_user(store: &LocalStore, user_id: i64) -> Result<Option<UserAccount>, ServerError> {
    Ok(load_users(store)?
        .into_iter()
        .find(|user| user.id == user_id))
}
