//! Account registration and login.
//!
//! ERROR HANDLING
//! ==============
//! Unknown username and wrong password both map to `InvalidCredentials` so
//! login failures do not reveal which accounts exist. Unique violations on
//! insert surface as `Taken` instead of a generic database error.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_USERNAME_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("username or email already registered")]
    Taken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Lowercase and validate a username: 3 to 32 chars, `[a-z0-9_-]`.
#[must_use]
pub fn normalize_username(username: &str) -> Option<String> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.len() < 3 || normalized.len() > MAX_USERNAME_LEN {
        return None;
    }
    if !normalized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return None;
    }
    Some(normalized)
}

/// Lowercase and validate an email shape: one `@`, non-empty local and domain.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Create a new account, returning the user id.
///
/// # Errors
///
/// Returns a validation error for malformed fields, `Taken` when the
/// username or email is already registered, or a database error.
pub async fn register(
    pool: &PgPool,
    username: &str,
    email: &str,
    plain_password: &str,
) -> Result<Uuid, AccountError> {
    let username = normalize_username(username).ok_or(AccountError::InvalidUsername)?;
    let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
    if plain_password.len() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword);
    }

    let id = Uuid::new_v4();
    let password_hash = password::hash(plain_password);
    sqlx::query("INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AccountError::Taken,
            _ => AccountError::Db(e),
        })?;

    Ok(id)
}

/// Verify credentials, returning the user id on success.
///
/// # Errors
///
/// Returns `InvalidCredentials` for unknown users and wrong passwords alike,
/// or a database error.
pub async fn login(pool: &PgPool, username: &str, plain_password: &str) -> Result<Uuid, AccountError> {
    let username = normalize_username(username).ok_or(AccountError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AccountError::InvalidCredentials);
    };

    let stored: String = row.get("password_hash");
    if !password::verify(plain_password, &stored) {
        return Err(AccountError::InvalidCredentials);
    }

    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
