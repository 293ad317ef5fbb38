// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use notes_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use notes_core::domain::user::UserId;

pub const AUTHOR_ID: i64 = 1;
pub const READER_ID: i64 = 2;

/// Author without a session.
pub const AUTHOR_TOKEN: &str = "author-token";
/// Another user who owns none of the author's notes.
pub const READER_TOKEN: &str = "reader-token";
/// The author again, bound to [`SESSION_ID`] so it can be revoked.
pub const SESSION_TOKEN: &str = "session-token";
pub const SESSION_ID: &str = "session-1";
pub const EXPIRED_TOKEN: &str = "expired-token";

const ISSUED_PREFIX: &str = "issued:";

/* -------------------------------- TokenManager -------------------------------- */

/// Recognises the fixed tokens above plus the ones it issued itself, which
/// encode `issued:{user_id}:{username}:{session_id}`.
#[derive(Clone, Debug, Default)]
pub struct TestTokenManager;

#[async_trait]
impl TokenManager for TestTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let token = format!(
            "{ISSUED_PREFIX}{}:{}:{}",
            subject.user_id,
            subject.username,
            subject.session_id.clone().unwrap_or_default()
        );
        Ok(AuthTokenDto {
            token,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            AUTHOR_TOKEN => Ok(user(AUTHOR_ID, "author", None)),
            READER_TOKEN => Ok(user(READER_ID, "reader", None)),
            SESSION_TOKEN => Ok(user(AUTHOR_ID, "author", Some(SESSION_ID))),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            other => parse_issued(other)
                .ok_or_else(|| ApplicationError::unauthorized("invalid token")),
        }
    }
}

fn parse_issued(token: &str) -> Option<AuthenticatedUser> {
    let rest = token.strip_prefix(ISSUED_PREFIX)?;
    let mut parts = rest.splitn(3, ':');
    let id = parts.next()?.parse().ok()?;
    let username = parts.next()?;
    let session = parts.next().filter(|sid| !sid.is_empty());
    Some(user(id, username, session))
}

fn user(id: i64, username: &str, session_id: Option<&str>) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
        session_id: session_id.map(str::to_string),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Reversible "hash" so tests can log in without paying for Argon2.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain$") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
