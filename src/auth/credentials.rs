use std::fmt;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::form::FormData;
use crate::models::user;
use super::password;

pub const CREDENTIALS_PROVIDER: &str = "credentials";
const MIN_PASSWORD_LEN: usize = 6;

/// Failure categories an authentication provider reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Unknown user, wrong password, or malformed credentials.
    CredentialsSignin,
    /// The provider itself failed while checking credentials.
    CallbackRouteError,
    /// The requested provider is not configured.
    Configuration,
    AccessDenied,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthErrorKind::CredentialsSignin => "CredentialsSignin",
            AuthErrorKind::CallbackRouteError => "CallbackRouteError",
            AuthErrorKind::Configuration => "Configuration",
            AuthErrorKind::AccessDenied => "AccessDenied",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub detail: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

/// Everything `Authenticator::sign_in` can fail with. Only `Auth` failures
/// are meaningful to a login form; `Unexpected` belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("unexpected sign-in failure: {0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The identity established by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify the submitted credentials with the named provider.
    async fn sign_in(&self, provider: &str, form: &FormData) -> Result<Principal, SignInError>;
}

/// Email/password provider checking argon2 hashes in the `users` table.
#[derive(Clone, Debug)]
pub struct PgCredentials {
    pool: PgPool,
}

impl PgCredentials {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Shape check on submitted credentials; anything that fails is treated as
/// a bad login rather than a form error.
fn parse_credentials(form: &FormData) -> Option<(&str, &str)> {
    let email = form.get("email")?.trim();
    let password = form.get("password")?;

    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return None;
    }
    Some((email, password))
}

#[async_trait]
impl Authenticator for PgCredentials {
    async fn sign_in(&self, provider: &str, form: &FormData) -> Result<Principal, SignInError> {
        if provider != CREDENTIALS_PROVIDER {
            return Err(AuthError::new(AuthErrorKind::Configuration, format!("unknown provider '{provider}'")).into());
        }

        let Some((email, password)) = parse_credentials(form) else {
            return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "malformed credentials").into());
        };

        let found = user::find_by_email(&self.pool, email)
            .await
            .map_err(|e| AuthError::new(AuthErrorKind::CallbackRouteError, format!("user lookup failed: {e}")))?;

        let Some(u) = found else {
            return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "unknown user").into());
        };

        let matches = password::verify_password(password, &u.password)
            .map_err(|e| AuthError::new(AuthErrorKind::CallbackRouteError, e.to_string()))?;

        if !matches {
            return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "password mismatch").into());
        }

        Ok(Principal { user_id: u.id, email: u.email })
    }
}
