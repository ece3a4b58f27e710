pub mod credentials;
pub mod middleware;
pub mod password;
pub mod session;

pub use credentials::{
    AuthError, AuthErrorKind, Authenticator, CREDENTIALS_PROVIDER, PgCredentials, Principal, SignInError,
};
