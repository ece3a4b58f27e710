use crate::auth::{AuthErrorKind, Authenticator, CREDENTIALS_PROVIDER, Principal, SignInError};
use crate::form::FormData;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Principal),
    /// Message to show on the login form.
    Failed(&'static str),
}

/// Sign in with the credentials provider, passing the form through untouched.
///
/// Authentication failures become a form message. Anything else is returned
/// as `Err` for the outer handler to deal with.
pub async fn authenticate(
    authenticator: &dyn Authenticator,
    _prev_state: Option<&str>,
    form: &FormData,
) -> Result<LoginOutcome, SignInError> {
    match authenticator.sign_in(CREDENTIALS_PROVIDER, form).await {
        Ok(principal) => Ok(LoginOutcome::Authenticated(principal)),
        Err(SignInError::Auth(e)) => {
            log::warn!("Sign-in rejected: {e}");
            let message = match e.kind {
                AuthErrorKind::CredentialsSignin => INVALID_CREDENTIALS,
                _ => SOMETHING_WENT_WRONG,
            };
            Ok(LoginOutcome::Failed(message))
        }
        Err(e) => Err(e),
    }
}
