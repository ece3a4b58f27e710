use actix_session::Session;
use uuid::Uuid;

use crate::errors::AppError;

const USER_ID_KEY: &str = "user_id";
const EMAIL_KEY: &str = "email";

/// Record the signed-in user. Renews the session id to avoid fixation.
pub fn sign_in(session: &Session, user_id: Uuid, email: &str) -> Result<(), AppError> {
    session.renew();
    session.insert(USER_ID_KEY, user_id)?;
    session.insert(EMAIL_KEY, email)?;
    Ok(())
}

pub fn get_user_id(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(USER_ID_KEY).unwrap_or(None)
}

pub fn is_signed_in(session: &Session) -> bool {
    get_user_id(session).is_some()
}

pub fn sign_out(session: &Session) {
    session.purge();
}
