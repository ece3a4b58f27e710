use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::actions::{FormState, INVOICES_PATH, LoginOutcome, authenticate};
use crate::auth::middleware::LOGIN_PATH;
use crate::auth::session;
use crate::errors::AppError;
use crate::form::FormData;
use crate::state::AppState;
use super::see_other;

pub async fn login_submit(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    match authenticate(state.authenticator.as_ref(), None, &form).await? {
        LoginOutcome::Authenticated(principal) => {
            session::sign_in(&session, principal.user_id, &principal.email)?;
            log::info!("User {} signed in", principal.email);
            Ok(see_other(INVOICES_PATH))
        }
        LoginOutcome::Failed(message) => Ok(HttpResponse::Ok().json(FormState::message(message))),
    }
}

pub async fn logout(session: Session) -> HttpResponse {
    session::sign_out(&session);
    see_other(LOGIN_PATH)
}
