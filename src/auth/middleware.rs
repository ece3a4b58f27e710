use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::session;

pub const LOGIN_PATH: &str = "/login";

/// Redirects requests without a signed-in session to the login page.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if !session::is_signed_in(&req.get_session()) {
        log::debug!("Unauthenticated request to {}", req.path());
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", LOGIN_PATH))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
