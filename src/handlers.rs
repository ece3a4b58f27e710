pub mod auth_handlers;
pub mod invoice_handlers;

use actix_web::{HttpResponse, web};

use crate::actions::{ActionOutcome, INVOICES_PATH};
use crate::auth::middleware::{LOGIN_PATH, require_auth};

/// Realize an action outcome as an HTTP response.
pub fn respond(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Redirect(path) => see_other(path),
        ActionOutcome::Respond(state) => HttpResponse::Ok().json(state),
    }
}

pub fn see_other(path: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", path))
        .finish()
}

/// Register every route. Callers wrap the app in the session middleware and
/// provide `web::Data<AppState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route(LOGIN_PATH, web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        .route("/", web::get().to(|| async { see_other(INVOICES_PATH) }))
        // Protected routes
        .service(
            web::scope("/dashboard")
                .wrap(actix_web::middleware::from_fn(require_auth))
                .route("", web::get().to(|| async { see_other(INVOICES_PATH) }))
                .route("/invoices", web::get().to(invoice_handlers::list))
                .route("/invoices", web::post().to(invoice_handlers::create))
                .route("/invoices/{id}/edit", web::post().to(invoice_handlers::update))
                .route("/invoices/{id}/delete", web::post().to(invoice_handlers::delete)),
        );
}
