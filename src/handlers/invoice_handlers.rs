use actix_web::{HttpResponse, web};

use crate::actions::{self, FormState, INVOICES_PATH};
use crate::errors::AppError;
use crate::form::FormData;
use crate::state::AppState;
use super::respond;

/// Invoice list as JSON, served from the page cache until a write
/// revalidates it.
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let body = match state.cache.get(INVOICES_PATH) {
        Some(body) => body,
        None => {
            let invoices = state.store.list_invoices().await?;
            let body = serde_json::to_string(&invoices)?;
            state.cache.put(INVOICES_PATH, body.clone());
            body
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

pub async fn create(state: web::Data<AppState>, form: web::Form<FormData>) -> HttpResponse {
    let ctx = state.action_context();
    respond(actions::create_invoice(&ctx, &FormState::default(), &form).await)
}

pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> HttpResponse {
    let id = path.into_inner();
    let ctx = state.action_context();
    respond(actions::update_invoice(&ctx, &id, &FormState::default(), &form).await)
}

pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    let ctx = state.action_context();
    respond(actions::delete_invoice(&ctx, &id).await)
}
