use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use invoice_desk::auth::PgCredentials;
use invoice_desk::config::Config;
use invoice_desk::models::invoice::PgInvoiceStore;
use invoice_desk::state::AppState;
use invoice_desk::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = db::init_pool(&config.database_url, config.max_connections)
        .await
        .map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    if let Some(seed) = &config.seed_user {
        if let Err(e) = db::seed_user(&pool, seed).await {
            log::error!("Failed to seed login {}: {e}", seed.email);
        }
    }

    let secret_key = config.cookie_key();
    let state = web::Data::new(AppState::new(
        Arc::new(PgInvoiceStore::new(pool.clone())),
        Arc::new(PgCredentials::new(pool)),
        config.validation_mode,
    ));

    log::info!(
        "Starting server at http://{} ({:?} validation)",
        config.bind_addr,
        config.validation_mode
    );

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
