use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::config::SeedUser;
use crate::models::user;

pub const MIGRATIONS: &str = include_str!("schema.sql");

#[derive(Debug, thiserror::Error)]
pub enum DbSetupError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Password(#[from] password::PasswordError),
}

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the bundled schema. Every statement is idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create or refresh the bootstrap login.
pub async fn seed_user(pool: &PgPool, seed: &SeedUser) -> Result<(), DbSetupError> {
    let hash = password::hash_password(&seed.password)?;
    let name = seed.email.split('@').next().unwrap_or(&seed.email);
    let id = user::upsert(pool, name, &seed.email, &hash).await?;
    log::info!("Seeded login {} ({id})", seed.email);
    Ok(())
}
