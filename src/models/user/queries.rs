use sqlx::PgPool;
use uuid::Uuid;

use super::types::User;

/// Find a user by login email (case-insensitive).
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, password FROM users WHERE lower(email) = lower($1)",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await
}

/// Create the user, or replace the name and password hash of an existing
/// user with the same email.
pub async fn upsert(pool: &PgPool, name: &str, email: &str, password_hash: &str) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) \
         ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name, password = EXCLUDED.password \
         RETURNING id",
    )
    .bind(name)
    .bind(email.trim())
    .bind(password_hash)
    .fetch_one(pool)
    .await
}
