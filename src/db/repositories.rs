//! Repositories: users and chirps.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::error::AppResult;

// ---- Users ----

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub hashed_password: String,
}

pub async fn user_create(pool: &DbPool, email: &str, hashed_password: &str) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, hashed_password)
        VALUES ($1, $2)
        RETURNING id, created_at, updated_at, email, hashed_password
        "#,
    )
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn user_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, created_at, updated_at, email, hashed_password FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ---- Chirps ----

#[derive(Debug, FromRow)]
pub struct ChirpRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

pub async fn chirp_create(pool: &DbPool, body: &str, user_id: Uuid) -> AppResult<ChirpRow> {
    let row = sqlx::query_as::<_, ChirpRow>(
        r#"
        INSERT INTO chirps (body, user_id)
        VALUES ($1, $2)
        RETURNING id, created_at, updated_at, body, user_id
        "#,
    )
    .bind(body)
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn chirps_list_all(pool: &DbPool) -> AppResult<Vec<ChirpRow>> {
    let rows = sqlx::query_as::<_, ChirpRow>(
        "SELECT id, created_at, updated_at, body, user_id FROM chirps ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn chirp_get_by_id(pool: &DbPool, id: Uuid) -> AppResult<Option<ChirpRow>> {
    let row = sqlx::query_as::<_, ChirpRow>(
        "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ---- Admin ----

/// Wipe all users; chirps go with them via the cascade.
pub async fn reset(pool: &DbPool) -> AppResult<()> {
    sqlx::query("DELETE FROM users").execute(pool).await?;
    Ok(())
}
