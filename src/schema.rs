//! Database schema management for `stationview`.
//!
//! Ensures the profile table exists before serving requests.
//! Applied once on startup from `main.rs`.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create the database schema (idempotent).
///
/// One `profiles` row per weather station. The reading history and metadata
/// keep their original document shape in JSONB columns. Safe to call on every
/// startup; no-op if objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id            UUID        PRIMARY KEY,
            name          TEXT,
            profile_name  TEXT,
            location      TEXT,
            data          JSONB       NOT NULL DEFAULT '[]'::jsonb,
            metadata      JSONB,
            created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Listing order is insertion order
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_profiles_created_at
            ON profiles (created_at, id);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
