use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `screening_sessions` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS screening_sessions (
            id                      UUID PRIMARY KEY,
            resume_filename         TEXT NOT NULL,
            job_description         TEXT NOT NULL,
            match_score             INTEGER NOT NULL CHECK (match_score BETWEEN 0 AND 100),
            matched_skills          TEXT[] NOT NULL,
            missing_skills          TEXT[] NOT NULL,
            improvement_suggestions TEXT[] NOT NULL,
            created_at              TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("screening_sessions schema ready");
    Ok(())
}
