use sqlx::PgPool;
use std::sync::Arc;

/// Process-wide Postgres pool, opened once in `main` and shared by the view store.
pub type DatabasePool = Arc<PgPool>;

/// Connect, apply migrations and hand back the shared pool.
pub async fn new_pool(database_url: &str) -> anyhow::Result<DatabasePool> {
    let pool = PgPool::connect(database_url).await?;
    if !is_local_or_tls(database_url) {
        tracing::warn!("⚠️  View store is remote and sslmode is not set; view events (IPs, user agents) travel unencrypted");
    }

    run_migrations(&pool).await?;
    Ok(Arc::new(pool))
}

/// Apply the embedded migrations in `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn is_local_or_tls(database_url: &str) -> bool {
    database_url.contains("sslmode=require")
        || database_url.contains("sslmode=verify")
        || database_url.contains("localhost")
        || database_url.contains("127.0.0.1")
}
