use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::{info, warn};
use sqlx::{
    Row,
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::VoteTally;

/// Read side of the vote store.
///
/// Rows are written by the vote-processing worker; this service only ever
/// asks for grouped counts.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn vote_counts(&self) -> Result<Vec<VoteTally>, StoreError>;
}

pub struct Database {
    pool: PgPool,
    schema_ready: AtomicBool,
}

impl Database {
    /// Build the pool without touching the network. Connections are opened on
    /// first use, so the server can start before Postgres does and answer 500
    /// until it is reachable.
    pub fn new(config: &StoreConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);
        info!(
            "Using PostgreSQL database {} at {}:{}",
            config.database, config.host, config.port
        );

        Self {
            pool,
            schema_ready: AtomicBool::new(false),
        }
    }

    // Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the votes table if it is missing, so a fresh database answers
    /// with zero counts. Runs at most once successfully.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        // Same shape the worker persists: one row per voter
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                voter_id TEXT PRIMARY KEY,
                vote TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        self.schema_ready.store(true, Ordering::Release);
        info!("Connected to PostgreSQL, votes table ready");
        Ok(())
    }
}

#[async_trait]
impl VoteStore for Database {
    async fn vote_counts(&self) -> Result<Vec<VoteTally>, StoreError> {
        // Catch up on the bootstrap if the database was down at startup
        if let Err(e) = self.ensure_schema().await {
            warn!("Votes table bootstrap failed: {}", e);
        }

        let tallies = sqlx::query(
            r#"
            SELECT vote, COUNT(voter_id) AS count
            FROM votes
            GROUP BY vote
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| VoteTally {
            vote: row.get::<String, _>("vote"),
            count: row.get::<i64, _>("count"),
        })
        .collect();

        Ok(tallies)
    }
}
