//! League schema: created once, verified on every start, dropped by `db reset`
//!
//! A single `schema_version` row records which schema the file holds and a fingerprint
//! of the SQL that created it. A database written by a different build of the schema is
//! refused instead of being used half-compatible.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::SqlitePool;

pub const SCHEMA_VERSION: i64 = 1;

const CREATE_SQL: &str = include_str!("sql/create.sql");
const DROP_SQL: &str = include_str!("sql/drop.sql");

/// The recorded schema of an opened database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SchemaRecord {
    pub version: i64,
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}

/// FNV-1a over the schema text, stable across builds and platforms
pub fn fingerprint(sql: &str) -> String {
    let hash = sql.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    });
    format!("{:016x}", hash)
}

async fn version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            fingerprint TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create schema_version table")?;
    Ok(())
}

/// Schema recorded in the database, `None` when the tables were never created
pub async fn recorded(pool: &SqlitePool) -> Result<Option<SchemaRecord>> {
    version_table(pool).await?;
    sqlx::query_as("SELECT version, fingerprint, created_at FROM schema_version")
        .fetch_optional(pool)
        .await
        .context("Failed to read schema version")
}

/// Create the league tables on a fresh database and verify them on an existing one
pub async fn ensure(pool: &SqlitePool) -> Result<SchemaRecord> {
    let expected = fingerprint(CREATE_SQL);

    if let Some(record) = recorded(pool).await? {
        if record.version != SCHEMA_VERSION || record.fingerprint != expected {
            bail!(
                "Database holds schema {} ({}), this build expects {} ({}); run `db reset` to recreate it",
                record.version,
                record.fingerprint,
                SCHEMA_VERSION,
                expected
            );
        }
        debug!("Schema {} is up to date", record.version);
        return Ok(record);
    }

    info!("Creating league schema version {}", SCHEMA_VERSION);
    let mut tx = pool.begin().await.context("Failed to start schema transaction")?;
    sqlx::raw_sql(CREATE_SQL)
        .execute(&mut *tx)
        .await
        .context("Failed to create league tables")?;
    sqlx::query("INSERT INTO schema_version (version, fingerprint) VALUES (?, ?)")
        .bind(SCHEMA_VERSION)
        .bind(&expected)
        .execute(&mut *tx)
        .await
        .context("Failed to record schema version")?;
    tx.commit().await.context("Failed to commit schema transaction")?;

    recorded(pool)
        .await?
        .context("Schema version vanished right after it was recorded")
}

/// Drop every league table with its data, then create the schema again
pub async fn reset(pool: &SqlitePool) -> Result<SchemaRecord> {
    version_table(pool).await?;

    let mut tx = pool.begin().await.context("Failed to start reset transaction")?;
    sqlx::raw_sql(DROP_SQL)
        .execute(&mut *tx)
        .await
        .context("Failed to drop league tables")?;
    sqlx::query("DELETE FROM schema_version")
        .execute(&mut *tx)
        .await
        .context("Failed to clear schema version")?;
    tx.commit().await.context("Failed to commit reset transaction")?;

    info!("League tables dropped");
    ensure(pool).await
}
