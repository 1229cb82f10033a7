use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::core::{MatchHistoryStore, StoreError};
use crate::models::MatchRecord;

/// Postgres-backed match history.
///
/// The log is append-only; nothing here mutates or deletes entries. The
/// `(penpal_id, matched_with)` primary key plus ON CONFLICT DO NOTHING
/// makes the append an atomic insert-if-absent, so two racing requests for
/// the same requester cannot record the same pairing twice.
pub struct HistoryClient {
    pool: PgPool,
}

impl HistoryClient {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full history for a penpal, newest first. Used by the debug endpoint.
    pub async fn list_records(&self, penpal_id: &str) -> Result<Vec<MatchRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT penpal_id, matched_with, matched_at
            FROM match_history
            WHERE penpal_id = $1
            ORDER BY matched_at DESC
            "#,
        )
        .bind(penpal_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| MatchRecord {
                penpal_id: row.get("penpal_id"),
                matched_with: row.get("matched_with"),
                matched_at: row.get("matched_at"),
            })
            .collect())
    }
}

#[async_trait]
impl MatchHistoryStore for HistoryClient {
    async fn list_matched_ids(&self, penpal_id: &str) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT matched_with
            FROM match_history
            WHERE penpal_id = $1
            "#,
        )
        .bind(penpal_id)
        .fetch_all(&self.pool)
        .await?;

        let matched_ids: Vec<String> = rows.iter().map(|row| row.get("matched_with")).collect();

        tracing::debug!(
            penpal = %penpal_id,
            matched = matched_ids.len(),
            "loaded match history"
        );

        Ok(matched_ids)
    }

    async fn append(
        &self,
        penpal_id: &str,
        matched_with: &str,
        matched_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO match_history (penpal_id, matched_with, matched_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (penpal_id, matched_with) DO NOTHING
            "#,
        )
        .bind(penpal_id)
        .bind(matched_with)
        .bind(matched_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(penpal = %penpal_id, matched = %matched_with, "appended match record");

        Ok(())
    }
}
