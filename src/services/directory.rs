use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::core::{ProfileStore, StoreError};
use crate::models::{CandidateQuery, CreatePenpalRequest, ExchangeTypes, MailLocation, Penpal};

const PENPAL_COLUMNS: &str = "id, name, street_address, city, state, zip_code, country, \
     interests, discord_handle, mail_location, friend_books, art_journal, zine, letters, \
     gift_exchange, created_at";

/// Postgres-backed penpal directory.
///
/// Owns profile persistence: creation, lookup, deletion, and the candidate
/// eligibility query the matching engine runs. Deleted profiles disappear
/// from candidate queries immediately because everything reads live rows.
pub struct DirectoryClient {
    pool: PgPool,
}

impl DirectoryClient {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new directory entry and return it with its assigned id.
    pub async fn create_penpal(&self, req: &CreatePenpalRequest) -> Result<Penpal, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO penpals (
                id, name, street_address, city, state, zip_code, country,
                interests, discord_handle, mail_location,
                friend_books, art_journal, zine, letters, gift_exchange, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(&id)
        .bind(&req.name)
        .bind(&req.street_address)
        .bind(&req.city)
        .bind(&req.state)
        .bind(&req.zip_code)
        .bind(&req.country)
        .bind(&req.interests)
        .bind(&req.discord_handle)
        .bind(req.mail_location.as_str())
        .bind(req.exchange_types.friend_books)
        .bind(req.exchange_types.art_journal)
        .bind(req.exchange_types.zine)
        .bind(req.exchange_types.letters)
        .bind(req.exchange_types.gift_exchange)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(penpal = %id, "created directory entry");

        Ok(Penpal {
            id,
            name: req.name.clone(),
            street_address: req.street_address.clone(),
            city: req.city.clone(),
            state: req.state.clone(),
            zip_code: req.zip_code.clone(),
            country: req.country.clone(),
            interests: req.interests.clone(),
            discord_handle: req.discord_handle.clone(),
            mail_location: req.mail_location,
            exchange_types: req.exchange_types,
            created_at: Some(created_at),
        })
    }

    /// Remove a directory entry. Returns false when no row matched.
    pub async fn delete_penpal(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM penpals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(penpal = %id, "deleted directory entry");
        }
        Ok(deleted)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[async_trait]
impl ProfileStore for DirectoryClient {
    async fn get_by_id(&self, id: &str) -> Result<Option<Penpal>, StoreError> {
        let row = sqlx::query(&format!("SELECT {} FROM penpals WHERE id = $1", PENPAL_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(penpal_from_row).transpose()
    }

    async fn query_candidates(&self, query: &CandidateQuery) -> Result<Vec<Penpal>, StoreError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM penpals WHERE id <> ALL(", PENPAL_COLUMNS));
        builder.push_bind(&query.exclude_ids);
        builder.push(")");

        if let Some(country) = &query.country {
            builder.push(" AND country = ");
            builder.push_bind(country);
        }

        if !query.exchange_any.is_empty() {
            builder.push(" AND (");
            for (i, exchange_type) in query.exchange_any.iter().enumerate() {
                if i > 0 {
                    builder.push(" OR ");
                }
                // column() yields fixed identifiers from the closed enum
                builder.push(exchange_type.column());
                builder.push(" = TRUE");
            }
            builder.push(")");
        }

        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(query.limit as i64);

        let rows = builder.build().fetch_all(&self.pool).await?;

        tracing::debug!(
            candidates = rows.len(),
            limit = query.limit,
            "candidate query executed"
        );

        rows.iter().map(penpal_from_row).collect()
    }
}

fn penpal_from_row(row: &PgRow) -> Result<Penpal, StoreError> {
    let mail_location: String = row.get("mail_location");
    let mail_location = mail_location
        .parse::<MailLocation>()
        .map_err(StoreError::Corrupt)?;

    Ok(Penpal {
        id: row.get("id"),
        name: row.get("name"),
        street_address: row.get("street_address"),
        city: row.get("city"),
        state: row.get("state"),
        zip_code: row.get("zip_code"),
        country: row.get("country"),
        interests: row.get("interests"),
        discord_handle: row.get("discord_handle"),
        mail_location,
        exchange_types: ExchangeTypes {
            friend_books: row.get("friend_books"),
            art_journal: row.get("art_journal"),
            zine: row.get("zine"),
            letters: row.get("letters"),
            gift_exchange: row.get("gift_exchange"),
        },
        created_at: row.get("created_at"),
    })
}
