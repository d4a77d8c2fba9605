use crate::models::epass::EPass;
use crate::repositories::user_repository::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

const EPASS_COLUMNS: &str = "id, event_id, user_id, qr_code, issued_at";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait EPassRepository: Send + Sync {
    async fn create(&self, event_id: i64, user_id: i64, qr_code: &str) -> RepositoryResult<EPass>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<EPass>>;
    async fn list_for_user(&self, user_id: i64) -> RepositoryResult<Vec<EPass>>;
}

pub struct SqliteEPassRepository {
    pool: SqlitePool,
}

impl SqliteEPassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EPassRepository for SqliteEPassRepository {
    async fn create(&self, event_id: i64, user_id: i64, qr_code: &str) -> RepositoryResult<EPass> {
        // UNIQUE (event_id, user_id) settles the duplicate-issuance
        // race in the database, same as the email constraint on users.
        let result = sqlx::query("INSERT INTO epasses (event_id, user_id, qr_code) VALUES (?, ?, ?)")
            .bind(event_id)
            .bind(user_id)
            .bind(qr_code)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<EPass>> {
        let epass = sqlx::query_as::<_, EPass>(&format!(
            "SELECT {} FROM epasses WHERE id = ?",
            EPASS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(epass)
    }

    async fn list_for_user(&self, user_id: i64) -> RepositoryResult<Vec<EPass>> {
        let epasses = sqlx::query_as::<_, EPass>(&format!(
            "SELECT {} FROM epasses WHERE user_id = ? ORDER BY id",
            EPASS_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(epasses)
    }
}
