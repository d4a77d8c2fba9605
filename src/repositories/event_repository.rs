use crate::models::event::{Event, EventFilter, NewEvent};
use crate::repositories::user_repository::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

const EVENT_COLUMNS: &str =
    "id, title, description, category, date, time, location, fee, capacity, organizer_id, created_at";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, organizer_id: i64, event: NewEvent) -> RepositoryResult<Event>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Event>>;
    async fn list_events(&self, filter: EventFilter) -> RepositoryResult<Vec<Event>>;
}

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create_event(&self, organizer_id: i64, event: NewEvent) -> RepositoryResult<Event> {
        let result = sqlx::query(
            "INSERT INTO events (title, description, category, date, time, location, fee, capacity, organizer_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.category)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(event.fee)
        .bind(event.capacity)
        .bind(organizer_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events WHERE id = ?",
            EVENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_events(&self, filter: EventFilter) -> RepositoryResult<Vec<Event>> {
        // Conditions are appended with `?` placeholders and the bind
        // values collected in the same order. Limit and offset are
        // i64, so interpolating them directly is safe.
        let mut sql = format!("SELECT {} FROM events WHERE 1=1", EVENT_COLUMNS);
        let mut binds: Vec<String> = Vec::new();

        if let Some(category) = filter.category {
            sql.push_str(" AND category = ?");
            binds.push(category);
        }
        if let Some(search) = filter.search {
            sql.push_str(" AND (lower(title) LIKE ? OR lower(description) LIKE ?)");
            let pattern = format!("%{}%", search.to_lowercase());
            binds.push(pattern.clone());
            binds.push(pattern);
        }
        if let Some(from) = filter.date_from {
            sql.push_str(" AND date >= ?");
            binds.push(from);
        }
        if let Some(to) = filter.date_to {
            sql.push_str(" AND date <= ?");
            binds.push(to);
        }
        if filter.free_only {
            sql.push_str(" AND fee = 0");
        }
        if filter.paid_only {
            sql.push_str(" AND fee > 0");
        }
        sql.push_str(&format!(
            " ORDER BY date, id LIMIT {} OFFSET {}",
            filter.limit, filter.offset
        ));

        let mut query = sqlx::query_as::<_, Event>(&sql);
        for bind in binds {
            query = query.bind(bind);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }
}
