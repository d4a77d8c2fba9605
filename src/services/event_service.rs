use crate::models::event::{DateBucket, Event, EventFilter, FeeFilter, NewEvent};
use crate::models::user::Role;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::RepositoryError;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::sync::Arc;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date (expected YYYY-MM-DD)")]
    InvalidDate,
    #[error("Fee must not be negative")]
    NegativeFee,
    #[error("Capacity must be positive")]
    InvalidCapacity,
    #[error("Only organizers may create events")]
    NotOrganizer,
    #[error("Events may only be created under the caller's own account")]
    NotOwner,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub fee: i64,
    pub capacity: Option<i64>,
    pub organizer_id: i64,
}

/// Listing query as it arrives from the caller; buckets are resolved
/// against the current date when the query runs.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date: Option<DateBucket>,
    pub fee: Option<FeeFilter>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new event. The caller must be an organizer creating
    /// the event under their own id.
    pub async fn create_event(
        &self,
        actor_id: i64,
        actor_role: Role,
        request: CreateEventRequest,
    ) -> Result<Event, EventServiceError> {
        if actor_role != Role::Organizer {
            return Err(EventServiceError::NotOrganizer);
        }
        if request.organizer_id != actor_id {
            return Err(EventServiceError::NotOwner);
        }

        let event = self.validate(request)?;
        Ok(self.repository.create_event(actor_id, event).await?)
    }

    pub async fn get_event(&self, id: i64) -> Result<Option<Event>, EventServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>, EventServiceError> {
        let filter = Self::resolve(query, Utc::now().date_naive());
        Ok(self.repository.list_events(filter).await?)
    }

    fn validate(&self, request: CreateEventRequest) -> Result<NewEvent, EventServiceError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(EventServiceError::MissingField("title"));
        }
        let category = request.category.trim();
        if category.is_empty() {
            return Err(EventServiceError::MissingField("category"));
        }
        let time = request.time.trim();
        if time.is_empty() {
            return Err(EventServiceError::MissingField("time"));
        }
        let location = request.location.trim();
        if location.is_empty() {
            return Err(EventServiceError::MissingField("location"));
        }

        let date = request.date.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| EventServiceError::InvalidDate)?;

        if request.fee < 0 {
            return Err(EventServiceError::NegativeFee);
        }
        if let Some(capacity) = request.capacity {
            if capacity <= 0 {
                return Err(EventServiceError::InvalidCapacity);
            }
        }

        Ok(NewEvent {
            title: title.to_string(),
            description: request.description.trim().to_string(),
            category: category.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            fee: request.fee,
            capacity: request.capacity,
        })
    }

    fn resolve(query: EventQuery, today: NaiveDate) -> EventFilter {
        let (date_from, date_to) = match query.date {
            Some(bucket) => {
                let (from, to) = bucket_bounds(bucket, today);
                (Some(from), Some(to))
            }
            None => (None, None),
        };

        EventFilter {
            category: query.category.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
            date_from,
            date_to,
            free_only: query.fee == Some(FeeFilter::Free),
            paid_only: query.fee == Some(FeeFilter::Paid),
            limit: query
                .limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            offset: query.offset.unwrap_or(0).max(0),
        }
    }
}

/// Inclusive ISO date bounds for a bucket. Weeks run Monday–Sunday.
fn bucket_bounds(bucket: DateBucket, today: NaiveDate) -> (String, String) {
    let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let (from, to) = match bucket {
        DateBucket::Today => (today, today),
        DateBucket::ThisWeek => (today, week_start + Duration::days(6)),
        DateBucket::NextWeek => (week_start + Duration::days(7), week_start + Duration::days(13)),
    };
    (
        from.format("%Y-%m-%d").to_string(),
        to.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::event_repository::MockEventRepository;

    fn valid_request(organizer_id: i64) -> CreateEventRequest {
        CreateEventRequest {
            title: "Demo".to_string(),
            description: "A demo event".to_string(),
            category: "networking".to_string(),
            date: "2025-05-01".to_string(),
            time: "18:00".to_string(),
            location: "Hall".to_string(),
            fee: 0,
            capacity: None,
            organizer_id,
        }
    }

    #[tokio::test]
    async fn test_create_event_rejects_attendee() {
        let service = EventService::new(Arc::new(MockEventRepository::new()));

        let result = service
            .create_event(7, Role::Attendee, valid_request(7))
            .await;
        assert!(matches!(result, Err(EventServiceError::NotOrganizer)));
    }

    #[tokio::test]
    async fn test_create_event_rejects_foreign_organizer_id() {
        let service = EventService::new(Arc::new(MockEventRepository::new()));

        let result = service
            .create_event(7, Role::Organizer, valid_request(8))
            .await;
        assert!(matches!(result, Err(EventServiceError::NotOwner)));
    }

    #[tokio::test]
    async fn test_create_event_rejects_blank_title() {
        let service = EventService::new(Arc::new(MockEventRepository::new()));

        let mut request = valid_request(7);
        request.title = "  ".to_string();

        let result = service.create_event(7, Role::Organizer, request).await;
        assert!(matches!(
            result,
            Err(EventServiceError::MissingField("title"))
        ));
    }

    #[tokio::test]
    async fn test_create_event_rejects_bad_date() {
        let service = EventService::new(Arc::new(MockEventRepository::new()));

        let mut request = valid_request(7);
        request.date = "May 1st".to_string();

        let result = service.create_event(7, Role::Organizer, request).await;
        assert!(matches!(result, Err(EventServiceError::InvalidDate)));
    }

    #[test]
    fn test_bucket_bounds_today() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(); // a Wednesday
        let (from, to) = bucket_bounds(DateBucket::Today, today);
        assert_eq!(from, "2025-05-07");
        assert_eq!(to, "2025-05-07");
    }

    #[test]
    fn test_bucket_bounds_this_week_ends_sunday() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        let (from, to) = bucket_bounds(DateBucket::ThisWeek, today);
        assert_eq!(from, "2025-05-07");
        assert_eq!(to, "2025-05-11");
    }

    #[test]
    fn test_bucket_bounds_next_week() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        let (from, to) = bucket_bounds(DateBucket::NextWeek, today);
        assert_eq!(from, "2025-05-12");
        assert_eq!(to, "2025-05-18");
    }

    #[test]
    fn test_resolve_caps_page_size() {
        let query = EventQuery {
            limit: Some(10_000),
            offset: Some(-3),
            ..Default::default()
        };
        let filter = EventService::resolve(query, NaiveDate::from_ymd_opt(2025, 5, 7).unwrap());
        assert_eq!(filter.limit, MAX_PAGE_SIZE);
        assert_eq!(filter.offset, 0);
    }
}
