use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::event::{DateBucket, Event, FeeFilter};
use crate::services::event_service::{CreateEventRequest, EventQuery};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub fee: i64,
    pub capacity: Option<i64>,
    pub organizer_id: i64,
}

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date: Option<DateBucket>,
    pub fee: Option<FeeFilter>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<Json<Vec<Event>>> {
    let events = state
        .event_service
        .list_events(EventQuery {
            category: params.category,
            search: params.search,
            date: params.date,
            fee: params.fee,
            limit: params.limit,
            offset: params.offset,
        })
        .await?;

    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateEventBody>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = state
        .event_service
        .create_event(
            current.id,
            current.role,
            CreateEventRequest {
                title: body.title,
                description: body.description,
                category: body.category,
                date: body.date,
                time: body.time,
                location: body.location,
                fee: body.fee,
                capacity: body.capacity,
                organizer_id: body.organizer_id,
            },
        )
        .await?;

    tracing::info!("Event {} created by organizer {}", event.id, current.id);

    Ok((StatusCode::CREATED, Json(event)))
}
