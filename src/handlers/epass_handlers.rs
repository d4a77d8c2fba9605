use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::epass::EPass;
use crate::services::epass_service::IssueEPassRequest;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueEPassBody {
    pub event_id: i64,
    pub user_id: i64,
    pub payment_reference: Option<String>,
}

pub async fn issue_epass(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<IssueEPassBody>,
) -> Result<(StatusCode, Json<EPass>)> {
    let epass = state
        .epass_service
        .issue(
            current.id,
            IssueEPassRequest {
                event_id: body.event_id,
                user_id: body.user_id,
                payment_reference: body.payment_reference,
            },
        )
        .await?;

    tracing::info!(
        "E-pass {} issued for event {} to user {}",
        epass.id,
        epass.event_id,
        epass.user_id
    );

    Ok((StatusCode::CREATED, Json(epass)))
}

pub async fn list_my_epasses(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<EPass>>> {
    let epasses = state.epass_service.list_for_user(current.id).await?;
    Ok(Json(epasses))
}
