use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Issued proof of registration for a (event, user) pair. The code is
/// an opaque random string rendered as a scannable QR at the client.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EPass {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub qr_code: String,
    pub issued_at: String,
}
