use crate::presentation::http::extractors::MaybeAuthenticated;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomePage {
    pub title: String,
    /// Set when the caller presented a valid token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page.", body = HomePage)),
    security([]),
    tag = "Pages"
)]
pub async fn home(MaybeAuthenticated(user): MaybeAuthenticated) -> Json<HomePage> {
    Json(HomePage {
        title: "Notes".into(),
        username: user.map(|user| user.username),
    })
}
