use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::entities::paintings;
use crate::server::app::AppState;
use crate::services::NewPainting;

/// Create payload. The canonical tag field is the plural `techniques`; any
/// other key is dropped during deserialization.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePaintingRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub techniques: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaintingResponse {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub techniques: Vec<String>,
}

impl From<paintings::Model> for PaintingResponse {
    fn from(model: paintings::Model) -> Self {
        let techniques = model
            .techniques
            .and_then(|t| serde_json::from_str::<Vec<String>>(&t).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            techniques,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/paintings",
    responses(
        (status = 200, description = "List all paintings", body = [PaintingResponse])
    )
)]
pub async fn list_paintings(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaintingResponse>>, StatusCode> {
    let paintings = state.painting_service.find_all().await.map_err(|err| {
        tracing::error!("Database error listing paintings: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(
        paintings.into_iter().map(PaintingResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/paintings",
    request_body = CreatePaintingRequest,
    responses(
        (status = 200, description = "Painting created successfully", body = PaintingResponse)
    )
)]
pub async fn create_painting(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaintingRequest>,
) -> Result<Json<PaintingResponse>, StatusCode> {
    let painting = state
        .painting_service
        .insert(NewPainting {
            name: payload.name,
            url: payload.url,
            techniques: payload.techniques,
        })
        .await
        .map_err(|err| {
            tracing::error!("Database error creating painting: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(PaintingResponse::from(painting)))
}
