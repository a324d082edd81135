//! Destination Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::DestinationRequest;
use crate::application::dto::response::{DestinationResponse, MessageResponse};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List all destinations
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<DestinationResponse>>, AppError> {
    let destinations = state.destinations.list_destinations().await?;

    Ok(Json(
        destinations
            .into_iter()
            .map(DestinationResponse::from)
            .collect(),
    ))
}

/// Create a new destination
pub async fn create_destination(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<DestinationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination = state.destinations.create_destination(body.into()).await?;

    Ok(Json(MessageResponse::created(
        "Destination created successfully",
        destination.id,
    )))
}

/// Get destination by ID
pub async fn get_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> Result<Json<DestinationResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    let destination = state.destinations.get_destination(destination_id).await?;

    Ok(Json(DestinationResponse::from(destination)))
}

/// Replace a destination
pub async fn update_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ValidatedJson(body): ValidatedJson<DestinationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    state
        .destinations
        .update_destination(destination_id, body.into())
        .await?;

    Ok(Json(MessageResponse::new("Destination updated successfully")))
}

/// Delete a destination with its expenses and itinerary
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    state.destinations.delete_destination(destination_id).await?;

    Ok(Json(MessageResponse::new("Destination deleted successfully")))
}
