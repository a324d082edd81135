//! Itinerary Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::ItineraryRequest;
use crate::application::dto::response::{ItineraryResponse, MessageResponse};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

pub async fn list_itineraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let activities = state.itineraries.list_itineraries().await?;

    Ok(Json(
        activities.into_iter().map(ItineraryResponse::from).collect(),
    ))
}

pub async fn list_destination_itinerary(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    let activities = state
        .itineraries
        .list_for_destination(destination_id)
        .await?;

    Ok(Json(
        activities.into_iter().map(ItineraryResponse::from).collect(),
    ))
}

pub async fn add_activity(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ItineraryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    let activity = state
        .itineraries
        .add_activity(destination_id, body.into())
        .await?;

    Ok(Json(MessageResponse::created(
        "Itinerary activity added successfully",
        activity.id,
    )))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path((destination_id, itinerary_id)): Path<(String, String)>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let itinerary_id = parse_id(&itinerary_id, "itinerary")?;

    let activity = state
        .itineraries
        .get_activity(destination_id, itinerary_id)
        .await?;

    Ok(Json(ItineraryResponse::from(activity)))
}

pub async fn update_activity(
    State(state): State<AppState>,
    Path((destination_id, itinerary_id)): Path<(String, String)>,
    ValidatedJson(body): ValidatedJson<ItineraryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let itinerary_id = parse_id(&itinerary_id, "itinerary")?;

    state
        .itineraries
        .update_activity(destination_id, itinerary_id, body.into())
        .await?;

    Ok(Json(MessageResponse::new(
        "Itinerary activity updated successfully",
    )))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path((destination_id, itinerary_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let itinerary_id = parse_id(&itinerary_id, "itinerary")?;

    state
        .itineraries
        .delete_activity(destination_id, itinerary_id)
        .await?;

    Ok(Json(MessageResponse::new(
        "Itinerary activity deleted successfully",
    )))
}
