use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::{Query, QueryRejection};

use mergington::data::{ActivityDirectory, MessageResponse, SignupQuery};
use mergington::id::{ActivityId, ParticipantId};
use mergington::log;

use crate::error::ApiError;
use crate::services::ActivityService;

fn require_email(
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<ParticipantId, ApiError> {
    let Query(query) = query?;
    query
        .email()
        .map(ParticipantId::from)
        .ok_or(ApiError::MissingQueryParameter("email"))
}

/// Handler to list every activity with its roster
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivityDirectory>, ApiError> {
    let directory = state.activities.list().await?;
    Ok(Json(directory))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_id): Path<ActivityId>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let participant_id = require_email(query)?;

    if let Err(err) = state
        .activities
        .signup(&activity_id, participant_id.clone())
        .await
    {
        log::debug!("Signup of {participant_id} for {activity_id} rejected: {err}");
        return Err(err.into());
    }

    log::info!("Signed up {participant_id} for {activity_id}");
    Ok(Json(MessageResponse::signed_up(&participant_id, &activity_id)))
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_id): Path<ActivityId>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let participant_id = require_email(query)?;

    if let Err(err) = state
        .activities
        .unregister(&activity_id, &participant_id)
        .await
    {
        log::debug!("Unregister of {participant_id} from {activity_id} rejected: {err}");
        return Err(err.into());
    }

    log::info!("Unregistered {participant_id} from {activity_id}");
    Ok(Json(MessageResponse::unregistered(
        &participant_id,
        &activity_id,
    )))
}
