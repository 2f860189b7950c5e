use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::error::ActivityError;
use crate::models::ActivityListing;
use crate::services::activities_service::{self, CommandMessage};
use crate::web::SharedRegistry;

type QueryPairs = Vec<(String, String)>;

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&registry))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<CommandMessage>, ActivityError> {
    let activity_name = activity_name(path)?;
    let email = email(query)?;
    activities_service::signup(&registry, &activity_name, &email).map(Json)
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<CommandMessage>, ActivityError> {
    let activity_name = activity_name(path)?;
    let email = email(query)?;
    activities_service::unregister(&registry, &activity_name, &email).map(Json)
}

// Registry keys are valid UTF-8, so a segment that fails to decode names no
// activity.
fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ActivityError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => Err(ActivityError::NotFound {
            activity: rejection.body_text(),
        }),
    }
}

// Taken as-is, no format validation. A repeated `email` keeps the last value.
fn email(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ActivityError> {
    let Query(pairs) = query.map_err(|r| ActivityError::InvalidQuery(r.body_text()))?;
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or(ActivityError::MissingEmail)
}
