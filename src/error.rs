use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
    #[error("Missing required query parameter: email")]
    MissingEmail,
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp { .. } | ActivityError::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
            ActivityError::MissingEmail | ActivityError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_carry_the_phrases_clients_match_on() {
        let dup = ActivityError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "michael@mergington.edu".into(),
        };
        assert!(dup.to_string().contains("already signed up"));
        assert_eq!(dup.status(), StatusCode::BAD_REQUEST);

        let absent = ActivityError::NotSignedUp {
            activity: "Chess Club".into(),
            email: "nobody@mergington.edu".into(),
        };
        assert!(absent.to_string().contains("not signed up"));
        assert_eq!(absent.status(), StatusCode::BAD_REQUEST);

        let missing = ActivityError::NotFound {
            activity: "Knitting".into(),
        };
        assert_eq!(missing.to_string(), "Activity not found");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let malformed = ActivityError::InvalidQuery("bad".into());
        assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
