use crate::db::models::InvalidCandidate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum VoteError {
    #[error("invalid team specified")]
    InvalidTeam,
    #[error("failed to record vote: {0}")]
    CastFailed(#[source] sqlx::Error),
    #[error("failed to load vote tally: {0}")]
    TallyFailed(#[source] sqlx::Error),
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            VoteError::InvalidTeam => (StatusCode::BAD_REQUEST, "Invalid team specified."),
            VoteError::CastFailed(err) => {
                error!("unable to cast vote: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unable to successfully cast vote! Please check the application logs for more details.",
                )
            }
            VoteError::TallyFailed(err) => {
                error!("unable to load vote tally: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unable to load the vote tally! Please check the application logs for more details.",
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<InvalidCandidate> for VoteError {
    fn from(_: InvalidCandidate) -> Self {
        VoteError::InvalidTeam
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn invalid_team_is_a_client_error() {
        let response = VoteError::InvalidTeam.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Invalid team specified.");
    }

    #[tokio::test]
    async fn database_failures_are_server_errors_with_generic_bodies() {
        for err in [
            VoteError::CastFailed(sqlx::Error::PoolTimedOut),
            VoteError::TallyFailed(sqlx::Error::PoolClosed),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let text = std::str::from_utf8(&body).unwrap();
            // Internal detail stays in the logs.
            assert!(text.contains("Please check the application logs"));
            assert!(!text.contains("pool"));
        }
    }
}
