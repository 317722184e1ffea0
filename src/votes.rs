use crate::db;
use crate::db::models::{Candidate, Vote};
use crate::error::VoteError;
use crate::startup::AppState;
use axum::{
    extract::{Extension, Form, Json, Request},
    http::header::CONTENT_TYPE,
    response::Html,
};
use chrono::Utc;
use serde::Deserialize;
use std::cmp::Ordering;
use tracing::info;

// Request DTO
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub team: Option<String>,
}

// The vote form posts urlencoded bodies; API callers send JSON. Accept both,
// branching on Content-Type. Anything unreadable counts as an invalid team.
#[axum::async_trait]
impl<S> axum::extract::FromRequest<S> for VoteRequest
where
    S: Send + Sync,
{
    type Rejection = VoteError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<VoteRequest>::from_request(req, state)
                .await
                .map_err(|_| VoteError::InvalidTeam)?;
            Ok(body)
        } else {
            let Form(body) = Form::<VoteRequest>::from_request(req, state)
                .await
                .map_err(|_| VoteError::InvalidTeam)?;
            Ok(body)
        }
    }
}

/// Serve the index page, showing vote tallies and recent activity.
pub async fn index(Extension(app_state): Extension<AppState>) -> Result<Html<String>, VoteError> {
    // The three queries are independent; run them concurrently.
    let (recent, tab_count, space_count) = tokio::try_join!(
        db::recent_votes(&app_state.db),
        db::candidate_count(&app_state.db, Candidate::Tabs),
        db::candidate_count(&app_state.db, Candidate::Spaces),
    )
    .map_err(VoteError::TallyFailed)?;

    Ok(Html(render_index(tab_count, space_count, &recent)))
}

/// Handle an incoming vote request and insert it into the database.
pub async fn cast_vote(
    Extension(app_state): Extension<AppState>,
    payload: VoteRequest,
) -> Result<String, VoteError> {
    // Reject before touching the database; invalid votes are never persisted.
    let candidate: Candidate = payload.team.as_deref().unwrap_or_default().parse()?;

    let time_cast = Utc::now();
    db::insert_vote(&app_state.db, candidate, time_cast)
        .await
        .map_err(VoteError::CastFailed)?;

    info!("recorded vote for {candidate}");

    Ok(format!(
        "Successfully voted for {} at {}",
        candidate,
        time_cast.to_rfc3339()
    ))
}

fn render_index(tab_count: i64, space_count: i64, recent: &[Vote]) -> String {
    let lead = match tab_count.cmp(&space_count) {
        Ordering::Greater => format!("TABS are winning by {} vote(s)!", tab_count - space_count),
        Ordering::Less => format!("SPACES are winning by {} vote(s)!", space_count - tab_count),
        Ordering::Equal => "TABS and SPACES are evenly matched!".to_string(),
    };

    let rows = if recent.is_empty() {
        r#"<tr><td colspan="2">No votes yet.</td></tr>"#.to_string()
    } else {
        recent
            .iter()
            .map(|vote| {
                format!(
                    "<tr><td>{}</td><td>{}</td></tr>",
                    vote.candidate.trim_end(),
                    vote.time_cast.to_rfc3339()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>TABS vs SPACES</title>
</head>
<body>
<h1>TABS vs SPACES</h1>
<p>{lead}</p>
<table>
<tr><th>TABS</th><th>SPACES</th></tr>
<tr><td>{tab_count} votes</td><td>{space_count} votes</td></tr>
</table>
<form method="POST" action="/">
<button name="team" value="TABS">Vote for TABS</button>
<button name="team" value="SPACES">Vote for SPACES</button>
</form>
<h2>Recent votes</h2>
<table>
<tr><th>Candidate</th><th>Time cast</th></tr>
{rows}
</table>
</body>
</html>
"#
    )
}
