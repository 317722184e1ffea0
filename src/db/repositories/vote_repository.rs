use crate::db::connection::DbPool;
use crate::db::models::{Candidate, Vote};
use sqlx::Error;
use sqlx::types::chrono::{DateTime, Utc};

/// How many votes the recent-activity list shows.
pub const RECENT_VOTES_LIMIT: i64 = 5;

pub async fn insert_vote(
    pool: &DbPool,
    candidate: Candidate,
    time_cast: DateTime<Utc>,
) -> Result<(), Error> {
    sqlx::query("INSERT INTO votes (time_cast, candidate) VALUES ($1, $2)")
        .bind(time_cast)
        .bind(candidate.as_str())
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn candidate_count(pool: &DbPool, candidate: Candidate) -> Result<i64, Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(vote_id) FROM votes WHERE candidate = $1")
            .bind(candidate.as_str())
            .fetch_one(pool)
            .await?;

    Ok(count)
}

/// Newest first; ties on `time_cast` break by `vote_id` so the order is
/// deterministic.
pub async fn recent_votes(pool: &DbPool) -> Result<Vec<Vote>, Error> {
    sqlx::query_as(
        "SELECT vote_id, time_cast, candidate FROM votes \
         ORDER BY time_cast DESC, vote_id DESC LIMIT $1",
    )
    .bind(RECENT_VOTES_LIMIT)
    .fetch_all(pool)
    .await
}
