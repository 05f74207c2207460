use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a match. One-way: once `Completed`, never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Completed,
}

/// One tracked fixture between two named teams.
///
/// Snapshots are value-like: every mutation through the registry replaces the
/// stored record wholesale, so a caller holding a `Match` never observes a
/// partially-updated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Registry-assigned id, unique for the registry's lifetime.
    /// Never reused, even after deletions.
    pub id: u64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: MatchStatus,
    /// When the match was started (stamped by the registry's clock).
    pub start_time: DateTime<Utc>,
    /// Set exactly once when the match completes; `None` while in progress.
    pub end_time: Option<DateTime<Utc>>,
}

impl Match {
    /// Combined goals/points of both sides — the primary scoreboard key.
    pub fn total_score(&self) -> i32 {
        self.home_score + self.away_score
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }
}
