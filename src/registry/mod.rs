//! In-memory match registry — the whole lifecycle lives here.
//!
//! The registry owns every tracked match and is the only component that
//! creates or mutates them. Each mutation validates first and then swaps in a
//! fresh snapshot, so a failed call never leaves a half-updated record and
//! callers always read a consistent value.
//!
//! Operations are synchronous; for use across tasks wrap the registry in
//! [`SharedRegistry`], which serializes everything behind one lock.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, ScoreboardError};

pub mod models;
pub mod shared;

pub use shared::SharedRegistry;

use models::{Match, MatchStatus};

/// Scoreboard size when the caller doesn't ask for a specific limit.
pub const DEFAULT_SCOREBOARD_LIMIT: i32 = 5;

/// Owns the id → match mapping and all lifecycle/query operations.
pub struct MatchRegistry {
    /// match id → current snapshot. Insertion order carries no meaning;
    /// ranking is computed on demand.
    matches: HashMap<u64, Match>,
    /// Count of matches ever created. Deriving ids from the live map size
    /// would reuse ids after deletions, so this counter only grows.
    created: u64,
    clock: Arc<dyn Clock>,
}

impl MatchRegistry {
    /// Create a registry stamped by the system clock.
    pub fn new() -> Self {
        MatchRegistry::with_clock(Arc::new(SystemClock))
    }

    /// Create a registry with an injected clock (e.g. a frozen one in tests).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        MatchRegistry {
            matches: HashMap::new(),
            created: 0,
            clock,
        }
    }

    /// Start tracking a new match between two teams.
    ///
    /// Both names must be non-empty after trimming whitespace. The new match
    /// begins `InProgress` at 0-0 with `start_time` taken from the clock.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<Match> {
        if home_team.trim().is_empty() {
            return Err(ScoreboardError::EmptyTeamName { side: "home" });
        }
        if away_team.trim().is_empty() {
            return Err(ScoreboardError::EmptyTeamName { side: "away" });
        }

        self.created += 1;
        let m = Match {
            id: self.created,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
            status: MatchStatus::InProgress,
            start_time: self.clock.now(),
            end_time: None,
        };

        info!(
            "Match {} started: {} vs {}",
            m.id, m.home_team, m.away_team
        );
        self.matches.insert(m.id, m.clone());
        Ok(m)
    }

    /// Fetch the current snapshot of a match.
    pub fn get(&self, id: u64) -> Result<Match> {
        self.matches
            .get(&id)
            .cloned()
            .ok_or(ScoreboardError::MatchNotFound(id))
    }

    /// Set one side's score to an absolute value.
    ///
    /// `team` must equal the match's home or away name exactly
    /// (case-sensitive); the other side's score is untouched. Fails once the
    /// match is completed.
    pub fn update_score(&mut self, id: u64, team: &str, score: i32) -> Result<Match> {
        if score < 0 {
            return Err(ScoreboardError::NegativeScore(score));
        }

        let existing = self
            .matches
            .get(&id)
            .ok_or(ScoreboardError::MatchNotFound(id))?;
        if existing.status == MatchStatus::Completed {
            return Err(ScoreboardError::MatchCompleted(id));
        }

        let mut updated = existing.clone();
        if existing.home_team == team {
            updated.home_score = score;
        } else if existing.away_team == team {
            updated.away_score = score;
        } else {
            return Err(ScoreboardError::UnknownTeam {
                match_id: id,
                team: team.to_string(),
            });
        }

        debug!(
            "Match {} score: {} {}-{} {}",
            id, updated.home_team, updated.home_score, updated.away_score, updated.away_team
        );
        self.matches.insert(id, updated.clone());
        Ok(updated)
    }

    /// Complete a match, freezing its scores and stamping `end_time`.
    pub fn complete(&mut self, id: u64) -> Result<Match> {
        let existing = self
            .matches
            .get(&id)
            .ok_or(ScoreboardError::MatchNotFound(id))?;
        if existing.status == MatchStatus::Completed {
            return Err(ScoreboardError::MatchCompleted(id));
        }

        let mut completed = existing.clone();
        completed.status = MatchStatus::Completed;
        completed.end_time = Some(self.clock.now());

        info!(
            "Match {} completed: {} {}-{} {}",
            id,
            completed.home_team,
            completed.home_score,
            completed.away_score,
            completed.away_team
        );
        self.matches.insert(id, completed.clone());
        Ok(completed)
    }

    /// Remove a match entirely. Idempotent: deleting an unknown or
    /// already-deleted id is a no-op, never an error.
    pub fn delete(&mut self, id: u64) {
        if self.matches.remove(&id).is_some() {
            info!("Match {} deleted", id);
        }
    }

    /// Ranked scoreboard with the default limit of
    /// [`DEFAULT_SCOREBOARD_LIMIT`] entries.
    pub fn scoreboard(&self) -> Vec<Match> {
        // The default limit is positive, so this cannot fail.
        self.scoreboard_with_limit(DEFAULT_SCOREBOARD_LIMIT)
            .unwrap_or_default()
    }

    /// Ranked scoreboard of in-progress matches, at most `limit` entries.
    ///
    /// Ordering: total score descending, ties broken by more recent
    /// `start_time`. Exact ties (equal total AND equal start) fall back to
    /// insertion order so the result is deterministic despite the hash-map
    /// backing store. Completed matches never appear.
    pub fn scoreboard_with_limit(&self, limit: i32) -> Result<Vec<Match>> {
        if limit <= 0 {
            return Err(ScoreboardError::InvalidLimit(limit));
        }

        let mut board: Vec<Match> = self
            .matches
            .values()
            .filter(|m| m.is_in_progress())
            .cloned()
            .collect();

        board.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then(b.start_time.cmp(&a.start_time))
                .then(a.id.cmp(&b.id))
        });
        board.truncate(limit as usize);

        debug!("Scoreboard query: {} of {} matches", board.len(), self.matches.len());
        Ok(board)
    }

    /// Number of matches currently stored (in progress and completed).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        MatchRegistry::new()
    }
}
