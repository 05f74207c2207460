//! Errors returned by registry operations.

use serde::Serialize;

/// All errors a registry operation can return.
///
/// Every variant belongs to one of three coarse [`ErrorKind`]s so an
/// embedding layer can map failures to transport responses (HTTP statuses,
/// exit codes, ...) without matching each variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    /// A team name was empty or whitespace-only when starting a match.
    #[error("{side} team name cannot be empty")]
    EmptyTeamName { side: &'static str },

    /// A score update carried a negative value.
    #[error("score cannot be negative (got {0})")]
    NegativeScore(i32),

    /// A scoreboard query asked for a non-positive number of entries.
    #[error("scoreboard limit must be positive (got {0})")]
    InvalidLimit(i32),

    /// The named team plays on neither side of the match.
    #[error("team '{team}' does not play in match {match_id}")]
    UnknownTeam { match_id: u64, team: String },

    /// No match with this id exists in the registry.
    #[error("match {0} not found")]
    MatchNotFound(u64),

    /// The match has already been completed; its scores are final.
    #[error("match {0} is already completed")]
    MatchCompleted(u64),
}

/// Coarse classification of a [`ScoreboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Malformed input: empty team name, negative score, unknown team,
    /// non-positive limit.
    InvalidArgument,
    /// The referenced match id does not exist.
    NotFound,
    /// The operation violates the match lifecycle.
    InvalidState,
}

impl ScoreboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::EmptyTeamName { .. }
            | ScoreboardError::NegativeScore(_)
            | ScoreboardError::InvalidLimit(_)
            | ScoreboardError::UnknownTeam { .. } => ErrorKind::InvalidArgument,
            ScoreboardError::MatchNotFound(_) => ErrorKind::NotFound,
            ScoreboardError::MatchCompleted(_) => ErrorKind::InvalidState,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
