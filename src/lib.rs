//! In-memory live-score tracking for ongoing sports matches.
//!
//! The crate keeps a registry of matches between two named teams: start a
//! match, update the running score, mark it complete, delete it, and query a
//! ranked scoreboard of in-progress matches (highest total score first, ties
//! broken by most recently started).
//!
//! There is no persistence and no wire protocol — this is a bookkeeping
//! component meant to be embedded behind an API layer. Time is injected
//! through the [`Clock`] trait so lifecycle timestamps are deterministic in
//! tests.
//!
//! # Examples
//!
//! ```
//! use live_scoreboard::MatchRegistry;
//!
//! # fn main() -> live_scoreboard::Result<()> {
//! let mut registry = MatchRegistry::new();
//! let m = registry.start_match("Uruguay", "Italy")?;
//! registry.update_score(m.id, "Uruguay", 2)?;
//!
//! let board = registry.scoreboard();
//! assert_eq!(board[0].total_score(), 2);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod registry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ErrorKind, Result, ScoreboardError};
pub use registry::models::{Match, MatchStatus};
pub use registry::{MatchRegistry, SharedRegistry, DEFAULT_SCOREBOARD_LIMIT};
