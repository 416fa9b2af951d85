//! Keyword/pattern priority heuristics.
//!
//! # Responsibility
//! - Map task text to a `Priority` deterministically.
//! - Report which signals fired so a score can be explained.
//!
//! # Invariants
//! - Scoring is monotonic: every rule can only raise the running score.
//! - Output is always within `Priority::MIN..=Priority::MAX`.

mod keywords;
mod scorer;

pub use keywords::{PRIORITY_KEYWORDS, TIME_PATTERNS};
pub use scorer::{explain, score, PriorityReport, PrioritySignal, BASELINE_PRIORITY};
