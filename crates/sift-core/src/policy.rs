use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How an [`Or`](crate::Or) stores the evaluators of its first clause.
///
/// The first clause of a disjunction may arrive as several predicates that
/// were meant to hold together (`div.x` in `div.x, p`).  Historically the
/// wrapping check inspected the disjunction's own, still empty, count and so
/// never wrapped; both behaviours are available here.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use sift_core::FirstClausePolicy;
///
/// let policy = FirstClausePolicy::from_str("Flatten").expect("known policy");
/// assert_eq!(policy, FirstClausePolicy::Flatten);
/// assert_eq!(FirstClausePolicy::default().to_string(), "conjoin");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FirstClausePolicy {
    /// Two or more incoming evaluators are wrapped into a single
    /// [`And`](crate::And) clause.
    #[default]
    Conjoin,
    /// Incoming evaluators are stored as-is, each becoming its own clause.
    Flatten,
}

/// Errors encountered while parsing a [`FirstClausePolicy`] from text.
pub type FirstClausePolicyParseError = strum::ParseError;
