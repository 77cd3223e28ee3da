//! Official-match roster eligibility.
//!
//! Callers fetch the game, its competition, and the candidates' current
//! registration flags, then ask for a verdict. A rejection carries the
//! complete set of offenders so the caller can fix every issue in one
//! round trip; the whole batch stands or falls together.

use serde::Serialize;

/// Name of the external registration system, surfaced in rejection messages.
pub const REGISTRATION_SYSTEM: &str = "Twizzit";

/// Whether a game falls under the official-match registration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Linked to a competition flagged official; the eligibility rule applies.
    Official,
    /// No competition, or a competition that is not official; exempt.
    Friendly,
}

/// Resolve a game's match kind.
///
/// `competition_is_official` is `None` when the game has no competition.
pub fn match_kind(competition_is_official: Option<bool>) -> MatchKind {
    match competition_is_official {
        Some(true) => MatchKind::Official,
        _ => MatchKind::Friendly,
    }
}

/// One proposed roster entry joined with the player's current registration flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCandidate {
    pub player_id: i64,
    pub club_id: i64,
    pub is_captain: bool,
    pub registered: bool,
}

/// A player blocked by the eligibility rule, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IneligiblePlayer {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    pub reason: String,
}

/// Outcome of evaluating a proposed roster batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterDecision {
    Allowed,
    /// The whole batch is refused; `ineligible` lists every offender.
    Rejected { ineligible: Vec<IneligiblePlayer> },
}

/// Evaluate a proposed roster batch against the official-match rule.
///
/// Friendlies pass unconditionally; no registration flags are consulted.
/// For official matches every candidate is checked in a single pass, never
/// short-circuiting, so the rejection names all unregistered players at once.
/// Only the current flag value matters; registration history is irrelevant.
pub fn evaluate(kind: MatchKind, candidates: &[RosterCandidate]) -> RosterDecision {
    if kind == MatchKind::Friendly {
        return RosterDecision::Allowed;
    }

    let ineligible: Vec<IneligiblePlayer> = candidates
        .iter()
        .filter(|c| !c.registered)
        .map(|c| IneligiblePlayer {
            player_id: c.player_id,
            reason: "player not registered in the external registration system".to_string(),
        })
        .collect();

    if ineligible.is_empty() {
        RosterDecision::Allowed
    } else {
        RosterDecision::Rejected { ineligible }
    }
}
