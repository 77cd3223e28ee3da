//! Roster submission service.
//!
//! Front door for the eligibility gate: resolves the game's officiality,
//! joins the proposed entries with the players' current registration flags,
//! and either persists the batch or refuses it wholesale.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::eligibility::{self, MatchKind, RosterCandidate, RosterDecision};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::competitions as competitions_repo;
use crate::repos::games as games_repo;
use crate::repos::players as players_repo;
use crate::repos::rosters as rosters_repo;
use crate::repos::rosters::{NewRosterEntry, StoredRosterEntry};

/// Roster domain service.
pub struct RosterService;

impl RosterService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and persist a proposed roster for a game.
    ///
    /// All-or-nothing: one ineligible player in an official match refuses
    /// the entire batch, and the rejection lists every offender. The
    /// previous roster for the game is replaced atomically within the
    /// caller's transaction.
    pub async fn submit_roster(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        entries: Vec<NewRosterEntry>,
    ) -> Result<Vec<StoredRosterEntry>, AppError> {
        if entries.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyRoster,
                "Roster submission must contain at least one player",
            )
            .into());
        }

        let game = games_repo::find_by_id(txn, game_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })?;

        let kind = self.resolve_match_kind(txn, game_id, game.competition_id).await?;
        let candidates = self.load_candidates(txn, &entries).await?;

        match eligibility::evaluate(kind, &candidates) {
            RosterDecision::Rejected { ineligible } => {
                info!(
                    game_id,
                    ineligible_count = ineligible.len(),
                    "roster rejected by eligibility rule"
                );
                Err(AppError::roster_ineligible(ineligible))
            }
            RosterDecision::Allowed => {
                rosters_repo::delete_by_game(txn, game_id).await?;
                let stored = rosters_repo::insert_entries(txn, game_id, entries).await?;
                info!(game_id, entry_count = stored.len(), "roster stored");
                Ok(stored)
            }
        }
    }

    /// Read back a game's stored roster.
    pub async fn game_roster<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<StoredRosterEntry>, AppError> {
        if games_repo::find_by_id(conn, game_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game_id} not found"),
            )
            .into());
        }
        Ok(rosters_repo::find_all_by_game(conn, game_id).await?)
    }

    async fn resolve_match_kind<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        competition_id: Option<i64>,
    ) -> Result<MatchKind, AppError> {
        let Some(competition_id) = competition_id else {
            return Ok(MatchKind::Friendly);
        };

        // The FK guarantees the competition exists; a miss here means the
        // store itself is inconsistent.
        let competition = competitions_repo::find_by_id(conn, competition_id)
            .await?
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Game {game_id} references missing competition {competition_id}"),
                )
            })?;

        Ok(eligibility::match_kind(Some(competition.is_official)))
    }

    /// Join the proposed entries with each player's current registration
    /// flag. Any unknown player id fails the whole submission with a
    /// reference error, listing every unknown id - distinct from
    /// ineligibility.
    async fn load_candidates<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        entries: &[NewRosterEntry],
    ) -> Result<Vec<RosterCandidate>, AppError> {
        let ids: Vec<i64> = entries.iter().map(|e| e.player_id).collect();
        let players = players_repo::find_by_ids(conn, &ids).await?;
        let by_id: HashMap<i64, bool> = players
            .into_iter()
            .map(|p| (p.id, p.registration.registered))
            .collect();

        let missing: BTreeSet<i64> = ids
            .iter()
            .copied()
            .filter(|id| !by_id.contains_key(id))
            .collect();
        if !missing.is_empty() {
            let listed = missing
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::reference(
                NotFoundKind::Player,
                format!("Unknown player id(s) in roster submission: {listed}"),
            )
            .into());
        }

        Ok(entries
            .iter()
            .map(|e| RosterCandidate {
                player_id: e.player_id,
                club_id: e.club_id,
                is_captain: e.is_captain,
                registered: by_id[&e.player_id],
            })
            .collect())
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}
