//! Error codes for the Korfhub backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Korfhub backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid player ID provided
    InvalidPlayerId,
    /// Roster submission contained no entries
    EmptyRoster,
    /// A roster entry names a player that does not exist
    RosterPlayerUnknown,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// Club not found
    ClubNotFound,
    /// Competition not found
    CompetitionNotFound,
    /// Registration mapping not found
    MappingNotFound,
    /// General not found error
    NotFound,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    // Business Logic
    /// Roster rejected by the official-match eligibility rule
    RosterIneligible,
    /// Player still referenced by roster entries
    PlayerRostered,
    /// Player already on the game's roster
    DuplicateRosterEntry,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database Constraint Violations
    /// Unique constraint violation (SQLSTATE 23505; generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (SQLSTATE 23503; generic 409)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514; generic 400)
    CheckViolation,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::EmptyRoster => "EMPTY_ROSTER",
            Self::RosterPlayerUnknown => "ROSTER_PLAYER_UNKNOWN",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::ClubNotFound => "CLUB_NOT_FOUND",
            Self::CompetitionNotFound => "COMPETITION_NOT_FOUND",
            Self::MappingNotFound => "MAPPING_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            // Business Logic
            Self::RosterIneligible => "ROSTER_INELIGIBLE",
            Self::PlayerRostered => "PLAYER_ROSTERED",
            Self::DuplicateRosterEntry => "DUPLICATE_ROSTER_ENTRY",
            Self::Conflict => "CONFLICT",

            // Database Constraint Violations
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::InvalidGameId.as_str(), "INVALID_GAME_ID");
        assert_eq!(ErrorCode::InvalidPlayerId.as_str(), "INVALID_PLAYER_ID");
        assert_eq!(ErrorCode::EmptyRoster.as_str(), "EMPTY_ROSTER");
        assert_eq!(
            ErrorCode::RosterPlayerUnknown.as_str(),
            "ROSTER_PLAYER_UNKNOWN"
        );
        assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
        assert_eq!(ErrorCode::PlayerNotFound.as_str(), "PLAYER_NOT_FOUND");
        assert_eq!(ErrorCode::ClubNotFound.as_str(), "CLUB_NOT_FOUND");
        assert_eq!(
            ErrorCode::CompetitionNotFound.as_str(),
            "COMPETITION_NOT_FOUND"
        );
        assert_eq!(ErrorCode::MappingNotFound.as_str(), "MAPPING_NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::RecordNotFound.as_str(), "RECORD_NOT_FOUND");
        assert_eq!(ErrorCode::RosterIneligible.as_str(), "ROSTER_INELIGIBLE");
        assert_eq!(ErrorCode::PlayerRostered.as_str(), "PLAYER_ROSTERED");
        assert_eq!(
            ErrorCode::DuplicateRosterEntry.as_str(),
            "DUPLICATE_ROSTER_ENTRY"
        );
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::UniqueViolation.as_str(), "UNIQUE_VIOLATION");
        assert_eq!(ErrorCode::FkViolation.as_str(), "FK_VIOLATION");
        assert_eq!(ErrorCode::CheckViolation.as_str(), "CHECK_VIOLATION");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
        assert_eq!(ErrorCode::DataCorruption.as_str(), "DATA_CORRUPTION");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::RosterIneligible), "ROSTER_INELIGIBLE");
        assert_eq!(format!("{}", ErrorCode::InvalidGameId), "INVALID_GAME_ID");
        assert_eq!(format!("{}", ErrorCode::UniqueViolation), "UNIQUE_VIOLATION");
        assert_eq!(format!("{}", ErrorCode::FkViolation), "FK_VIOLATION");
    }
}
