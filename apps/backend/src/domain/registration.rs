//! Registration status projection.
//!
//! `registered`/`verified_at` on a player mirror the existence of
//! registration mappings. The projection advances only through these named
//! transitions, executed inside the same transaction as the mapping write
//! that triggered them, so no reader can observe a mapping without the flag
//! reflecting it or vice versa.

use time::OffsetDateTime;

/// Derived registration projection carried on a player.
///
/// Invariant: `verified_at` is `Some` iff `registered` is true, and records
/// the moment the projection last flipped to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationStatus {
    pub registered: bool,
    pub verified_at: Option<OffsetDateTime>,
}

impl RegistrationStatus {
    /// Transition applied after a mapping row is inserted for the player.
    ///
    /// Idempotent for an already-registered player: the flag stays true and
    /// `verified_at` keeps its original value. Re-registration is not a
    /// refresh.
    #[must_use]
    pub fn on_mapping_created(self, now: OffsetDateTime) -> Self {
        if self.registered {
            return self;
        }
        Self {
            registered: true,
            verified_at: Some(now),
        }
    }

    /// Transition applied after a mapping row is deleted for the player.
    ///
    /// `remaining` is the number of mappings still present for the player;
    /// the flag only drops once the last one is gone.
    #[must_use]
    pub fn on_mapping_removed(self, remaining: u64) -> Self {
        if remaining > 0 {
            return self;
        }
        Self {
            registered: false,
            verified_at: None,
        }
    }
}
