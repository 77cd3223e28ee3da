//! Domain services - orchestration over repos and pure domain functions.
//! All mutations run inside a caller-provided `DatabaseTransaction`.

pub mod players;
pub mod registrations;
pub mod rosters;
