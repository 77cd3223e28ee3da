//! Test helpers for generating unique test data
//!
//! Uses ULIDs so that parallel tests never collide on names or external ids.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique Twizzit-style external id in the format `TWZ-{ulid}`.
pub fn unique_twizzit_id() -> String {
    format!("TWZ-{}", Ulid::new())
}
