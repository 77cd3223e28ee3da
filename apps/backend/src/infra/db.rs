use std::env;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = resolve_url(profile, owner)?;

    let mut opts = ConnectOptions::new(database_url.clone());
    // A pooled in-memory SQLite database is one database per connection;
    // keep a single connection so every query sees the migrated schema.
    if database_url.starts_with("sqlite::memory:") {
        opts.max_connections(1);
    }
    opts.sqlx_logging(false);

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Single entrypoint for application startup and tests: connect + migrate.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}

/// Resolve the connection URL for a profile.
///
/// Prod always builds a Postgres URL from the environment. Test prefers
/// `KORFHUB_TEST_DB_URL`, then a Postgres URL when `TEST_DB` is configured,
/// and falls back to in-memory SQLite so the suite runs without a server.
fn resolve_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => db_url(profile, owner),
        DbProfile::Test => {
            if let Ok(url) = env::var("KORFHUB_TEST_DB_URL") {
                return Ok(url);
            }
            if env::var("TEST_DB").is_ok() {
                return db_url(profile, owner);
            }
            Ok("sqlite::memory:".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_profile_falls_back_to_sqlite_memory() {
        std::env::remove_var("KORFHUB_TEST_DB_URL");
        std::env::remove_var("TEST_DB");
        let url = resolve_url(DbProfile::Test, DbOwner::App).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }

    #[test]
    #[serial]
    fn test_profile_prefers_explicit_url() {
        std::env::set_var("KORFHUB_TEST_DB_URL", "sqlite://some/file.db?mode=rwc");
        let url = resolve_url(DbProfile::Test, DbOwner::App).unwrap();
        assert_eq!(url, "sqlite://some/file.db?mode=rwc");
        std::env::remove_var("KORFHUB_TEST_DB_URL");
    }
}
