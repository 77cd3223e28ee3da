pub mod factory;

use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::AppError;

/// Build an AppState backed by the test database profile.
///
/// Defaults to a fresh in-memory SQLite database per call (migrated on
/// connect), so every test gets an isolated store. Point
/// `KORFHUB_TEST_DB_URL` at Postgres to run the same suite against it.
pub async fn build_test_state() -> Result<AppState, AppError> {
    backend_test_support::logging::init();
    build_state().with_db(DbProfile::Test).build().await
}
