use actix_web::web;

pub mod health;
pub mod players;
pub mod rosters;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the same scopes with the full
/// middleware chain. For tests we register the same paths without those
/// wrappers so that endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Player routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Game roster routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(rosters::configure_routes));
}
