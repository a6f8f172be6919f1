/// Application routes configuration
use crate::handlers::{
    get_category, get_crew_member, get_latest_launch, get_launch, get_launchpad, get_planet,
    get_planet_moons, get_rocket, health, list_categories, list_crew, list_launchpads,
    list_moons, list_moons_for_planet, list_moons_grouped, list_past_launches, list_planet_moons,
    list_planets, list_rockets, list_upcoming_launches, AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Static catalogs
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(get_category))
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
        .route("/planet-moons", get(list_planet_moons))
        .route("/planet-moons/:id", get(get_planet_moons))
        // Moons
        .route("/moons", get(list_moons))
        .route("/moons/grouped", get(list_moons_grouped))
        .route("/moons/planet/:name", get(list_moons_for_planet))
        // SpaceX
        .route("/spacex/launches/latest", get(get_latest_launch))
        .route("/spacex/launches/upcoming", get(list_upcoming_launches))
        .route("/spacex/launches/past", get(list_past_launches))
        .route("/spacex/launches/:id", get(get_launch))
        .route("/spacex/rockets", get(list_rockets))
        .route("/spacex/rockets/:id", get(get_rocket))
        .route("/spacex/crew", get(list_crew))
        .route("/spacex/crew/:id", get(get_crew_member))
        .route("/spacex/launchpads", get(list_launchpads))
        .route("/spacex/launchpads/:id", get(get_launchpad))
        .with_state(state)
}
