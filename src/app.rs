use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/fact/:id", get(handlers::fact_page))
        .route("/bookmarks", get(handlers::bookmarks_page))
        .route("/quiz", get(handlers::quiz_page))
        .route("/api/daily", get(handlers::get_daily))
        .route("/api/facts", get(handlers::list_facts))
        .route("/api/facts/:id", get(handlers::get_fact))
        .route("/api/random", get(handlers::random_fact))
        .route("/api/categories", get(handlers::list_categories))
        .route(
            "/api/bookmarks",
            get(handlers::list_bookmarks).post(handlers::add_bookmark),
        )
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/quiz", get(handlers::get_quiz))
        .with_state(state)
}
