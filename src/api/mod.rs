//! Axum handlers: the HTML form pages and the JSON API.

pub mod pages;
pub mod recommend;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route(
            "/simple/",
            get(pages::simple_page).post(pages::simple_submit),
        )
        .route(
            "/discovery/",
            get(pages::discovery_page).post(pages::discovery_submit),
        )
        .route(
            "/ingredient_list/",
            get(pages::ingredient_list_page).post(pages::ingredient_list_submit),
        )
        .route(
            "/complimentary/",
            get(pages::complimentary_page).post(pages::complimentary_submit),
        )
        .route("/api/similar", post(recommend::similar))
        .route("/api/discovery", post(recommend::discovery))
        .route("/api/ingredients", post(recommend::ingredients))
        .route("/api/complementary", post(recommend::complementary))
        .route("/api/health", get(recommend::health))
        .with_state(state)
}
