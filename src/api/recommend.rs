use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::engine::render;
use crate::error::ApiError;
use crate::models::{
    ComplementLookup, HealthResponse, IngredientMatch, IngredientQuery, QueryResponse,
    RecipeLookup, RecipeQuery,
};
use crate::state::AppState;

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// POST /api/similar - Nearest recipes to a recipe ID
pub async fn similar(
    State(state): State<AppState>,
    payload: Result<Json<RecipeQuery>, JsonRejection>,
) -> Result<Json<QueryResponse<RecipeLookup>>, ApiError> {
    let Json(req) = payload?;
    let raw = req.raw_recipe_id();
    let raw = require(&raw, "recipe_id")?;
    let result = state.engine.similar_recipes(raw, state.count(req.count));
    let lines = render::similar_lines(&result);
    Ok(Json(QueryResponse { result, lines }))
}

/// POST /api/discovery - Nearest recipes from cuisines other than the recipe's own
pub async fn discovery(
    State(state): State<AppState>,
    payload: Result<Json<RecipeQuery>, JsonRejection>,
) -> Result<Json<QueryResponse<RecipeLookup>>, ApiError> {
    let Json(req) = payload?;
    let raw = req.raw_recipe_id();
    let raw = require(&raw, "recipe_id")?;
    let result = state.engine.discover_cuisines(raw, state.count(req.count));
    let lines = render::discovery_lines(&result);
    Ok(Json(QueryResponse { result, lines }))
}

/// POST /api/ingredients - Recipes closest to an ingredient list
pub async fn ingredients(
    State(state): State<AppState>,
    payload: Result<Json<IngredientQuery>, JsonRejection>,
) -> Result<Json<QueryResponse<Vec<IngredientMatch>>>, ApiError> {
    let Json(req) = payload?;
    let raw = require(&req.ingredients, "ingredients")?;
    let result = state
        .engine
        .recipes_for_ingredients(raw, state.count(req.count));
    let lines = render::ingredient_lines(&result);
    Ok(Json(QueryResponse { result, lines }))
}

/// POST /api/complementary - Ingredients that pair with an ingredient list
pub async fn complementary(
    State(state): State<AppState>,
    payload: Result<Json<IngredientQuery>, JsonRejection>,
) -> Result<Json<QueryResponse<ComplementLookup>>, ApiError> {
    let Json(req) = payload?;
    let raw = require(&req.ingredients, "ingredients")?;
    let result = state
        .engine
        .complementary_ingredients(raw, state.count(req.count));
    let lines = render::complement_lines(&result);
    Ok(Json(QueryResponse { result, lines }))
}

/// GET /api/health - Dataset statistics
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.engine.stats())
}
