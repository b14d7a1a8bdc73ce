//! # recipe-recs
//!
//! A small web service that recommends recipes and ingredients from a static
//! recipe dataset using binary ingredient vectors and nearest-neighbor search.
//!
//! ## Architecture
//!
//! Everything is built once at startup into an immutable engine that every
//! request reads by shared reference:
//!
//! ```text
//!                  ┌─────────────────────┐
//!                  │  recipes.json       │
//!                  │  id/cuisine/ingreds │
//!                  └──────────┬──────────┘
//!                             │ Dataset::load
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │ IngredientVectorizer│
//!                  │ sorted vocabulary,  │
//!                  │ max_df pruning      │
//!                  └──────────┬──────────┘
//!                             │ binary sparse rows
//!               ┌─────────────┴─────────────┐
//!               ▼                           ▼
//!     ┌───────────────────┐       ┌───────────────────┐
//!     │  NeighborIndex    │       │ CooccurrenceMatrix│
//!     │  Euclidean k-NN   │       │ P(j | i), diag 0  │
//!     └─────────┬─────────┘       └─────────┬─────────┘
//!               │                           │
//!     ┌─────────┴──────────┬────────────────┤
//!     ▼                    ▼                ▼
//! similar_recipes    recipes_for_     complementary_
//! discover_cuisines  ingredients      ingredients
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration
//! - [`models`] - Recipes, query outcomes, and request/response types
//! - [`dataset`] - Loading the recipe artifact and resolving recipe IDs
//! - [`search::vectorizer`] - Ingredient vocabulary and binary sparse rows
//! - [`search::neighbors`] - Euclidean nearest-neighbor search over sparse rows
//! - [`search::cooccurrence`] - Ingredient co-occurrence fractions
//! - [`engine`] - The four recommendation queries and their text rendering
//! - [`api`] - Axum handlers for the HTML form pages and the JSON API
//! - [`state`] - Shared application state holding config and the engine

pub mod api;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
