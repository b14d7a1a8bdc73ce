//! Integration tests for the recommendation pipeline.
//!
//! These tests load a small fixture dataset from disk, build the engine the
//! same way the server does, and drive both the engine and the HTTP router.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use recipe_recs::api;
use recipe_recs::config::{Config, VectorizerConfig};
use recipe_recs::dataset::Dataset;
use recipe_recs::engine::{render, RecommendationEngine};
use recipe_recs::models::{ComplementLookup, HealthResponse, RecipeLookup};
use recipe_recs::state::AppState;

const FIXTURE: &str = include_str!("fixtures/recipes.json");

/// Helper: write the fixture to a temp dir and return a config pointing at it.
fn fixture_config(dir: &tempfile::TempDir) -> Config {
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, FIXTURE).unwrap();
    Config {
        data_path: path,
        vectorizer: VectorizerConfig { max_df: 1.0 },
        ..Config::default()
    }
}

fn fixture_state() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    AppState::new(fixture_config(&dir)).unwrap()
}

fn fixture_engine() -> RecommendationEngine {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(&dir);
    let dataset = Dataset::load(&config.data_path).unwrap();
    RecommendationEngine::build(dataset, &config).unwrap()
}

async fn send(state: AppState, req: Request<Body>) -> (StatusCode, String) {
    let resp = api::router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[test]
fn test_similar_recipes_for_4758() {
    let engine = fixture_engine();
    let result = engine.similar_recipes("4758", 3);

    let RecipeLookup::Found {
        recipe,
        recommendations,
    } = &result
    else {
        panic!("4758 should be in the fixture");
    };
    assert_eq!(recipe.id, 4758);
    let ids: Vec<i64> = recommendations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![42779, 6602, 10259]);
    assert!(recommendations
        .windows(2)
        .all(|w| w[0].distance <= w[1].distance));

    let lines = render::similar_lines(&result);
    assert_eq!(lines[1], "RECIPE ID: 4758");
    assert_eq!(lines.iter().filter(|l| l.starts_with("RECIPE ID:")).count(), 4);
}

#[test]
fn test_every_recipe_gets_count_neighbors_without_itself() {
    let engine = fixture_engine();
    for recipe in engine.dataset().recipes() {
        match engine.similar_recipes(&recipe.id.to_string(), 3) {
            RecipeLookup::Found {
                recommendations, ..
            } => {
                assert_eq!(recommendations.len(), 3);
                assert!(recommendations.iter().all(|r| r.id != recipe.id));
            }
            RecipeLookup::NotFound { .. } => panic!("{} should be found", recipe.id),
        }
    }
}

#[test]
fn test_discovery_cuisines_are_pairwise_distinct() {
    let engine = fixture_engine();
    for recipe in engine.dataset().recipes() {
        let RecipeLookup::Found {
            recommendations, ..
        } = engine.discover_cuisines(&recipe.id.to_string(), 3)
        else {
            panic!("{} should be found", recipe.id);
        };
        assert_eq!(recommendations.len(), 3);

        let mut cuisines: HashSet<&str> = HashSet::new();
        cuisines.insert(recipe.cuisine.as_str());
        for r in &recommendations {
            assert!(
                cuisines.insert(r.cuisine.as_str()),
                "cuisine {} repeated for {}",
                r.cuisine,
                recipe.id
            );
        }
    }
}

#[test]
fn test_unknown_ids_return_the_same_fallback() {
    let engine = fixture_engine();
    let expected = render::similar_lines(&engine.similar_recipes("-1", 3));
    assert_eq!(expected[0], render::NOT_FOUND);

    for raw in ["0", "99999", "abc", "47 58", "4758x"] {
        assert_eq!(render::similar_lines(&engine.similar_recipes(raw, 3)), expected);
        assert_eq!(
            render::discovery_lines(&engine.discover_cuisines(raw, 3)),
            expected
        );
    }
}

#[test]
fn test_ingredient_list_finds_makeable_recipe() {
    let engine = fixture_engine();
    let matches = engine.recipes_for_ingredients("flour, butter, buttermilk, sausage, milk", 3);
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].recipe.id, 25693);
    assert!(matches[0].can_make());
    assert_eq!(matches[1].recipe.id, 16903);
    assert_eq!(matches[1].missing, vec!["chicken".to_string()]);
}

#[test]
fn test_complementary_for_chicken_milk_sausage_butter() {
    let engine = fixture_engine();
    let input = ["chicken", "milk", "sausage", "butter"];
    let ComplementLookup::Found {
        recognized,
        suggestions,
        ..
    } = engine.complementary_ingredients(&input.join(", "), 3)
    else {
        panic!("all four ingredients are in the fixture vocabulary");
    };

    assert_eq!(recognized.len(), 4);
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].ingredient, "flour");
    assert!(suggestions
        .iter()
        .all(|s| !input.contains(&s.ingredient.as_str())));
    assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_max_df_prunes_common_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        vectorizer: VectorizerConfig { max_df: 0.3 },
        ..fixture_config(&dir)
    };
    let engine = RecommendationEngine::build(Dataset::load(&config.data_path).unwrap(), &config)
        .unwrap();

    // tomato and garlic are each in 5 of 10 recipes
    assert_eq!(engine.vectorizer().column("tomato"), None);
    assert_eq!(engine.vectorizer().column("garlic"), None);
    assert!(engine.vectorizer().column("chicken").is_some());
}

#[tokio::test]
async fn test_home_page_links_engines() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(fixture_state(), req).await;
    assert_eq!(status, StatusCode::OK);
    for path in ["/simple/", "/discovery/", "/ingredient_list/", "/complimentary/"] {
        assert!(body.contains(path), "missing link to {path}");
    }
}

#[tokio::test]
async fn test_simple_form_roundtrip() {
    let (status, body) = send(fixture_state(), form_post("/simple/", "recipe=4758")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("RECIPE ID: 42779"));
    assert_eq!(body.matches("RECIPE ID:").count(), 4);
}

#[tokio::test]
async fn test_blank_form_shows_validation_message() {
    for uri in ["/simple/", "/discovery/", "/ingredient_list/", "/complimentary/"] {
        let (status, body) = send(fixture_state(), form_post(uri, "recipe=+")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("All the form fields are required."), "{uri}");
    }
}

#[tokio::test]
async fn test_discovery_form_unknown_id() {
    let (_, body) = send(fixture_state(), form_post("/discovery/", "recipe=nope")).await;
    assert!(body.contains("Oh no! This recipe is not in our database!"));
    assert!(body.contains("4758, 23260, 37648, 11935, 4407"));
}

#[tokio::test]
async fn test_complimentary_form_prefixes_suggestions() {
    let (_, body) = send(
        fixture_state(),
        form_post("/complimentary/", "recipe=chicken%2C+milk%2C+sausage%2C+butter"),
    )
    .await;
    assert!(body.contains("<li>* flour</li>"));
}

#[tokio::test]
async fn test_api_similar_and_health() {
    let (status, body) = send(
        fixture_state(),
        json_post("/api/similar", serde_json::json!({"recipe_id": 4758, "count": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["result"]["status"], "found");
    assert_eq!(json["result"]["recommendations"].as_array().unwrap().len(), 2);
    assert_eq!(json["result"]["recommendations"][0]["id"], 42779);

    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(fixture_state(), req).await;
    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(
        health,
        HealthResponse {
            recipes: 10,
            vocabulary: 30,
            cuisines: 8,
        }
    );
}

#[tokio::test]
async fn test_api_complementary_nothing_recognized() {
    let (status, body) = send(
        fixture_state(),
        json_post("/api/complementary", serde_json::json!({"ingredients": "unicorn"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["result"]["status"], "nothing_recognized");
    assert_eq!(json["result"]["unrecognized"][0], "unicorn");
}

#[tokio::test]
async fn test_api_blank_input_is_bad_request() {
    let (status, body) = send(
        fixture_state(),
        json_post("/api/ingredients", serde_json::json!({"ingredients": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "ingredients is required");
}

#[tokio::test]
async fn test_api_non_integer_recipe_ids_get_the_fallback() {
    for (uri, id) in [
        ("/api/similar", serde_json::json!(4758.5)),
        ("/api/similar", serde_json::json!(true)),
        ("/api/discovery", serde_json::json!(1e30)),
        ("/api/discovery", serde_json::json!([4758])),
    ] {
        let (status, body) = send(
            fixture_state(),
            json_post(uri, serde_json::json!({ "recipe_id": id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{uri} {id}");
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["result"]["status"], "not_found", "{uri} {id}");
        assert_eq!(json["result"]["example_ids"][0], 4758);
        assert_eq!(json["lines"][0], render::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_api_null_or_missing_recipe_id_is_bad_request() {
    for body in [serde_json::json!({"recipe_id": null}), serde_json::json!({"count": 2})] {
        let (status, text) = send(fixture_state(), json_post("/api/similar", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, "recipe_id is required");
    }
}

#[tokio::test]
async fn test_api_count_is_clamped() {
    for (count, expected) in [(-1, 1), (0, 1), (500, 9)] {
        let (status, body) = send(
            fixture_state(),
            json_post(
                "/api/similar",
                serde_json::json!({"recipe_id": "4758", "count": count}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "count {count}");
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let recommendations = json["result"]["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), expected, "count {count}");
    }
}

#[tokio::test]
async fn test_api_unreadable_body_is_bad_request_not_422() {
    let malformed = Request::builder()
        .method("POST")
        .uri("/api/ingredients")
        .header("content-type", "application/json")
        .body(Body::from("{\"ingredients\": "))
        .unwrap();
    let (status, _) = send(fixture_state(), malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        fixture_state(),
        json_post(
            "/api/complementary",
            serde_json::json!({"ingredients": "chicken", "count": 2.5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid request body"), "{body}");
}
