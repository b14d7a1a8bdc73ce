use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recipe from the dataset artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub cuisine: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Ingredients as a single `", "`-separated line.
    pub fn ingredient_line(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// A recipe returned by a query, with its distance to the query vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch {
    pub id: i64,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub distance: f32,
}

/// A recipe matched against a user's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientMatch {
    #[serde(flatten)]
    pub recipe: RecipeMatch,
    /// Recipe ingredients the user did not list, in recipe order
    pub missing: Vec<String>,
}

impl IngredientMatch {
    pub fn can_make(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Outcome of a recipe-ID query (similar recipes or cuisine discovery)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeLookup {
    Found {
        recipe: RecipeMatch,
        recommendations: Vec<RecipeMatch>,
    },
    NotFound {
        input: String,
        example_ids: Vec<i64>,
    },
}

/// A suggested ingredient with its combined co-occurrence score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientSuggestion {
    pub ingredient: String,
    pub score: f32,
}

/// Outcome of a complementary-ingredient query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplementLookup {
    Found {
        recognized: Vec<String>,
        unrecognized: Vec<String>,
        suggestions: Vec<IngredientSuggestion>,
    },
    NothingRecognized {
        unrecognized: Vec<String>,
    },
}

/// Recipe-ID query request.
///
/// `recipe_id` is taken as any JSON value so that floats, booleans and
/// out-of-range numbers reach the dataset lookup and get the not-found
/// fallback instead of a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub recipe_id: Value,
    pub count: Option<i64>,
}

impl RecipeQuery {
    /// The identifier as the text a form user would have typed. A missing
    /// or `null` ID comes back empty.
    pub fn raw_recipe_id(&self) -> String {
        match &self.recipe_id {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Ingredient-list query request
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientQuery {
    pub ingredients: String,
    pub count: Option<i64>,
}

/// The single-field form shared by every engine page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineForm {
    #[serde(default)]
    pub recipe: String,
}

/// JSON API response: the structured result plus its human-readable rendering
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse<T> {
    pub result: T,
    pub lines: Vec<String>,
}

/// Dataset statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub recipes: usize,
    pub vocabulary: usize,
    pub cuisines: usize,
}
