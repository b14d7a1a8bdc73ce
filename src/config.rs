use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recipe dataset artifact (JSON array of recipes)
    pub data_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Ingredient vocabulary settings
    pub vectorizer: VectorizerConfig,
    /// Recommendations returned when a request does not ask for a count
    pub default_count: usize,
    /// Largest count a request may ask for
    pub max_count: usize,
    /// Recipe IDs suggested to the user when a lookup fails
    pub example_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Ingredients present in more than this fraction of recipes are left out
    /// of the vocabulary. Must be in (0, 1].
    pub max_df: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self { max_df: 0.12 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/recipes.json"),
            bind_addr: "127.0.0.1:5000".to_string(),
            vectorizer: VectorizerConfig::default(),
            default_count: 3,
            max_count: 20,
            example_ids: vec![4758, 23260, 37648, 11935, 4407],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply `RECIPE_RECS_*` overrides read through `lookup` on top of the
    /// defaults. Values that do not parse, or are out of range, are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("RECIPE_RECS_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup("RECIPE_RECS_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(val) = lookup("RECIPE_RECS_MAX_DF") {
            match val.parse::<f64>() {
                Ok(v) if v > 0.0 && v <= 1.0 => config.vectorizer.max_df = v,
                _ => tracing::warn!("Ignoring RECIPE_RECS_MAX_DF={val}: expected a value in (0, 1]"),
            }
        }
        if let Some(val) = lookup("RECIPE_RECS_DEFAULT_COUNT") {
            match val.parse() {
                Ok(v) => config.default_count = v,
                Err(_) => tracing::warn!("Ignoring RECIPE_RECS_DEFAULT_COUNT={val}"),
            }
        }
        if let Some(val) = lookup("RECIPE_RECS_MAX_COUNT") {
            match val.parse() {
                Ok(v) => config.max_count = v,
                Err(_) => tracing::warn!("Ignoring RECIPE_RECS_MAX_COUNT={val}"),
            }
        }
        if let Some(val) = lookup("RECIPE_RECS_EXAMPLE_IDS") {
            let ids = parse_id_list(&val);
            if ids.is_empty() {
                tracing::warn!("Ignoring RECIPE_RECS_EXAMPLE_IDS={val}: no integer IDs found");
            } else {
                config.example_ids = ids;
            }
        }

        config
    }

    /// Resolve a requested recommendation count against the configured
    /// default and upper bound. Zero and negative requests become 1.
    pub fn resolve_count(&self, requested: Option<i64>) -> usize {
        let max = self.max_count.max(1);
        match requested {
            None => self.default_count.clamp(1, max),
            Some(n) if n < 1 => 1,
            Some(n) => usize::try_from(n).unwrap_or(max).min(max),
        }
    }
}

/// Parse a comma-separated list of recipe IDs, skipping anything that is not an integer.
fn parse_id_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}
