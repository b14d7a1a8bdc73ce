//! Human-readable rendering of query outcomes, one message per line.

use crate::models::{ComplementLookup, IngredientMatch, RecipeLookup, RecipeMatch};

const RECIPE_BORDER: &str = "********************";
const RESULT_BORDER: &str = "========================";
const MATCH_BORDER: &str = "------------------------------";

pub const NOT_FOUND: &str = "Oh no! This recipe is not in our database!";
pub const TRY_THESE_IDS: &str = "Here are a few recipe IDs you can try:";
pub const NOTHING_RECOGNIZED: &str = "No ingredients recognized for matching! Please try again!";
pub const TRY_THESE_INGREDIENTS: &str =
    "You may want to try some of the following: cumin, strawberry, beef, sake, celery";

fn recipe_block(recipe: &RecipeMatch) -> [String; 3] {
    [
        format!("RECIPE ID: {}", recipe.id),
        format!("CUISINE: {}", recipe.cuisine),
        format!("INGREDIENTS: {}", recipe.ingredients.join(", ")),
    ]
}

fn lookup_lines(lookup: &RecipeLookup, heading: &str, empty: &str) -> Vec<String> {
    match lookup {
        RecipeLookup::NotFound { example_ids, .. } => {
            let ids: Vec<String> = example_ids.iter().map(|id| id.to_string()).collect();
            vec![
                NOT_FOUND.to_string(),
                TRY_THESE_IDS.to_string(),
                ids.join(", "),
            ]
        }
        RecipeLookup::Found {
            recipe,
            recommendations,
        } => {
            let mut lines = vec!["Your recipe:".to_string()];
            lines.extend(recipe_block(recipe));
            lines.push(RECIPE_BORDER.to_string());

            if recommendations.is_empty() {
                lines.push(empty.to_string());
                return lines;
            }

            lines.push(heading.to_string());
            for r in recommendations {
                lines.extend(recipe_block(r));
                lines.push(RESULT_BORDER.to_string());
            }
            lines
        }
    }
}

pub fn similar_lines(lookup: &RecipeLookup) -> Vec<String> {
    lookup_lines(
        lookup,
        "Similar recipes you might be interested in:",
        "No similar recipes found.",
    )
}

pub fn discovery_lines(lookup: &RecipeLookup) -> Vec<String> {
    lookup_lines(
        lookup,
        "Try some of these new recipes you might enjoy!",
        "No recipes from other cuisines are available.",
    )
}

pub fn ingredient_lines(matches: &[IngredientMatch]) -> Vec<String> {
    let mut lines = vec!["You can try these recipes!".to_string()];
    for m in matches {
        lines.push(MATCH_BORDER.to_string());
        if m.can_make() {
            lines.push("You have all of the ingredients needed to make this recipe!".to_string());
        } else {
            lines.push(format!("If you buy: {}", m.missing.join(", ")));
            lines.push("You can make:".to_string());
        }
        lines.extend(recipe_block(&m.recipe));
    }
    lines.push(MATCH_BORDER.to_string());
    lines
}

/// Status lines followed by `"* "`-prefixed suggestions.
pub fn complement_lines(lookup: &ComplementLookup) -> Vec<String> {
    let mut lines =
        vec!["Searching for compliments to the following recognized ingredients:".to_string()];

    let (recognized, unrecognized): (&[String], &[String]) = match lookup {
        ComplementLookup::Found {
            recognized,
            unrecognized,
            ..
        } => (recognized.as_slice(), unrecognized.as_slice()),
        ComplementLookup::NothingRecognized { unrecognized } => (&[], unrecognized.as_slice()),
    };

    if recognized.is_empty() {
        lines.push("Nothing!".to_string());
    } else {
        lines.push(recognized.join(", "));
    }
    if !unrecognized.is_empty() {
        lines.push(format!("Not recognized: {}", unrecognized.join(", ")));
    }
    lines.push("**************************".to_string());

    match lookup {
        ComplementLookup::Found { suggestions, .. } => {
            lines.push("These might pair well with your ingredients!".to_string());
            lines.extend(suggestions.iter().map(|s| format!("* {}", s.ingredient)));
        }
        ComplementLookup::NothingRecognized { .. } => {
            lines.push(format!("* {NOTHING_RECOGNIZED}"));
            lines.push(format!("* {TRY_THESE_INGREDIENTS}"));
        }
    }
    lines
}
