use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::engine::render;
use crate::models::EngineForm;
use crate::state::AppState;

pub const FIELDS_REQUIRED: &str = "All the form fields are required. ";

const DEMO_IDS: &str = "4758, 10259, 25693, 20130, 22213, 13162, 6602, 42779, 3735, 16903, 12734";

/// The four engine pages, each a single-field form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePage {
    Simple,
    Discovery,
    IngredientList,
    Complimentary,
}

impl EnginePage {
    pub const ALL: [EnginePage; 4] = [
        EnginePage::Simple,
        EnginePage::Discovery,
        EnginePage::IngredientList,
        EnginePage::Complimentary,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            EnginePage::Simple => "/simple/",
            EnginePage::Discovery => "/discovery/",
            EnginePage::IngredientList => "/ingredient_list/",
            EnginePage::Complimentary => "/complimentary/",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EnginePage::Simple => "Recipe ID Recommendations",
            EnginePage::Discovery => "Cuisine Discovery",
            EnginePage::IngredientList => "Recipes From Your Ingredients",
            EnginePage::Complimentary => "Complementary Ingredients",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EnginePage::Simple | EnginePage::Discovery => "Recipe ID:",
            EnginePage::IngredientList | EnginePage::Complimentary => "Ingredients:",
        }
    }

    pub fn description(&self) -> String {
        const INGREDIENT_HINT: &str = "Input is not normalized yet, so list ingredients in lower case, \
            without plurals, verbs or adjectives, separated by a comma and a space. \
            Single items such as \"beef\" or \"strawberry\" work, as do lists such as \
            \"chicken, milk, sausage, butter\".";

        match self {
            EnginePage::Simple => format!(
                "Enter the ID of a recipe from the dataset to get the most similar recipes in it. \
                 IDs are in random order; in a real deployment this would run behind the scenes \
                 whenever a user rates a recipe highly. A few IDs to start with: {DEMO_IDS}"
            ),
            EnginePage::Discovery => format!(
                "Enter the ID of a recipe you enjoyed to get the closest recipes from cuisines \
                 other than its own, each from a different cuisine. Use it to find new cuisines \
                 that stay close to your taste. A few IDs to start with: {DEMO_IDS}"
            ),
            EnginePage::IngredientList => format!(
                "Enter the ingredients you have and get the recipes that best match them, along \
                 with anything you would still need to buy. {INGREDIENT_HINT}"
            ),
            EnginePage::Complimentary => format!(
                "Enter a few ingredients and get suggestions for ingredients that pair well with \
                 them, based on how often they appear together in recipes. {INGREDIENT_HINT}"
            ),
        }
    }
}

/// Run the page's engine on raw form input and render its output lines.
fn run_engine(state: &AppState, page: EnginePage, input: &str) -> Vec<String> {
    let engine = &state.engine;
    let count = state.count(None);
    match page {
        EnginePage::Simple => render::similar_lines(&engine.similar_recipes(input, count)),
        EnginePage::Discovery => render::discovery_lines(&engine.discover_cuisines(input, count)),
        EnginePage::IngredientList => {
            render::ingredient_lines(&engine.recipes_for_ingredients(input, count))
        }
        EnginePage::Complimentary => {
            render::complement_lines(&engine.complementary_ingredients(input, count))
        }
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
    ul.messages{list-style:none;padding:0}\
    ul.messages li{white-space:pre-wrap;margin:.2rem 0}\
    nav a{margin-right:1rem}";

fn layout(title: &str, body: &str) -> Html<String> {
    let nav: String = EnginePage::ALL
        .iter()
        .map(|p| format!(r#"<a href="{}">{}</a>"#, p.path(), escape_html(p.title())))
        .collect();
    Html(format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head>\
         <body><nav><a href=\"/\">Home</a>{nav}</nav><h1>{title}</h1>{body}</body></html>",
        title = escape_html(title),
    ))
}

fn engine_page(page: EnginePage, input: &str, messages: &[String]) -> Html<String> {
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape_html(m)))
        .collect();
    let body = format!(
        r#"<ul class="messages">{items}</ul>
<form method="post" action="{action}">
<label for="recipe">{label}</label>
<input id="recipe" name="recipe" type="text" value="{value}">
<input type="submit" value="Submit">
</form>"#,
        action = page.path(),
        label = page.label(),
        value = escape_html(input),
    );
    layout(page.title(), &body)
}

fn show(page: EnginePage) -> Html<String> {
    engine_page(page, "", &[page.description()])
}

fn submit(state: &AppState, page: EnginePage, form: &EngineForm) -> Html<String> {
    let mut messages = vec![page.description()];
    let input = form.recipe.as_str();

    if input.trim().is_empty() {
        messages.push(FIELDS_REQUIRED.to_string());
    } else {
        tracing::debug!("{} submitted: {input:?}", page.path());
        messages.extend(run_engine(state, page, input));
    }

    engine_page(page, input, &messages)
}

/// GET / - Landing page
pub async fn home() -> Html<String> {
    let links: String = EnginePage::ALL
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                p.path(),
                escape_html(p.title())
            )
        })
        .collect();
    layout(
        "Recipe Recommendations",
        &format!("<p>Pick an engine to try:</p><ul>{links}</ul>"),
    )
}

/// GET /simple/
pub async fn simple_page() -> Html<String> {
    show(EnginePage::Simple)
}

/// POST /simple/ - Similar recipes by ID
pub async fn simple_submit(
    State(state): State<AppState>,
    Form(form): Form<EngineForm>,
) -> Html<String> {
    submit(&state, EnginePage::Simple, &form)
}

/// GET /discovery/
pub async fn discovery_page() -> Html<String> {
    show(EnginePage::Discovery)
}

/// POST /discovery/ - Similar recipes from other cuisines
pub async fn discovery_submit(
    State(state): State<AppState>,
    Form(form): Form<EngineForm>,
) -> Html<String> {
    submit(&state, EnginePage::Discovery, &form)
}

/// GET /ingredient_list/
pub async fn ingredient_list_page() -> Html<String> {
    show(EnginePage::IngredientList)
}

/// POST /ingredient_list/ - Recipes matching an ingredient list
pub async fn ingredient_list_submit(
    State(state): State<AppState>,
    Form(form): Form<EngineForm>,
) -> Html<String> {
    submit(&state, EnginePage::IngredientList, &form)
}

/// GET /complimentary/
pub async fn complimentary_page() -> Html<String> {
    show(EnginePage::Complimentary)
}

/// POST /complimentary/ - Ingredients that pair with an ingredient list
pub async fn complimentary_submit(
    State(state): State<AppState>,
    Form(form): Form<EngineForm>,
) -> Html<String> {
    submit(&state, EnginePage::Complimentary, &form)
}
