//! HTML fragments written by the controller
//!
//! All server provided text goes through [`maud`] and is escaped.
//!
//! Links and buttons do not carry inline handlers. They are tagged with data
//! attributes and the embedder dispatches clicks on them:
//! - [`RECIPE_ID_ATTR`] and [`TARGET_ATTR`]: load the recipe detail into the
//!   target element.
//! - [`DELETE_ATTR`]: delete the recipe.
//! - [`ACTION_ATTR`] = [`ADD_STEP_ACTION`]: add a step field.

use maud::{html, Markup};

use crate::config::ElementIds;
use crate::model::{IngredientCategory, RecipeDetail, RecipeSummary};

pub const RECIPE_ID_ATTR: &str = "data-recipe-id";
pub const TARGET_ATTR: &str = "data-target";
pub const DELETE_ATTR: &str = "data-delete-recipe";
pub const ACTION_ATTR: &str = "data-action";
pub const ADD_STEP_ACTION: &str = "add-step";

pub const INGREDIENTS_ERROR: &str = "Error loading ingredients.";
pub const SEARCH_ERROR: &str = "Error finding recipes.";
pub const RECIPES_ERROR: &str = "Error loading recipes.";
pub const NO_RECIPES: &str = "No recipes found.";
pub const SAVE_ERROR: &str = "Error saving recipe.";
pub const SAVE_SUCCESS: &str = "Recipe saved successfully!";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this recipe?";
pub const DELETE_SUCCESS: &str = "Recipe deleted successfully!";

/// Color of an inline [`message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Error => "red",
        }
    }
}

/// One table per category, one checkbox row per ingredient
pub fn ingredient_tables(categories: &[IngredientCategory], ids: &ElementIds) -> Markup {
    html! {
        @for category in categories {
            table style="border: 1px solid #ccc; margin: 10px; padding: 10px;" {
                thead {
                    tr { th { (category.category) } }
                }
                tbody {
                    @for item in &category.items {
                        @let id = ids.ingredient(item);
                        tr {
                            td {
                                input type="checkbox" value=(item) id=(id);
                                label for=(id) { (item) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Search results, each link opens the detail inside `target`
pub fn search_results(recipes: &[RecipeSummary], target: &str) -> Markup {
    html! {
        h2 { "Recipes Found:" }
        @for recipe in recipes {
            a href="#" data-recipe-id=(recipe.id) data-target=(target) { (recipe.name) }
            br;
        }
    }
}

/// Full recipe: name, type, ingredients and numbered steps
pub fn recipe_detail(recipe: &RecipeDetail) -> Markup {
    html! {
        h3 { (recipe.name) }
        h4 { "Type: " (recipe.kind) }
        h3 { "Ingredients:" }
        ul {
            @for ingredient in &recipe.ingredients {
                li { (ingredient) }
            }
        }
        h3 { "Steps:" }
        ol {
            @for step in &recipe.steps {
                li { (step) }
            }
        }
    }
}

/// The browse list: a link, a delete button and an empty detail container
/// per recipe
pub fn recipe_list(recipes: &[RecipeSummary], ids: &ElementIds) -> Markup {
    html! {
        @if recipes.is_empty() {
            p { (NO_RECIPES) }
        }
        @for recipe in recipes {
            @let details = ids.recipe_details(recipe.id);
            div style="margin-bottom: 20px;" {
                a href="#" data-recipe-id=(recipe.id) data-target=(details) { (recipe.name) }
                " "
                button type="button" data-delete-recipe=(recipe.id) { "Delete" }
                div id=(details) {}
            }
        }
    }
}

/// Inline colored message
pub fn message(text: &str, tone: Tone) -> Markup {
    html! {
        p style={ "color: " (tone.color()) ";" } { (text) }
    }
}

/// Escaped plain text
pub fn text(text: &str) -> Markup {
    html! { (text) }
}

/// An extra empty step input
pub fn step_field(class: &str) -> Markup {
    html! {
        br;
        textarea class=(class) placeholder="Enter a step" {}
    }
}
