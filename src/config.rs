//! Controller configuration
//!
//! The configuration is usually embedded in the page as TOML:
//!
//! ```toml
//! base_url = "https://recipes.example.com/"
//! log_filter = "recipe_ui=debug"
//!
//! [elements]
//! results = "search-results"
//! ```
//!
//! Every key is optional. The defaults of [`ElementIds`] are the ids the
//! recipe pages use.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;
use crate::model::RecipeId;

/// Top level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Root of the recipe API
    ///
    /// When `None` the embedder decides, the web crate uses the page origin.
    pub base_url: Option<Url>,
    /// [`tracing`] filter directives
    pub log_filter: String,
    /// Ids and names of the page elements
    pub elements: ElementIds,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            log_filter: "info".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl UiConfig {
    /// Parse a configuration from TOML
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

/// Page elements the controller reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub ingredients_list: String,
    pub recipe_list: String,
    pub recipe_form: String,
    pub results: String,
    pub message: String,
    pub recipe_steps: String,
    pub recipe_name: String,
    /// `name` of the radio group in the search form
    pub search_type: String,
    /// `name` of the radio group in the new recipe form
    pub recipe_type: String,
    /// Class of the step inputs
    pub step_class: String,
    /// Prefix of the per recipe detail containers
    pub details_prefix: String,
    /// Prefix of the per ingredient checkboxes
    pub ingredient_prefix: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            ingredients_list: "ingredients-list".to_string(),
            recipe_list: "recipe-list".to_string(),
            recipe_form: "recipe-form".to_string(),
            results: "results".to_string(),
            message: "message".to_string(),
            recipe_steps: "recipe-steps".to_string(),
            recipe_name: "recipe-name".to_string(),
            search_type: "type".to_string(),
            recipe_type: "recipe-type".to_string(),
            step_class: "step".to_string(),
            details_prefix: "recipe-details-".to_string(),
            ingredient_prefix: "ingredient-".to_string(),
        }
    }
}

impl ElementIds {
    /// Id of the detail container of a recipe in the browse list
    pub fn recipe_details(&self, id: RecipeId) -> String {
        format!("{}{id}", self.details_prefix)
    }

    /// Id of the checkbox of an ingredient
    pub fn ingredient(&self, name: &str) -> String {
        format!("{}{name}", self.ingredient_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn defaults() {
        let ids = ElementIds::default();
        assert_eq!(ids.recipe_details(7), "recipe-details-7");
        assert_eq!(ids.ingredient("Green Chili"), "ingredient-Green Chili");
        assert_eq!(UiConfig::default().log_filter, "info");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(UiConfig::from_toml("").unwrap(), UiConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = UiConfig::from_toml(indoc! {r#"
            base_url = "http://localhost:5000/"
            log_filter = "recipe_ui=debug"

            [elements]
            results = "search-results"
        "#})
        .unwrap();
        assert_eq!(
            config.base_url.as_ref().map(Url::as_str),
            Some("http://localhost:5000/")
        );
        assert_eq!(config.log_filter, "recipe_ui=debug");
        assert_eq!(config.elements.results, "search-results");
        assert_eq!(config.elements.recipe_list, "recipe-list");
    }

    #[test]
    fn bad_url() {
        assert!(UiConfig::from_toml(r#"base_url = "not a url""#).is_err());
    }
}
