//! Reading and checking the recipe forms

use crate::config::ElementIds;
use crate::error::Field;
use crate::model::{NewRecipeRequest, SearchRequest};
use crate::page::Page;

/// Raw input of the search form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub kind: Option<String>,
    pub ingredients: Vec<String>,
}

impl SearchForm {
    pub fn read(page: &impl Page, ids: &ElementIds) -> Self {
        Self {
            kind: page.checked_radio(&ids.search_type),
            ingredients: page.checked_values(&ids.ingredients_list),
        }
    }

    /// A type is required. No ingredients is a valid search that finds
    /// nothing.
    pub fn validate(self) -> Result<SearchRequest, Field> {
        let kind = self.kind.ok_or(Field::SearchType)?;
        Ok(SearchRequest {
            kind,
            ingredients: self.ingredients,
        })
    }
}

/// Raw input of the new recipe form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipeForm {
    pub name: String,
    pub kind: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl NewRecipeForm {
    pub fn read(page: &impl Page, ids: &ElementIds) -> Self {
        Self {
            name: page.input_value(&ids.recipe_name).unwrap_or_default(),
            kind: page.checked_radio(&ids.recipe_type),
            ingredients: page.checked_values(&ids.ingredients_list),
            steps: page.values_by_class(&ids.step_class),
        }
    }

    /// Check the fields in form order and build the request
    ///
    /// The error is the first missing field. Name and steps are trimmed,
    /// blank steps are dropped.
    pub fn validate(self) -> Result<NewRecipeRequest, Field> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Field::Name);
        }
        let kind = self
            .kind
            .filter(|k| !k.trim().is_empty())
            .ok_or(Field::RecipeType)?;
        if self.ingredients.is_empty() {
            return Err(Field::Ingredients);
        }
        let steps: Vec<String> = self
            .steps
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if steps.is_empty() {
            return Err(Field::Steps);
        }
        Ok(NewRecipeRequest {
            name: name.to_string(),
            kind,
            ingredients: self.ingredients,
            steps,
        })
    }
}
