//! The page controller
//!
//! [`RecipeUi`] turns one user action into API calls and writes the outcome
//! into the page. Failures follow two policies:
//! - loading the ingredients, the search results or the recipe list replaces
//!   the region with a plain error message.
//! - loading a recipe detail or deleting a recipe is only logged, the page
//!   is left as is.
//!
//! Form validation runs before any request. Every operation still returns
//! the error after handling it, so the embedder can tell what happened.
//! Nothing is retried and overlapping calls are not coordinated.

use crate::api::RecipeApi;
use crate::config::ElementIds;
use crate::error::{Error, Result};
use crate::form::{NewRecipeForm, SearchForm};
use crate::model::RecipeId;
use crate::page::Page;
use crate::render::{self, Tone};

/// Which form the page shows under the shared form id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Ingredient search, results go to the results element
    Search,
    /// New recipe, recognized by the recipe name input
    NewRecipe,
}

/// Controller for the recipe pages
pub struct RecipeUi<A, P> {
    api: A,
    page: P,
    ids: ElementIds,
}

impl<A, P> RecipeUi<A, P>
where
    A: RecipeApi,
    P: Page,
{
    pub fn new(api: A, page: P, ids: ElementIds) -> Self {
        Self { api, page, ids }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Fill the page once it is loaded
    ///
    /// Loads the ingredient checklist and the recipe list if the page has a
    /// place for them. Both are attempted, the first error is returned.
    pub async fn on_page_load(&self) -> Result<()> {
        let ingredients = self.load_ingredients().await;
        let recipes = if self.page.exists(&self.ids.recipe_list) {
            self.load_all_recipes().await
        } else {
            Ok(())
        };
        ingredients.and(recipes)
    }

    /// The form on this page, if any
    pub fn form_kind(&self) -> Option<FormKind> {
        if !self.page.exists(&self.ids.recipe_form) {
            None
        } else if self.page.exists(&self.ids.recipe_name) {
            Some(FormKind::NewRecipe)
        } else {
            Some(FormKind::Search)
        }
    }

    /// Handle a submit of the recipe form
    pub async fn on_form_submit(&self) -> Result<()> {
        match self.form_kind() {
            Some(FormKind::Search) => self.search_recipes().await,
            Some(FormKind::NewRecipe) => self.submit_new_recipe().await,
            None => Err(Error::MissingElement(self.ids.recipe_form.clone())),
        }
    }

    /// Append the ingredient checklist, one table per category
    ///
    /// Does nothing if the page has no ingredient container.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_ingredients(&self) -> Result<()> {
        let container = &self.ids.ingredients_list;
        if !self.page.exists(container) {
            return Ok(());
        }
        match self.api.ingredients().await {
            Ok(categories) => {
                tracing::debug!(categories = categories.len(), "ingredients loaded");
                let html = render::ingredient_tables(&categories, &self.ids);
                self.page.append_html(container, &html.into_string())
            }
            Err(err) => {
                tracing::error!("Error fetching ingredients: {err}");
                let html = render::text(render::INGREDIENTS_ERROR);
                self.page.set_html(container, &html.into_string())?;
                Err(err)
            }
        }
    }

    /// Search recipes with the selected type and checked ingredients
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn search_recipes(&self) -> Result<()> {
        let request = match SearchForm::read(&self.page, &self.ids).validate() {
            Ok(request) => request,
            Err(field) => {
                tracing::warn!("Search form incomplete: missing {field}");
                return Err(Error::Validation(field));
            }
        };
        let results = &self.ids.results;
        match self.api.search(&request).await {
            Ok(recipes) => {
                tracing::debug!(found = recipes.len(), "search done");
                let html = render::search_results(&recipes, results);
                self.page.set_html(results, &html.into_string())
            }
            Err(err) => {
                tracing::error!("Error finding recipes: {err}");
                let html = render::text(render::SEARCH_ERROR);
                self.page.set_html(results, &html.into_string())?;
                Err(err)
            }
        }
    }

    /// Show a recipe inside `target`
    ///
    /// Without a target the recipe's own detail container in the browse list
    /// is used. Failures are only logged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_recipe_detail(&self, id: RecipeId, target: Option<&str>) -> Result<()> {
        let target = match target {
            Some(t) => t.to_string(),
            None => self.ids.recipe_details(id),
        };
        let recipe = match self.api.recipe(id).await {
            Ok(recipe) => recipe,
            Err(err) => {
                tracing::error!("Error fetching recipe details: {err}");
                return Err(err);
            }
        };
        if !self.page.exists(&target) {
            tracing::error!("Recipe details element '#{target}' not found");
            return Err(Error::MissingElement(target));
        }
        self.page
            .set_html(&target, &render::recipe_detail(&recipe).into_string())
    }

    /// Replace the browse list with every recipe
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_all_recipes(&self) -> Result<()> {
        let list = &self.ids.recipe_list;
        match self.api.all_recipes().await {
            Ok(recipes) => {
                tracing::debug!(recipes = recipes.len(), "recipe list loaded");
                let html = render::recipe_list(&recipes, &self.ids);
                self.page.set_html(list, &html.into_string())
            }
            Err(err) => {
                tracing::error!("Error fetching recipes: {err}");
                let html = render::text(render::RECIPES_ERROR);
                self.page.set_html(list, &html.into_string())?;
                Err(err)
            }
        }
    }

    /// Delete a recipe after the user confirms, then reload the list
    ///
    /// Declining is not an error. A failed delete is only logged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        if !self.page.confirm(render::DELETE_CONFIRM) {
            tracing::debug!("delete cancelled");
            return Ok(());
        }
        if let Err(err) = self.api.delete_recipe(id).await {
            tracing::error!("Error deleting recipe: {err}");
            return Err(err);
        }
        self.page.alert(render::DELETE_SUCCESS);
        self.load_all_recipes().await
    }

    /// Validate and save the new recipe form
    ///
    /// The outcome is written into the message element. The form is only
    /// reset when the recipe was saved.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn submit_new_recipe(&self) -> Result<()> {
        let message = &self.ids.message;
        let request = match NewRecipeForm::read(&self.page, &self.ids).validate() {
            Ok(request) => request,
            Err(field) => {
                let html = render::message(field.message(), Tone::Error);
                self.page.set_html(message, &html.into_string())?;
                return Err(Error::Validation(field));
            }
        };

        match self.api.add_recipe(&request).await {
            Ok(response) if response.is_failure() => {
                let reason = response
                    .error
                    .or(response.message)
                    .unwrap_or_else(|| "unknown error".to_string());
                tracing::warn!("Recipe rejected: {reason}");
                let text = format!("Failed to save recipe: {reason}");
                let html = render::message(&text, Tone::Error);
                self.page.set_html(message, &html.into_string())?;
                Err(Error::Rejected(reason))
            }
            Ok(response) => {
                let text = response
                    .message
                    .unwrap_or_else(|| render::SAVE_SUCCESS.to_string());
                tracing::info!(name = %request.name, "recipe saved");
                let html = render::message(&text, Tone::Success);
                self.page.set_html(message, &html.into_string())?;
                self.page.reset_form(&self.ids.recipe_form)
            }
            Err(err) => {
                tracing::error!("Error saving recipe: {err}");
                let html = render::message(render::SAVE_ERROR, Tone::Error);
                self.page.set_html(message, &html.into_string())?;
                Err(err)
            }
        }
    }

    /// Add one more empty step input to the new recipe form
    pub fn add_step_field(&self) -> Result<()> {
        let html = render::step_field(&self.ids.step_class);
        self.page
            .append_html(&self.ids.recipe_steps, &html.into_string())
    }
}
