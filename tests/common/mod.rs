//! In memory doubles for the page and the recipe server

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use recipe_ui::{
    error::Result, Error, IngredientCategory, MessageResponse, NewRecipeRequest, Page, RecipeApi,
    RecipeDetail, RecipeId, RecipeSummary, SearchRequest, UpdateRecipeRequest,
};

/// A document made of element ids and form state
#[derive(Default)]
pub struct MemoryPage {
    elements: RefCell<BTreeMap<String, String>>,
    inputs: RefCell<BTreeMap<String, String>>,
    checked: RefCell<BTreeMap<String, Vec<String>>>,
    radios: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeMap<String, Vec<String>>>,
    confirm_answer: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub resets: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), String::new());
        self
    }

    pub fn with_html(self, id: &str, html: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), html.to_string());
        self
    }

    /// An input element with a value
    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.inputs
            .borrow_mut()
            .insert(id.to_string(), value.to_string());
        self.with_element(id)
    }

    pub fn with_checked(self, container: &str, values: &[&str]) -> Self {
        self.checked.borrow_mut().insert(
            container.to_string(),
            values.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_radio(self, name: &str, value: &str) -> Self {
        self.radios
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class_values(self, class: &str, values: &[&str]) -> Self {
        self.classes.borrow_mut().insert(
            class.to_string(),
            values.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn answer_confirm(self, answer: bool) -> Self {
        self.confirm_answer.set(answer);
        self
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }
}

impl Page for MemoryPage {
    fn exists(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_html(&self, id: &str, html: &str) -> Result<()> {
        match self.elements.borrow_mut().get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                Ok(())
            }
            None => Err(Error::MissingElement(id.to_string())),
        }
    }

    fn append_html(&self, id: &str, html: &str) -> Result<()> {
        match self.elements.borrow_mut().get_mut(id) {
            Some(content) => {
                content.push_str(html);
                Ok(())
            }
            None => Err(Error::MissingElement(id.to_string())),
        }
    }

    fn checked_values(&self, container_id: &str) -> Vec<String> {
        self.checked
            .borrow()
            .get(container_id)
            .cloned()
            .unwrap_or_default()
    }

    fn checked_radio(&self, name: &str) -> Option<String> {
        self.radios.borrow().get(name).cloned()
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.borrow().get(id).cloned()
    }

    fn values_by_class(&self, class: &str) -> Vec<String> {
        self.classes.borrow().get(class).cloned().unwrap_or_default()
    }

    fn reset_form(&self, id: &str) -> Result<()> {
        if !self.exists(id) {
            return Err(Error::MissingElement(id.to_string()));
        }
        self.inputs
            .borrow_mut()
            .values_mut()
            .for_each(String::clear);
        self.checked.borrow_mut().clear();
        self.radios.borrow_mut().clear();
        self.classes
            .borrow_mut()
            .values_mut()
            .for_each(|values| values.iter_mut().for_each(String::clear));
        self.resets.borrow_mut().push(id.to_string());
        Ok(())
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// A request received by [`MockApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ingredients,
    Search(SearchRequest),
    Recipe(RecipeId),
    AllRecipes,
    Delete(RecipeId),
    Add(NewRecipeRequest),
    Update(RecipeId, UpdateRecipeRequest),
}

/// Canned server, `None` answers fail like a 500
#[derive(Default)]
pub struct MockApi {
    pub ingredients: Option<Vec<IngredientCategory>>,
    pub search: Option<Vec<RecipeSummary>>,
    pub recipes: BTreeMap<RecipeId, RecipeDetail>,
    pub all_recipes: Option<Vec<RecipeSummary>>,
    pub delete: Option<MessageResponse>,
    pub add: Option<MessageResponse>,
    pub update: Option<MessageResponse>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn reply<T: Clone>(canned: &Option<T>, path: &str) -> Result<T> {
    canned.clone().ok_or_else(|| Error::Status {
        status: 500,
        url: format!("http://mock{path}"),
    })
}

#[async_trait(?Send)]
impl RecipeApi for MockApi {
    async fn ingredients(&self) -> Result<Vec<IngredientCategory>> {
        self.record(Call::Ingredients);
        reply(&self.ingredients, "/ingredients")
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<RecipeSummary>> {
        self.record(Call::Search(request.clone()));
        reply(&self.search, "/recipes")
    }

    async fn recipe(&self, id: RecipeId) -> Result<RecipeDetail> {
        self.record(Call::Recipe(id));
        reply(&self.recipes.get(&id).cloned(), &format!("/recipe/{id}"))
    }

    async fn all_recipes(&self) -> Result<Vec<RecipeSummary>> {
        self.record(Call::AllRecipes);
        reply(&self.all_recipes, "/recipes/all")
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<MessageResponse> {
        self.record(Call::Delete(id));
        reply(&self.delete, &format!("/recipe/delete/{id}"))
    }

    async fn add_recipe(&self, request: &NewRecipeRequest) -> Result<MessageResponse> {
        self.record(Call::Add(request.clone()));
        reply(&self.add, "/recipe/add")
    }

    async fn update_recipe(
        &self,
        id: RecipeId,
        request: &UpdateRecipeRequest,
    ) -> Result<MessageResponse> {
        self.record(Call::Update(id, request.clone()));
        reply(&self.update, &format!("/recipe/update/{id}"))
    }
}

pub fn summary(id: RecipeId, name: &str) -> RecipeSummary {
    RecipeSummary {
        id,
        name: name.to_string(),
    }
}

pub fn category(name: &str, items: &[&str]) -> IngredientCategory {
    IngredientCategory {
        category: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}
