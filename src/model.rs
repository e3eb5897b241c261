//! Shapes exchanged with the recipe server
//!
//! None of these are owned by the client. They are decoded from a response,
//! rendered and dropped, or built from a form and dropped once the request
//! resolves.

use serde::{Deserialize, Serialize};

/// Recipe identifier assigned by the server
pub type RecipeId = i64;

/// A group of ingredients as listed by `GET /ingredients`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCategory {
    /// Category name, shown as the table header
    pub category: String,
    /// Ingredient names, in server order
    pub items: Vec<String>,
}

/// A recipe as listed by search and by `GET /recipes/all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
}

/// A single recipe as returned by `GET /recipe/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// The server does not echo the id back, so this is usually `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub name: String,
    /// Recipe type tag, like `Veg` or `Non-Veg`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Steps in cooking order
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Body of `POST /recipes`
///
/// A `kind` of `Both` (or anything that is not `Veg`/`Non-Veg`) matches
/// recipes of every type. An empty ingredient list matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub ingredients: Vec<String>,
}

/// Body of `POST /recipe/add`
///
/// Built by [`NewRecipeForm::validate`](crate::form::NewRecipeForm::validate),
/// which guarantees every field is present and every step trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipeRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Body of `POST /recipe/update/{id}`
///
/// Replaces the ingredient and step lists of an existing recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Body returned by the mutating endpoints
///
/// Depending on the endpoint and outcome it carries `message`, `success`
/// and `message`, or only `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    /// A response with only a message, as the add endpoint answers on success
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// A response with only an error
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Check if the server rejected the request
    ///
    /// Either an `error` is present or `success` is explicitly `false`.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.success == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_without_id() {
        let json = r#"{"name":"Dal","type":"Veg","ingredients":["lentils"],"steps":["boil"]}"#;
        let detail: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, None);
        assert_eq!(detail.kind, "Veg");
        assert_eq!(detail.steps, vec!["boil"]);
    }

    #[test]
    fn new_recipe_uses_type_key() {
        let req = NewRecipeRequest {
            name: "Dal".into(),
            kind: "Veg".into(),
            ingredients: vec!["lentils".into()],
            steps: vec!["boil".into()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "Veg");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn message_response_failure() {
        let ok: MessageResponse = serde_json::from_str(r#"{"message":"Saved"}"#).unwrap();
        assert!(!ok.is_failure());
        let ok: MessageResponse =
            serde_json::from_str(r#"{"success":true,"message":"Saved"}"#).unwrap();
        assert!(!ok.is_failure());
        let bad: MessageResponse =
            serde_json::from_str(r#"{"error":"All fields are required!"}"#).unwrap();
        assert!(bad.is_failure());
        let bad: MessageResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(bad.is_failure());
    }
}
