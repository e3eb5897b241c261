//! Client side of the recipe HTTP API
//!
//! [`RecipeApi`] is the seam the [controller](crate::controller) talks to.
//! [`HttpApi`] is the real implementation on top of [`reqwest`], which uses
//! the browser `fetch` when compiled to wasm.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::model::{
    IngredientCategory, MessageResponse, NewRecipeRequest, RecipeDetail, RecipeId, RecipeSummary,
    SearchRequest, UpdateRecipeRequest,
};

/// The recipe server endpoints
///
/// Futures are not required to be [`Send`], everything runs on the page
/// event loop.
#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /ingredients`
    async fn ingredients(&self) -> Result<Vec<IngredientCategory>>;

    /// `POST /recipes`
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RecipeSummary>>;

    /// `GET /recipe/{id}`
    async fn recipe(&self, id: RecipeId) -> Result<RecipeDetail>;

    /// `GET /recipes/all`
    async fn all_recipes(&self) -> Result<Vec<RecipeSummary>>;

    /// `DELETE /recipe/delete/{id}`
    async fn delete_recipe(&self, id: RecipeId) -> Result<MessageResponse>;

    /// `POST /recipe/add`
    ///
    /// A rejection from the server is not an error, it is returned as a
    /// [`MessageResponse`] that [`is_failure`](MessageResponse::is_failure).
    async fn add_recipe(&self, request: &NewRecipeRequest) -> Result<MessageResponse>;

    /// `POST /recipe/update/{id}`
    async fn update_recipe(
        &self,
        id: RecipeId,
        request: &UpdateRecipeRequest,
    ) -> Result<MessageResponse>;
}

/// [`RecipeApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    /// Create a client for the API rooted at `base`
    ///
    /// Endpoint paths are resolved relative to `base`, so
    /// `https://host/app` and `https://host/app/` are the same root.
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    /// Same as [`Self::new`] but reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { client, base }
    }

    /// Root of the API
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.get(self.url(path)?)).await
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpApi {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn ingredients(&self) -> Result<Vec<IngredientCategory>> {
        self.get("ingredients").await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(kind = %request.kind, ingredients = request.ingredients.len()))]
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RecipeSummary>> {
        self.send(self.client.post(self.url("recipes")?).json(request))
            .await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn recipe(&self, id: RecipeId) -> Result<RecipeDetail> {
        self.get(&format!("recipe/{id}")).await
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn all_recipes(&self) -> Result<Vec<RecipeSummary>> {
        self.get("recipes/all").await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_recipe(&self, id: RecipeId) -> Result<MessageResponse> {
        let url = self.url(&format!("recipe/delete/{id}"))?;
        self.send(self.client.delete(url)).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %request.name))]
    async fn add_recipe(&self, request: &NewRecipeRequest) -> Result<MessageResponse> {
        let response = self
            .client
            .post(self.url("recipe/add")?)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await?;
        // rejected recipes come back as a 4xx with an `{error}` body
        match serde_json::from_slice::<MessageResponse>(&body) {
            Ok(message) if status.is_success() || message.is_failure() => Ok(message),
            Ok(_) => Err(Error::Status {
                status: status.as_u16(),
                url,
            }),
            Err(err) if status.is_success() => Err(err.into()),
            Err(_) => Err(Error::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, request))]
    async fn update_recipe(
        &self,
        id: RecipeId,
        request: &UpdateRecipeRequest,
    ) -> Result<MessageResponse> {
        let url = self.url(&format!("recipe/update/{id}"))?;
        self.send(self.client.post(url).json(request)).await
    }
}
