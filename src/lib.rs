//! Controller for the recipe finder pages.
//!
//! The pages are served with empty placeholders and everything else is
//! filled in from the recipe API:
//! - an ingredient checklist, one table per category.
//! - recipe search by type and available ingredients.
//! - a browse list with inline details and deletion.
//! - a form to add new recipes.
//!
//! The crate does not depend on a browser. The document is reached through
//! the [`Page`] trait and the server through the [`RecipeApi`] trait.
//! [`HttpApi`] is the [`reqwest`] implementation of the latter and works both
//! natively and in wasm. The `recipe-ui-web` crate implements [`Page`] for
//! the real DOM and wires the browser events.
//!
//! # Basic usage
//!
//! ```no_run
//! # use recipe_ui::{HttpApi, Page, RecipeUi, UiConfig};
//! # async fn run(page: impl Page) -> Result<(), recipe_ui::Error> {
//! let config = UiConfig::from_toml(r#"base_url = "http://localhost:5000/""#)?;
//! let api = HttpApi::new(config.base_url.clone().unwrap());
//! let ui = RecipeUi::new(api, page, config.elements);
//!
//! ui.on_page_load().await?;
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod page;
pub mod render;

pub use api::{HttpApi, RecipeApi};
pub use config::{ElementIds, UiConfig};
pub use controller::{FormKind, RecipeUi};
pub use error::{Error, Field};
pub use model::*;
pub use page::Page;
