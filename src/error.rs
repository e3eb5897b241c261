//! Error types

use strum::{Display, EnumIter};
use thiserror::Error;

/// Anything that can make a controller operation or an API call fail
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body is not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// An element the operation writes to is not on the page
    #[error("Element '#{0}' not found")]
    MissingElement(String),

    /// The page refused an operation, like inserting malformed markup
    #[error("Page operation failed: {0}")]
    Page(String),

    /// The server refused the request and said why
    #[error("Rejected by the server: {0}")]
    Rejected(String),

    /// A required form field is empty
    #[error("Missing {0}")]
    Validation(Field),
}

/// Required form fields
///
/// The [`Display`](std::fmt::Display) output is a short description used in
/// logs. The user facing text is [`Field::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Field {
    /// Recipe type radio of the search form
    #[strum(serialize = "search type")]
    SearchType,
    #[strum(serialize = "recipe name")]
    Name,
    #[strum(serialize = "recipe type")]
    RecipeType,
    #[strum(serialize = "ingredients")]
    Ingredients,
    #[strum(serialize = "steps")]
    Steps,
}

impl Field {
    /// Message shown to the user when this field is missing
    pub fn message(self) -> &'static str {
        match self {
            Field::Name => "Please enter a recipe name!",
            Field::SearchType | Field::RecipeType => "Please select a recipe type!",
            Field::Ingredients => "Please select at least one ingredient!",
            Field::Steps => "Please enter at least one recipe step!",
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
