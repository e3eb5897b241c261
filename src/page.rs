//! Access to the document the controller renders into

use crate::error::Result;

/// DOM operations needed by the [controller](crate::controller::RecipeUi)
///
/// Elements are addressed by id. Methods take `&self`, the document is
/// shared with the browser and mutated through it. Writing into an element
/// that does not exist is an [`Error::MissingElement`](crate::Error::MissingElement).
pub trait Page {
    /// Check if an element with this id is on the page
    fn exists(&self, id: &str) -> bool;

    /// Replace the content of an element
    fn set_html(&self, id: &str, html: &str) -> Result<()>;

    /// Append markup at the end of an element, keeping what is already there
    fn append_html(&self, id: &str, html: &str) -> Result<()>;

    /// Values of the checked checkboxes inside an element, in document order
    fn checked_values(&self, container_id: &str) -> Vec<String>;

    /// Value of the checked radio button of a group, if any
    fn checked_radio(&self, name: &str) -> Option<String>;

    /// Current value of an input or textarea
    fn input_value(&self, id: &str) -> Option<String>;

    /// Current values of every input or textarea with a class, in document order
    fn values_by_class(&self, class: &str) -> Vec<String>;

    /// Restore a form to its initial values
    fn reset_form(&self, id: &str) -> Result<()>;

    /// Ask the user a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to dismiss
    fn alert(&self, message: &str);
}
