//! [`Page`] over the browser document

use recipe_ui::error::Result;
use recipe_ui::{Error, Page};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Window,
};

pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_string()))
    }
}

fn js_error(err: JsValue) -> Error {
    Error::Page(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Value of an input or a textarea
fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(move |i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

impl Page for DomPage {
    fn exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_html(&self, id: &str, html: &str) -> Result<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn append_html(&self, id: &str, html: &str) -> Result<()> {
        // keeps the state of the existing children, unlike `innerHTML +=`
        self.element(id)?
            .insert_adjacent_html("beforeend", html)
            .map_err(js_error)
    }

    fn checked_values(&self, container_id: &str) -> Vec<String> {
        let Ok(container) = self.element(container_id) else {
            return Vec::new();
        };
        match container.query_selector_all("input[type=checkbox]:checked") {
            Ok(list) => elements(&list).filter_map(|e| field_value(&e)).collect(),
            Err(err) => {
                tracing::warn!("Cannot read checked ingredients: {}", js_error(err));
                Vec::new()
            }
        }
    }

    fn checked_radio(&self, name: &str) -> Option<String> {
        let selector = format!("input[type=radio][name='{name}']:checked");
        let element = self.document.query_selector(&selector).ok().flatten()?;
        field_value(&element)
    }

    fn input_value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        field_value(&element)
    }

    fn values_by_class(&self, class: &str) -> Vec<String> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|e| field_value(&e))
            .collect()
    }

    fn reset_form(&self, id: &str) -> Result<()> {
        let form = self
            .element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| Error::Page(format!("'#{id}' is not a form")))?;
        form.reset();
        Ok(())
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!("Cannot show alert: {}", js_error(err));
        }
    }
}
