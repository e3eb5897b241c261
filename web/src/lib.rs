//! Browser entry point of the recipe pages
//!
//! Loading the module builds a [`RecipeUi`] over the document and the page
//! origin (or the configured `base_url`), then:
//! - fills the page once the DOM is ready.
//! - handles submits of the recipe form.
//! - dispatches clicks on the links and buttons the controller renders.
//!
//! The exported functions are meant for inline handlers in the page
//! templates, like `onclick="recipes.add_step()"`.

use std::cell::RefCell;
use std::rc::Rc;

use recipe_ui::render::{ACTION_ATTR, ADD_STEP_ACTION, DELETE_ATTR, RECIPE_ID_ATTR, TARGET_ATTR};
use recipe_ui::{HttpApi, RecipeId, RecipeUi, UiConfig};
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Window};

mod dom;
mod log;

use dom::DomPage;

type WebUi = RecipeUi<HttpApi, DomPage>;

/// Id of the `<script type="application/toml">` holding the configuration
const CONFIG_ELEMENT: &str = "recipe-ui-config";

thread_local! {
    static UI: RefCell<Option<Rc<WebUi>>> = const { RefCell::new(None) };
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = read_config(&document)?;
    log::init(&config.log_filter);

    let base = match config.base_url.clone() {
        Some(url) => url,
        None => origin(&window)?,
    };
    tracing::debug!(%base, "starting recipe ui");

    let page = DomPage::new(window.clone(), document.clone());
    let ui = Rc::new(RecipeUi::new(HttpApi::new(base), page, config.elements));
    UI.with(|cell| *cell.borrow_mut() = Some(Rc::clone(&ui)));

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move |_: Event| {
            if let Err(err) = attach(ui, &doc) {
                tracing::error!("Cannot attach handlers: {err:?}");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        attach(ui, &document)
    }
}

/// Append an empty step input to the new recipe form
#[wasm_bindgen]
pub fn add_step() {
    with_ui(|ui| {
        if let Err(err) = ui.add_step_field() {
            tracing::error!("Cannot add step: {err}");
        }
    });
}

/// Show a recipe inside `target`, by default its browse list container
#[wasm_bindgen]
pub fn show_recipe(id: i32, target: Option<String>) {
    with_ui(|ui| {
        spawn_local(async move {
            let _ = ui.load_recipe_detail(RecipeId::from(id), target.as_deref()).await;
        })
    });
}

/// Ask for confirmation and delete a recipe
#[wasm_bindgen]
pub fn delete_recipe(id: i32) {
    with_ui(|ui| {
        spawn_local(async move {
            let _ = ui.delete_recipe(RecipeId::from(id)).await;
        })
    });
}

/// Reload the browse list
#[wasm_bindgen]
pub fn reload_recipes() {
    with_ui(|ui| {
        spawn_local(async move {
            let _ = ui.load_all_recipes().await;
        })
    });
}

fn with_ui(f: impl FnOnce(Rc<WebUi>)) {
    match UI.with(|cell| cell.borrow().clone()) {
        Some(ui) => f(ui),
        None => tracing::warn!("recipe ui is not started"),
    }
}

fn read_config(document: &Document) -> Result<UiConfig, JsValue> {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|e| e.text_content())
    else {
        return Ok(UiConfig::default());
    };
    UiConfig::from_toml(&text).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn origin(window: &Window) -> Result<Url, JsValue> {
    let origin = window.location().origin()?;
    Url::parse(&origin).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn attach(ui: Rc<WebUi>, document: &Document) -> Result<(), JsValue> {
    if let Some(form) = document.get_element_by_id(&ui.ids().recipe_form) {
        let ui = Rc::clone(&ui);
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let ui = Rc::clone(&ui);
            spawn_local(async move {
                let _ = ui.on_form_submit().await;
            });
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    let click_handler = {
        let ui = Rc::clone(&ui);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| on_click(&ui, &event))
    };
    document.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
    click_handler.forget();

    spawn_local(async move {
        let _ = ui.on_page_load().await;
    });
    Ok(())
}

fn closest(target: &Element, attr: &str) -> Option<Element> {
    target.closest(&format!("[{attr}]")).ok().flatten()
}

fn recipe_id(element: &Element, attr: &str) -> Option<RecipeId> {
    let value = element.get_attribute(attr)?;
    match value.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!("Invalid recipe id '{value}'");
            None
        }
    }
}

fn on_click(ui: &Rc<WebUi>, event: &Event) {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return;
    };

    if let Some(link) = closest(&target, RECIPE_ID_ATTR) {
        event.prevent_default();
        let Some(id) = recipe_id(&link, RECIPE_ID_ATTR) else {
            return;
        };
        let detail_target = link.get_attribute(TARGET_ATTR);
        let ui = Rc::clone(ui);
        spawn_local(async move {
            let _ = ui.load_recipe_detail(id, detail_target.as_deref()).await;
        });
    } else if let Some(button) = closest(&target, DELETE_ATTR) {
        event.prevent_default();
        let Some(id) = recipe_id(&button, DELETE_ATTR) else {
            return;
        };
        let ui = Rc::clone(ui);
        spawn_local(async move {
            let _ = ui.delete_recipe(id).await;
        });
    } else if let Some(control) = closest(&target, ACTION_ATTR) {
        if control.get_attribute(ACTION_ATTR).as_deref() == Some(ADD_STEP_ACTION) {
            event.prevent_default();
            if let Err(err) = ui.add_step_field() {
                tracing::error!("Cannot add step: {err}");
            }
        }
    }
}
