//! Thin helpers over `web_sys` for the pre-rendered pages.

use gloo_utils::document;
use log::warn;
use std::fmt;
use themepark_web::RideDataError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement};

#[derive(Debug)]
pub enum PageError {
    MissingElement(&'static str),
    WrongElementType(&'static str),
    MissingLibrary(&'static str),
    RideData(RideDataError),
    Js(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingElement(selector) => {
                write!(f, "Required element '{}' not found", selector)
            }
            PageError::WrongElementType(selector) => {
                write!(f, "Element '{}' has an unexpected type", selector)
            }
            PageError::MissingLibrary(name) => write!(f, "JavaScript library '{}' is not loaded", name),
            PageError::RideData(e) => write!(f, "{}", e),
            PageError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

impl From<RideDataError> for PageError {
    fn from(e: RideDataError) -> Self {
        PageError::RideData(e)
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// First element matching `selector`, if any.
pub fn find(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub fn require(selector: &'static str) -> Result<Element, PageError> {
    find(selector).ok_or(PageError::MissingElement(selector))
}

pub fn require_as<T: JsCast>(selector: &'static str) -> Result<T, PageError> {
    require(selector)?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(selector))
}

/// All elements matching `selector`, in document order.
pub fn find_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove `class` so that its presence equals `on`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        warn!("Failed to update class '{}': {:?}", class, e);
    }
}

/// Show as a block or hide via inline `display`.
pub fn set_displayed(element: &Element, displayed: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let value = if displayed { "block" } else { "none" };
    if let Err(e) = html.style().set_property("display", value) {
        warn!("Failed to set display: {:?}", e);
    }
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove '{}' listener: {:?}", self.event, e);
        }
    }
}
