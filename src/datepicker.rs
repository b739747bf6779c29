//! JavaScript interop for the flatpickr date picker.
//! The library is loaded by the page as a global script.

use crate::dom::PageError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = flatpickr)]
    fn flatpickr(selector: &str, config: &JsValue) -> Result<JsValue, JsValue>;
}

/// Options passed to flatpickr. Empty keeps the library defaults.
#[derive(Serialize, Default)]
pub struct DatePickerConfig {}

/// Turn the input matched by `selector` into a flatpickr calendar.
pub fn attach(selector: &str, config: &DatePickerConfig) -> Result<(), PageError> {
    let loaded = js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("flatpickr"))
        .unwrap_or(false);
    if !loaded {
        return Err(PageError::MissingLibrary("flatpickr"));
    }
    let options = serde_wasm_bindgen::to_value(config).map_err(|e| PageError::Js(e.to_string()))?;
    flatpickr(selector, &options)?;
    Ok(())
}
