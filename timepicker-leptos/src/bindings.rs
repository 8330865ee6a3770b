//! Raw `wasm-bindgen` declarations for the timepicker-ui JavaScript API.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function import_module(specifier) {
    return import(specifier);
}
"#)]
extern "C" {
    /// Dynamic `import()`. Bare specifiers are resolved by the page's import
    /// map or bundler.
    #[wasm_bindgen(catch)]
    pub async fn import_module(specifier: &str) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// An instance of the `TimepickerUI` class.
    #[derive(Debug, Clone)]
    pub type TimepickerUI;

    #[wasm_bindgen(method)]
    pub fn create(this: &TimepickerUI);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &TimepickerUI);

    #[wasm_bindgen(method)]
    pub fn open(this: &TimepickerUI);

    #[wasm_bindgen(method)]
    pub fn close(this: &TimepickerUI);

    #[wasm_bindgen(method, js_name = setValue)]
    pub fn set_value(this: &TimepickerUI, value: &str, trigger_update: bool);

    /// Either a time string or an object with a `time` field, depending on
    /// the widget version.
    #[wasm_bindgen(method, js_name = getValue)]
    pub fn get_value(this: &TimepickerUI) -> JsValue;

    /// Takes `{ options, create }`.
    #[wasm_bindgen(method)]
    pub fn update(this: &TimepickerUI, params: &JsValue);

    #[wasm_bindgen(method)]
    pub fn on(this: &TimepickerUI, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &TimepickerUI, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn once(this: &TimepickerUI, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = getWrapper)]
    pub fn get_wrapper(this: &TimepickerUI) -> Option<web_sys::HtmlElement>;
}
