use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Array, Function, Reflect};
use log::debug;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlInputElement;

use timepicker_core::{TimepickerOptions, WidgetLoader};

use crate::bindings::{import_module, TimepickerUI};
use crate::widget::{EventData, JsTimepicker};

/// Where to load the widget class from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Module specifier handed to `import()`.
    pub module: String,
    /// Name of the exported widget class.
    pub export: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            module: "timepicker-ui".to_string(),
            export: "TimepickerUI".to_string(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("Failed to import {module}: {message}")]
    Import { module: String, message: String },

    #[error("Module {module} has no exported class {export}")]
    MissingExport { module: String, export: String },

    #[error("Timepicker constructor failed: {0}")]
    Construct(String),

    #[error("Invalid timepicker options: {0}")]
    Options(String),
}

impl From<LoadError> for JsValue {
    fn from(err: LoadError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Loads timepicker-ui with a dynamic `import()` and constructs instances.
#[derive(Debug, Clone, Default)]
pub struct JsLoader {
    config: LoaderConfig,
}

impl JsLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

impl WidgetLoader for JsLoader {
    type Host = HtmlInputElement;
    type Module = Function;
    type Widget = JsTimepicker;
    type Error = LoadError;

    fn load(&self) -> LocalBoxFuture<'static, Result<Function, LoadError>> {
        let LoaderConfig { module, export } = self.config.clone();
        async move {
            debug!("Importing {}", module);
            let namespace = import_module(&module)
                .await
                .map_err(|err| LoadError::Import {
                    module: module.clone(),
                    message: describe_js_error(&err),
                })?;
            Reflect::get(&namespace, &JsValue::from_str(&export))
                .ok()
                .and_then(|class| class.dyn_into::<Function>().ok())
                .ok_or(LoadError::MissingExport { module, export })
        }
        .boxed_local()
    }

    fn construct(
        &self,
        class: &Function,
        host: &HtmlInputElement,
        options: Option<&TimepickerOptions<EventData>>,
    ) -> Result<JsTimepicker, LoadError> {
        let options = match options {
            Some(options) => options_to_js(options)?,
            None => JsValue::UNDEFINED,
        };
        let instance = Reflect::construct(class, &Array::of2(host, &options))
            .map_err(|err| LoadError::Construct(describe_js_error(&err)))?;
        Ok(JsTimepicker::new(instance.unchecked_into::<TimepickerUI>()))
    }
}

/// Serialize options into a plain JS object.
pub fn options_to_js<T: Serialize + ?Sized>(options: &T) -> Result<JsValue, LoadError> {
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| LoadError::Options(err.to_string()))
}

/// Best-effort message for a thrown JS value.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}

/// True outside a browser, where there is no DOM to bind to.
pub fn is_ssr() -> bool {
    web_sys::window().is_none()
}
