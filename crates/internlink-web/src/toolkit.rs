#![allow(unsafe_code)]

use internlink_core::widgets::WidgetToolkit;
use js_sys::{
  Object,
  Reflect
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = bootstrap)]
  type Tooltip;

  #[wasm_bindgen(
    constructor,
    js_namespace = bootstrap,
    catch
  )]
  fn new(
    element: &Element
  ) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = bootstrap)]
  type Popover;

  #[wasm_bindgen(
    constructor,
    js_namespace = bootstrap,
    catch
  )]
  fn new(
    element: &Element
  ) -> Result<Popover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = bootstrap)]
  type Alert;

  #[wasm_bindgen(
    constructor,
    js_namespace = bootstrap,
    catch
  )]
  fn new(
    element: &Element
  ) -> Result<Alert, JsValue>;

  #[wasm_bindgen(method)]
  fn close(this: &Alert);
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = bootstrap)]
  type Collapse;

  #[wasm_bindgen(
    static_method_of = Collapse,
    js_namespace = bootstrap,
    js_name = getOrCreateInstance,
    catch
  )]
  fn get_or_create_instance(
    element: &Element,
    options: &JsValue
  ) -> Result<Collapse, JsValue>;

  #[wasm_bindgen(method)]
  fn toggle(this: &Collapse);
}

/// Bootstrap 5 from the page's global
/// `bootstrap` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapToolkit;

impl WidgetToolkit for BootstrapToolkit {
  type Element = Element;

  fn tooltip(&self, element: &Element) {
    if let Err(error) = Tooltip::new(element)
    {
      tracing::warn!(?error, "bootstrap tooltip init failed");
    }
  }

  fn popover(&self, element: &Element) {
    if let Err(error) = Popover::new(element)
    {
      tracing::warn!(?error, "bootstrap popover init failed");
    }
  }

  fn close_alert(&self, element: &Element) {
    match Alert::new(element) {
      | Ok(alert) => alert.close(),
      | Err(error) => {
        tracing::warn!(?error, "bootstrap alert init failed; removing element");
        element.remove();
      }
    }
  }

  fn is_shown(&self, element: &Element) -> bool {
    element.is_connected()
  }

  fn toggle_collapse(
    &self,
    element: &Element
  ) {
    // Without `toggle: false` creating the
    // instance already toggles once.
    let options = Object::new();
    let _ = Reflect::set(
      &options,
      &JsValue::from_str("toggle"),
      &JsValue::FALSE
    );

    match Collapse::get_or_create_instance(
      element, &options
    ) {
      | Ok(collapse) => collapse.toggle(),
      | Err(error) => {
        tracing::warn!(?error, "bootstrap collapse init failed");
      }
    }
  }
}
