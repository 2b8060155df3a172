use internlink_core::FormDraft;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  NodeList
};

pub const FORM_FIELD_SELECTOR: &str =
  "input, textarea, select";

pub fn select_all(
  document: &Document,
  selector: &str
) -> Vec<Element> {
  match document
    .query_selector_all(selector)
  {
    | Ok(list) => collect_elements(&list),
    | Err(error) => {
      tracing::warn!(selector, ?error, "selector query failed");
      Vec::new()
    }
  }
}

pub fn select_all_within(
  root: &Element,
  selector: &str
) -> Vec<Element> {
  match root.query_selector_all(selector) {
    | Ok(list) => collect_elements(&list),
    | Err(error) => {
      tracing::warn!(selector, ?error, "selector query failed");
      Vec::new()
    }
  }
}

pub fn select_one(
  document: &Document,
  selector: &str
) -> Option<Element> {
  document
    .query_selector(selector)
    .ok()
    .flatten()
}

fn collect_elements(
  list: &NodeList
) -> Vec<Element> {
  (0..list.length())
    .filter_map(|index| list.item(index))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .collect()
}

/// The element itself when it already is a
/// `T`, else its closest `T` ancestor
/// matching `selector`.
pub fn closest<T: JsCast>(
  element: &Element,
  selector: &str
) -> Option<T> {
  element
    .closest(selector)
    .ok()
    .flatten()
    .and_then(|found| {
      found.dyn_into::<T>().ok()
    })
}

/// Name and value of a form control. File
/// inputs and unnamed controls are skipped.
pub fn field_entry(
  element: &Element
) -> Option<(String, String)> {
  let (name, value) = if let Some(input) =
    element.dyn_ref::<HtmlInputElement>()
  {
    if input.type_() == "file" {
      return None;
    }
    (input.name(), input.value())
  } else if let Some(area) =
    element.dyn_ref::<HtmlTextAreaElement>()
  {
    (area.name(), area.value())
  } else if let Some(select) =
    element.dyn_ref::<HtmlSelectElement>()
  {
    (select.name(), select.value())
  } else {
    return None;
  };

  if name.is_empty() {
    return None;
  }
  Some((name, value))
}

pub fn set_field_value(
  element: &Element,
  value: &str
) {
  if let Some(input) =
    element.dyn_ref::<HtmlInputElement>()
  {
    if input.type_() != "file" {
      input.set_value(value);
    }
  } else if let Some(area) =
    element.dyn_ref::<HtmlTextAreaElement>()
  {
    area.set_value(value);
  } else if let Some(select) =
    element.dyn_ref::<HtmlSelectElement>()
  {
    select.set_value(value);
  }
}

/// Snapshot of every named control under
/// `root`.
pub fn collect_draft(
  root: &Element
) -> FormDraft {
  FormDraft::from_fields(
    select_all_within(
      root,
      FORM_FIELD_SELECTOR
    )
    .iter()
    .filter_map(field_entry)
  )
}
