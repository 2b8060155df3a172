//! Helpers templates call from inline
//! handlers, e.g.
//! `onclick="exportData('csv', {status: 'pending'})"`.

#![allow(unsafe_code)]

use std::cell::RefCell;
use std::cmp::Ordering;

use internlink_core::routes::{
  export_url,
  share_link
};
use internlink_core::table::{
  SortDirection,
  sort_rows_by
};
use internlink_core::upload::FileSizeLimit;
use internlink_core::widgets::WidgetToolkit;
use internlink_core::{
  BehaviorConfig,
  Notice,
  Severity
};
use js_sys::{
  Array,
  JsString,
  Object
};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
  Element,
  HtmlInputElement,
  HtmlTableElement
};

use crate::controller::enforce_file_size;
use crate::dom;
use crate::notify;
use crate::page::Page;
use crate::toolkit::BootstrapToolkit;

thread_local! {
  static PAGE: RefCell<Option<Page<BootstrapToolkit>>> =
    const { RefCell::new(None) };
}

pub fn install(page: Page<BootstrapToolkit>) {
  PAGE.with(|slot| {
    *slot.borrow_mut() = Some(page);
  });
}

/// The page `main` bound, or a default one
/// when a helper runs before start-up.
fn with_page<R>(
  f: impl FnOnce(&Page<BootstrapToolkit>) -> R
) -> Option<R> {
  let page = PAGE
    .with(|slot| slot.borrow().clone())
    .or_else(|| {
      Page::current(
        BootstrapToolkit,
        BehaviorConfig::default()
      )
    })?;
  Some(f(&page))
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(
  message: &str,
  kind: Option<String>
) {
  let severity = kind
    .as_deref()
    .map(Severity::parse)
    .unwrap_or_default();
  with_page(|page| {
    notify::show_notification(
      page,
      &Notice::new(message, severity)
    )
  });
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FilterValue {
  Text(String),
  Number(f64),
  Flag(bool)
}

impl FilterValue {
  fn into_query_value(self) -> String {
    match self {
      | Self::Text(text) => text,
      | Self::Number(number) => {
        number.to_string()
      }
      | Self::Flag(flag) => flag.to_string()
    }
  }
}

/// Filter pairs in the caller's order with
/// null values left out.
fn query_pairs<I>(
  entries: I
) -> Vec<(String, String)>
where
  I: IntoIterator<
    Item = (String, Option<FilterValue>)
  >
{
  entries
    .into_iter()
    .filter_map(|(key, value)| {
      value.map(|value| {
        (key, value.into_query_value())
      })
    })
    .collect()
}

/// Own enumerable properties of `filters`
/// in insertion order.
fn filter_entries(
  filters: &JsValue
) -> Result<
  Vec<(String, Option<FilterValue>)>,
  JsValue
> {
  let Some(object) =
    filters.dyn_ref::<Object>()
  else {
    return Ok(Vec::new());
  };

  Object::entries(object)
    .iter()
    .map(|entry| {
      let pair = Array::from(&entry);
      let key = pair
        .get(0)
        .as_string()
        .unwrap_or_default();
      let value: Option<FilterValue> =
        serde_wasm_bindgen::from_value(
          pair.get(1)
        )?;
      Ok((key, value))
    })
    .collect()
}

/// Navigates to the export download.
#[wasm_bindgen(js_name = exportData)]
pub fn export_data(
  format: &str,
  filters: JsValue
) -> Result<(), JsValue> {
  let url = export_url(
    format,
    query_pairs(filter_entries(&filters)?)
  );
  tracing::info!(url = %url, "starting export");

  with_page(|page| {
    page.window.location().set_href(&url)
  })
  .unwrap_or(Ok(()))
}

#[wasm_bindgen(js_name = shareOnWhatsApp)]
pub fn share_on_whatsapp(
  message: &str,
  phone_number: Option<String>
) -> Result<(), JsValue> {
  let url = share_link(
    message,
    phone_number.as_deref()
  );
  with_page(|page| {
    page
      .window
      .open_with_url_and_target(
        &url, "_blank"
      )
      .map(|_| ())
  })
  .unwrap_or(Ok(()))
}

/// Reorders the first body of `table` by the
/// trimmed text of cell `column`.
#[wasm_bindgen(js_name = sortTable)]
pub fn sort_table(
  table: &HtmlTableElement,
  column: u32,
  direction: Option<String>
) -> Result<(), JsValue> {
  let Some(body) = table.t_bodies().item(0)
  else {
    return Ok(());
  };

  let mut rows: Vec<Element> =
    dom::select_all_within(
      &body,
      ":scope > tr"
    );
  let direction = direction
    .as_deref()
    .map(SortDirection::parse)
    .unwrap_or_default();

  sort_rows_by(
    &mut rows,
    direction,
    |row| {
      row
        .children()
        .item(column)
        .and_then(|cell| cell.text_content())
        .unwrap_or_default()
    },
    locale_compare
  );

  for row in &rows {
    body.append_child(row)?;
  }
  Ok(())
}

fn locale_compare(
  a: &str,
  b: &str
) -> Ordering {
  JsString::from(a)
    .locale_compare(
      b,
      &Array::new(),
      &Object::new()
    )
    .cmp(&0)
}

#[wasm_bindgen(js_name = validateFileSize)]
pub fn validate_file_size(
  input: &HtmlInputElement,
  max_size_mb: Option<f64>
) -> bool {
  let limit = max_size_mb
    .map(FileSizeLimit::new)
    .or_else(|| {
      with_page(|page| {
        FileSizeLimit::new(
          page.config.max_upload_mb
        )
      })
    })
    .unwrap_or_default();

  with_page(|page| {
    enforce_file_size(page, input, limit)
  })
  .unwrap_or(true)
}

#[wasm_bindgen(js_name = printPage)]
pub fn print_page() -> Result<(), JsValue> {
  with_page(|page| page.window.print())
    .unwrap_or(Ok(()))
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
  with_page(|page| {
    if let Some(navbar) = dom::select_one(
      &page.document,
      ".navbar-collapse"
    ) {
      page.toolkit.toggle_collapse(&navbar);
    }
  });
}
