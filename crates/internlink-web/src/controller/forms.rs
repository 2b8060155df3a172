use gloo::events::{
  EventListener,
  EventListenerOptions
};
use internlink_core::submit::{
  SUBMIT_BUTTON_SELECTOR,
  SubmitButton,
  lock_submit
};
use internlink_core::upload::{
  FileSizeLimit,
  file_label
};
use internlink_core::widgets::WidgetToolkit;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlButtonElement,
  HtmlFormElement,
  HtmlInputElement
};

use super::Bindings;
use crate::dom;
use crate::notify::show_notification;
use crate::page::Page;
use crate::scheduler::TimeoutScheduler;

const VALIDATED_CLASS: &str = "was-validated";
const MAX_SIZE_ATTR: &str = "data-max-size-mb";
const CONFIRM_ATTR: &str = "data-confirm";

pub(super) fn bind_validation<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  for form in dom::select_all(
    &page.document,
    ".needs-validation"
  )
  .into_iter()
  .filter_map(|element| {
    element
      .dyn_into::<HtmlFormElement>()
      .ok()
  }) {
    let target = form.clone();
    bindings.listen(
      EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
          if !form.check_validity() {
            event.prevent_default();
            event.stop_propagation();
            tracing::debug!(
              form = %form.id(),
              "blocked invalid submit"
            );
          }
          if let Err(error) = form
            .class_list()
            .add_1(VALIDATED_CLASS)
          {
            tracing::warn!(?error, "failed marking form validated");
          }
        }
      )
    );
  }
}

pub(super) fn bind_file_inputs<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  for input in dom::select_all(
    &page.document,
    "input[type=\"file\"]"
  )
  .into_iter()
  .filter_map(|element| {
    element
      .dyn_into::<HtmlInputElement>()
      .ok()
  }) {
    let limit = input
      .get_attribute(MAX_SIZE_ATTR)
      .and_then(|raw| {
        raw.trim().parse::<f64>().ok()
      })
      .map(FileSizeLimit::new);

    let page = page.clone();
    let target = input.clone();
    bindings.listen(EventListener::new(
      &target,
      "change",
      move |_| {
        if let Some(limit) = limit {
          enforce_file_size(
            &page, &input, limit
          );
        }
        sync_file_label(&input);
      }
    ));
  }
}

fn sync_file_label(input: &HtmlInputElement) {
  let Some(label) =
    input.next_element_sibling()
  else {
    return;
  };
  if !label
    .class_list()
    .contains("form-label")
  {
    return;
  }

  let name = input
    .files()
    .and_then(|files| files.get(0))
    .map(|file| file.name());
  label.set_text_content(Some(file_label(
    name.as_deref()
  )));
}

/// Clears `input` and shows a danger notice
/// when its file is over `limit`. Returns
/// whether the input was kept.
pub fn enforce_file_size<T>(
  page: &Page<T>,
  input: &HtmlInputElement,
  limit: FileSizeLimit
) -> bool
where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  let Some(file) = input
    .files()
    .and_then(|files| files.get(0))
  else {
    return true;
  };

  match limit.check(file.size()) {
    | Ok(()) => true,
    | Err(notice) => {
      tracing::info!(
        file = %file.name(),
        size = file.size(),
        max_mb = limit.max_mb(),
        "rejected oversized upload"
      );
      show_notification(page, &notice);
      input.set_value("");
      false
    }
  }
}

pub(super) fn bind_confirmations<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  for element in dom::select_all(
    &page.document,
    "[data-confirm]"
  ) {
    let target = element.clone();
    bindings.listen(
      EventListener::new_with_options(
        &target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
          let message = element
            .get_attribute(CONFIRM_ATTR)
            .unwrap_or_default();
          if !gloo::dialogs::confirm(&message)
          {
            event.prevent_default();
          }
        }
      )
    );
  }
}

/// Every submitted form gets its submit
/// button locked for `submit_lock`. The
/// unlock does not wait for the response.
pub(super) fn bind_submit_lock<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  let delay = page.config.submit_lock();
  bindings.listen(EventListener::new(
    &page.document,
    "submit",
    move |event| {
      let Some(form) =
        event.target().and_then(|target| {
          target
            .dyn_into::<HtmlFormElement>()
            .ok()
        })
      else {
        return;
      };

      let Some(button) = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| {
          element
            .dyn_into::<HtmlButtonElement>()
            .ok()
        })
      else {
        return;
      };

      lock_submit(
        &TimeoutScheduler,
        LockedButton(button),
        delay
      )
      .forget();
    }
  ));
}

struct LockedButton(HtmlButtonElement);

impl SubmitButton for LockedButton {
  fn label_html(&self) -> String {
    self.0.inner_html()
  }

  fn set_label_html(&self, html: &str) {
    self.0.set_inner_html(html);
  }

  fn set_disabled(&self, disabled: bool) {
    self.0.set_disabled(disabled);
  }
}
