use std::rc::Rc;

use gloo::events::EventListener;
use internlink_core::Debouncer;
use internlink_core::filter::{
  AUTO_FILTER_ATTR,
  AUTO_FILTER_SELECT_SELECTOR,
  FilterForm,
  LOADING_INDICATOR_CLASS,
  SEARCH_INPUT_SELECTOR,
  on_search_input,
  submit_filter
};
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  HtmlFormElement
};

use super::Bindings;
use crate::dom;
use crate::page::Page;
use crate::scheduler::TimeoutScheduler;

const FILTER_CONTAINER_SELECTOR: &str =
  ".card form";
const LOADING_INDICATOR_HTML: &str = concat!(
  "<div class=\"spinner-border spinner-border-sm text-primary\" ",
  "role=\"status\">",
  "<span class=\"visually-hidden\">Filtering...</span>",
  "</div>"
);

pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  for input in dom::select_all(
    &page.document,
    SEARCH_INPUT_SELECTOR
  ) {
    let debouncer = Rc::new(Debouncer::new(
      TimeoutScheduler,
      page.config.debounce()
    ));
    let document = page.document.clone();
    let target = input.clone();

    bindings.listen(EventListener::new(
      &target,
      "input",
      move |_| {
        on_search_input(
          &debouncer,
          FilterTarget {
            document: document.clone(),
            trigger:  input.clone()
          }
        );
      }
    ));
  }

  for select in dom::select_all(
    &page.document,
    AUTO_FILTER_SELECT_SELECTOR
  ) {
    let document = page.document.clone();
    let target = select.clone();

    bindings.listen(EventListener::new(
      &target,
      "change",
      move |_| {
        submit_filter(&FilterTarget {
          document: document.clone(),
          trigger:  select.clone()
        });
      }
    ));
  }
}

/// A filter control and the form around it.
struct FilterTarget {
  document: Document,
  trigger:  Element
}

impl FilterTarget {
  fn form(&self) -> Option<HtmlFormElement> {
    dom::closest(&self.trigger, "form")
  }

  /// The filter card's form, or the
  /// trigger's own form outside a card.
  fn indicator_container(
    &self
  ) -> Option<HtmlElement> {
    dom::closest::<HtmlElement>(
      &self.trigger,
      FILTER_CONTAINER_SELECTOR
    )
    .or_else(|| {
      self.form().map(|form| form.into())
    })
  }

  fn insert_indicator(
    &self,
    container: &HtmlElement
  ) -> Result<(), JsValue> {
    let spinner =
      self.document.create_element("div")?;
    spinner.set_class_name(&format!(
      "{LOADING_INDICATOR_CLASS} \
       position-absolute top-50 start-50 \
       translate-middle"
    ));
    spinner.set_inner_html(
      LOADING_INDICATOR_HTML
    );
    container
      .style()
      .set_property("position", "relative")?;
    container.append_child(&spinner)?;
    Ok(())
  }
}

impl FilterForm for FilterTarget {
  fn auto_filter_attr(&self) -> Option<String> {
    self.trigger.get_attribute(AUTO_FILTER_ATTR)
  }

  fn has_loading_indicator(&self) -> bool {
    self
      .indicator_container()
      .and_then(|container| {
        container
          .query_selector(&format!(
            ".{LOADING_INDICATOR_CLASS}"
          ))
          .ok()
          .flatten()
      })
      .is_some()
  }

  fn show_loading_indicator(&self) {
    let Some(container) =
      self.indicator_container()
    else {
      return;
    };
    if let Err(error) =
      self.insert_indicator(&container)
    {
      tracing::warn!(?error, "failed adding filter loading indicator");
    }
  }

  fn submit(&self) {
    let Some(form) = self.form() else {
      return;
    };
    tracing::debug!(
      form = %form.id(),
      "auto-filter submitting"
    );
    if let Err(error) = form.submit() {
      tracing::error!(?error, "auto-filter submit failed");
    }
  }
}
