use gloo::events::EventListener;
use internlink_core::StatusChange;
use internlink_core::notice::status_update_notice;
use internlink_core::widgets::WidgetToolkit;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlSelectElement
};

use super::Bindings;
use crate::api;
use crate::dom;
use crate::notify::show_notification;
use crate::page::Page;

const STATUS_SELECT_SELECTOR: &str =
  ".status-select";
const APPLICATION_ID_ATTR: &str =
  "data-application-id";

/// Each change fires its own request; there
/// is no de-duplication or retry.
pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  for select in dom::select_all(
    &page.document,
    STATUS_SELECT_SELECTOR
  )
  .into_iter()
  .filter_map(|element| {
    element
      .dyn_into::<HtmlSelectElement>()
      .ok()
  }) {
    let page = page.clone();
    let target = select.clone();

    bindings.listen(EventListener::new(
      &target,
      "change",
      move |_| {
        let application_id = select
          .get_attribute(APPLICATION_ID_ATTR)
          .unwrap_or_default();
        let Some(change) = StatusChange::new(
          &application_id,
          &select.value()
        ) else {
          return;
        };

        let page = page.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(application = %change.application_id, status = %change.status, "updating application status");
            let outcome =
              api::send_status_change(&change)
                .await;
            if let Err(err) = &outcome {
              tracing::error!(error = %err, application = %change.application_id, "status update failed");
            }
            show_notification(
              &page,
              &status_update_notice(&outcome)
            );
          }
        );
      }
    ));
  }
}
