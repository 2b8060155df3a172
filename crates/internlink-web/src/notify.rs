use internlink_core::Notice;
use internlink_core::widgets::{
  WidgetToolkit,
  close_alerts_after
};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::page::Page;
use crate::scheduler::TimeoutScheduler;

const CONTAINER_SELECTOR: &str = ".container";

/// Prepends a dismissible banner to the main
/// container and closes it after the
/// configured lifetime.
pub fn show_notification<T>(
  page: &Page<T>,
  notice: &Notice
) where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  let Some(container) = dom::select_one(
    &page.document,
    CONTAINER_SELECTOR
  ) else {
    log_dropped(notice);
    return;
  };

  let banner = match build_banner(
    page, notice
  ) {
    | Ok(banner) => banner,
    | Err(error) => {
      tracing::warn!(?error, "failed building notification");
      return;
    }
  };

  if let Err(error) = container
    .insert_before(
      &banner,
      container.first_child().as_ref()
    )
  {
    tracing::warn!(?error, "failed inserting notification");
    return;
  }

  log_shown(notice);

  close_alerts_after(
    &TimeoutScheduler,
    page.toolkit.clone(),
    page.config.alert_dismiss(),
    move || vec![banner]
  )
  .forget();
}

fn log_shown(notice: &Notice) {
  tracing::debug!(
    severity = %notice.severity,
    text = %notice.message,
    "showing notification"
  );
}

fn log_dropped(notice: &Notice) {
  tracing::warn!(
    text = %notice.message,
    "no .container for notification; \
     dropping it"
  );
}

fn build_banner<T>(
  page: &Page<T>,
  notice: &Notice
) -> Result<Element, JsValue> {
  let banner =
    page.document.create_element("div")?;
  banner.set_class_name(&notice.class_name());
  banner.set_attribute("role", "alert")?;
  banner.append_with_str_1(&notice.message)?;

  let close =
    page.document.create_element("button")?;
  close.set_attribute("type", "button")?;
  close.set_class_name("btn-close");
  close.set_attribute(
    "data-bs-dismiss",
    "alert"
  )?;
  close.set_attribute("aria-label", "Close")?;
  banner.append_child(&close)?;

  Ok(banner)
}
