use internlink_core::widgets::{
  WidgetKind,
  WidgetToolkit,
  close_alerts_after
};
use web_sys::Element;

use super::Bindings;
use crate::dom;
use crate::page::Page;
use crate::scheduler::TimeoutScheduler;

const ALERT_SELECTOR: &str = ".alert";

pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  for kind in WidgetKind::ALL {
    let elements = dom::select_all(
      &page.document,
      &kind.selector()
    );
    for element in &elements {
      kind.activate(
        &*page.toolkit,
        element
      );
    }
    tracing::debug!(
      widget = kind.toggle_value(),
      count = elements.len(),
      "activated widgets"
    );
  }

  // Server-rendered flash alerts. Queried
  // when the timer fires, not now.
  let document = page.document.clone();
  bindings.once(close_alerts_after(
    &TimeoutScheduler,
    page.toolkit.clone(),
    page.config.alert_dismiss(),
    move || {
      dom::select_all(&document, ALERT_SELECTOR)
    }
  ));
}
