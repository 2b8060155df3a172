use gloo::timers::callback::Interval;
use internlink_core::routes::is_dashboard_path;
use web_sys::Document;

use super::Bindings;
use crate::api;
use crate::page::Page;
use crate::scheduler::millis;

/// Polls the stats endpoint while on the
/// dashboard. A slow fetch is never aborted;
/// failures leave the old numbers in place.
pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  let path = match page
    .window
    .location()
    .pathname()
  {
    | Ok(path) => path,
    | Err(error) => {
      tracing::warn!(?error, "could not read location path");
      return;
    }
  };
  if !is_dashboard_path(&path) {
    return;
  }

  let period = page.config.dashboard_poll();
  tracing::info!(
    path = %path,
    period_ms = millis(period),
    "starting dashboard poller"
  );

  let document = page.document.clone();
  bindings.every(Interval::new(
    millis(period),
    move || {
      let document = document.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::fetch_dashboard_stats()
            .await
          {
            | Ok(stats) => {
              apply_stats(&document, &stats)
            }
            | Err(err) => tracing::error!(error = %err, "error refreshing stats")
          }
        }
      );
    }
  ));
}

fn apply_stats(
  document: &Document,
  stats: &internlink_core::DashboardStats
) {
  for (id, value) in stats.counters() {
    if let Some(counter) =
      document.get_element_by_id(id)
    {
      counter.set_text_content(Some(
        &value.to_string()
      ));
    }
  }
  tracing::debug!(?stats, "refreshed dashboard stats");
}
