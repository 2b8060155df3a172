//! The page behavior controller.
//!
//! [`init`] scans the document once and
//! attaches every behavior. All listeners,
//! intervals and load-time timers it creates
//! are owned by the returned [`Bindings`].

mod clipboard;
mod dashboard;
mod drafts;
mod filters;
mod forms;
mod shortcuts;
mod status;
mod widgets;

use gloo::events::EventListener;
use gloo::timers::callback::{
  Interval,
  Timeout
};
use internlink_core::widgets::WidgetToolkit;
use web_sys::Element;

use crate::page::Page;
use crate::storage::BrowserStore;

pub use forms::enforce_file_size;

/// Disposer for everything [`init`] bound.
///
/// Dropping it removes the listeners and
/// clears the timers.
#[derive(Default)]
pub struct Bindings {
  listeners: Vec<EventListener>,
  intervals: Vec<Interval>,
  timeouts:  Vec<Timeout>
}

impl Bindings {
  pub fn listen(
    &mut self,
    listener: EventListener
  ) {
    self.listeners.push(listener);
  }

  pub fn every(
    &mut self,
    interval: Interval
  ) {
    self.intervals.push(interval);
  }

  pub fn once(&mut self, timeout: Timeout) {
    self.timeouts.push(timeout);
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }

  /// Keeps everything bound until the page
  /// unloads.
  pub fn persist(self) {
    for listener in self.listeners {
      listener.forget();
    }
    for interval in self.intervals {
      interval.forget();
    }
    for timeout in self.timeouts {
      timeout.forget();
    }
  }
}

#[tracing::instrument(skip_all)]
pub fn init<T>(page: &Page<T>) -> Bindings
where
  T: WidgetToolkit<Element = Element>
    + 'static
{
  let mut bindings = Bindings::default();

  widgets::bind(page, &mut bindings);
  forms::bind_validation(
    page,
    &mut bindings
  );
  forms::bind_file_inputs(
    page,
    &mut bindings
  );
  forms::bind_confirmations(
    page,
    &mut bindings
  );
  filters::bind(page, &mut bindings);
  clipboard::bind(page, &mut bindings);
  status::bind(page, &mut bindings);
  dashboard::bind(page, &mut bindings);
  forms::bind_submit_lock(
    page,
    &mut bindings
  );
  shortcuts::bind(page, &mut bindings);
  drafts::bind(
    page,
    BrowserStore::detect(&page.window),
    &mut bindings
  );

  tracing::info!(
    listeners = bindings.listener_count(),
    intervals = bindings.intervals.len(),
    "page behaviors bound"
  );
  bindings
}
