mod api;
mod config;
mod controller;
mod dom;
mod exports;
mod notify;
mod page;
mod scheduler;
mod storage;
mod toolkit;

use gloo::events::EventListener;

use crate::page::Page;
use crate::toolkit::BootstrapToolkit;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting internlink page controller"
  );

  let document = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .expect("missing document");

  if still_parsing(&document.ready_state())
  {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| start()
    )
    .forget();
  } else {
    start();
  }
}

/// `document.readyState` is `"loading"` until
/// the parser reaches the end of the page.
fn still_parsing(ready_state: &str) -> bool {
  ready_state == "loading"
}

fn start() {
  let Some(page) = web_sys::window()
    .and_then(|window| window.document())
    .map(|document| {
      config::load_behavior_config(&document)
    })
    .and_then(|config| {
      Page::current(BootstrapToolkit, config)
    })
  else {
    tracing::error!(
      "page went away before start-up"
    );
    return;
  };

  exports::install(page.clone());
  controller::init(&page).persist();
}

#[cfg(test)]
mod tests {
  use super::still_parsing;

  #[test]
  fn waits_only_while_loading() {
    assert!(still_parsing("loading"));
    assert!(!still_parsing("interactive"));
    assert!(!still_parsing("complete"));
  }
}
