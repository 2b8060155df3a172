use gloo::events::{
  EventListener,
  EventListenerOptions
};
use internlink_core::shortcuts::{
  Shortcut,
  ShortcutAction
};
use wasm_bindgen::JsCast;
use web_sys::{
  HtmlElement,
  KeyboardEvent
};

use super::Bindings;
use crate::dom;
use crate::page::Page;

pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  let window = page.window.clone();
  let document = page.document.clone();

  bindings.listen(
    EventListener::new_with_options(
      &page.document,
      "keydown",
      EventListenerOptions::enable_prevent_default(),
      move |event| {
        let Some(key_event) =
          event.dyn_ref::<KeyboardEvent>()
        else {
          return;
        };
        let Some(shortcut) =
          Shortcut::from_key(
            key_event.ctrl_key(),
            &key_event.key()
          )
        else {
          return;
        };

        event.prevent_default();
        tracing::debug!(?shortcut, "keyboard shortcut");

        match shortcut.action() {
          | ShortcutAction::Navigate(path) => {
            if let Err(error) =
              window.location().set_href(path)
            {
              tracing::warn!(?error, path, "shortcut navigation failed");
            }
          }
          | ShortcutAction::Focus(selector) => {
            if let Some(field) =
              dom::select_one(&document, selector)
                .and_then(|element| {
                  element
                    .dyn_into::<HtmlElement>()
                    .ok()
                })
            {
              let _ = field.focus();
            }
          }
        }
      }
    )
  );
}
