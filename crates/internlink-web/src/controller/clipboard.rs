use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlDocument,
  HtmlInputElement,
  HtmlTextAreaElement
};

use super::Bindings;
use crate::dom;
use crate::page::Page;
use crate::scheduler::run_after;

const COPIED_HTML: &str =
  "<i class=\"fas fa-check\"></i> Copied!";

pub(super) fn bind<T>(
  page: &Page<T>,
  bindings: &mut Bindings
) {
  let feedback = page.config.copy_feedback();

  for button in
    dom::select_all(&page.document, ".copy-btn")
  {
    let document = page.document.clone();
    let target = button.clone();

    bindings.listen(EventListener::new(
      &target,
      "click",
      move |_| {
        let Some(source) = button
          .get_attribute("data-target")
          .and_then(|id| {
            document.get_element_by_id(&id)
          })
        else {
          return;
        };
        if !select_text(&source) {
          return;
        }

        copy_selection(&document);

        let original = button.inner_html();
        button.set_inner_html(COPIED_HTML);
        swap_class(&button, "btn-primary", "btn-success");

        let button = button.clone();
        run_after(feedback, move || {
          button.set_inner_html(&original);
          swap_class(
            &button,
            "btn-success",
            "btn-primary"
          );
        });
      }
    ));
  }
}

fn select_text(source: &Element) -> bool {
  if let Some(input) =
    source.dyn_ref::<HtmlInputElement>()
  {
    input.select();
    true
  } else if let Some(area) =
    source.dyn_ref::<HtmlTextAreaElement>()
  {
    area.select();
    true
  } else {
    false
  }
}

fn copy_selection(document: &Document) {
  let Some(html) =
    document.dyn_ref::<HtmlDocument>()
  else {
    return;
  };
  match html.exec_command("copy") {
    | Ok(true) => {}
    | Ok(false) => {
      tracing::warn!(
        "copy command was not enabled"
      )
    }
    | Err(error) => {
      tracing::warn!(?error, "copy command failed")
    }
  }
}

fn swap_class(
  element: &Element,
  remove: &str,
  add: &str
) {
  let classes = element.class_list();
  let _ = classes.remove_1(remove);
  let _ = classes.add_1(add);
}
