use std::rc::Rc;

use gloo::events::EventListener;
use internlink_core::{
  DraftKey,
  Drafts
};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use super::Bindings;
use crate::dom;
use crate::page::Page;
use crate::storage::BrowserStore;

const CREATE_FORM_ID: &str =
  "create-internship-form";
const EDIT_FORM_ID: &str =
  "edit-internship-form";
const INTERNSHIP_ID_ATTR: &str =
  "data-internship-id";

pub(super) fn bind<T>(
  page: &Page<T>,
  store: BrowserStore,
  bindings: &mut Bindings
) {
  let drafts = Rc::new(Drafts::new(store));

  if let Some(form) =
    form_by_id(page, CREATE_FORM_ID)
  {
    auto_save(
      form,
      DraftKey::create_form(),
      drafts.clone(),
      bindings
    );
  }

  if let Some(form) =
    form_by_id(page, EDIT_FORM_ID)
  {
    let key = form
      .get_attribute(INTERNSHIP_ID_ATTR)
      .as_deref()
      .and_then(DraftKey::edit_form);
    match key {
      | Some(key) => {
        auto_save(form, key, drafts, bindings)
      }
      | None => tracing::warn!(
        "edit form has no internship id; \
         auto-save disabled"
      )
    }
  }
}

fn form_by_id<T>(
  page: &Page<T>,
  id: &str
) -> Option<HtmlFormElement> {
  page
    .document
    .get_element_by_id(id)
    .and_then(|element| {
      element
        .dyn_into::<HtmlFormElement>()
        .ok()
    })
}

fn auto_save(
  form: HtmlFormElement,
  key: DraftKey,
  drafts: Rc<Drafts<BrowserStore>>,
  bindings: &mut Bindings
) {
  if let Some(draft) = drafts.load(&key) {
    let mut restored = 0_usize;
    for field in dom::select_all_within(
      &form,
      dom::FORM_FIELD_SELECTOR
    ) {
      let Some((name, _)) =
        dom::field_entry(&field)
      else {
        continue;
      };
      if let Some(value) =
        draft.restorable_value(&name)
      {
        dom::set_field_value(&field, value);
        restored += 1;
      }
    }
    tracing::info!(key = %key, restored, "restored form draft");
  }

  {
    let form = form.clone();
    let key = key.clone();
    let drafts = drafts.clone();
    let target = form.clone();
    bindings.listen(EventListener::new(
      &target,
      "input",
      move |_| {
        drafts.save(
          &key,
          &dom::collect_draft(&form)
        );
      }
    ));
  }

  // Invalid forms never reach the server, so
  // their draft is kept.
  let target = form.clone();
  bindings.listen(EventListener::new(
    &target,
    "submit",
    move |_| {
      if form.check_validity() {
        drafts.discard(&key);
      }
    }
  ));
}
