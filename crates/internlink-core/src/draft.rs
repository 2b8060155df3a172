use std::cell::RefCell;
use std::collections::{
  BTreeMap,
  HashMap
};
use std::fmt;
use std::rc::Rc;

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  error
};

pub const CREATE_FORM_DRAFT_KEY: &str =
  "internship-form-draft";
const EDIT_FORM_DRAFT_PREFIX: &str =
  "internship-edit-";

/// Storage slot a form draft is written to.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub struct DraftKey(String);

impl DraftKey {
  pub fn create_form() -> Self {
    Self(
      CREATE_FORM_DRAFT_KEY.to_string()
    )
  }

  /// Edit drafts are namespaced by record so
  /// two open edit pages never share a slot.
  /// A blank id yields no key.
  pub fn edit_form(
    internship_id: &str
  ) -> Option<Self> {
    let id = internship_id.trim();
    if id.is_empty() {
      return None;
    }
    Some(Self(format!(
      "{EDIT_FORM_DRAFT_PREFIX}{id}"
    )))
  }

  pub fn custom(
    key: impl Into<String>
  ) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for DraftKey {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Field name to value, stored as a plain
/// JSON object.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct FormDraft {
  fields: BTreeMap<String, String>
}

impl FormDraft {
  /// Later duplicates of a name win, the
  /// same as assigning into an object in
  /// document order.
  pub fn from_fields<I, K, V>(
    fields: I
  ) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>
  {
    Self {
      fields: fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
    }
  }

  pub fn get(
    &self,
    name: &str
  ) -> Option<&str> {
    self
      .fields
      .get(name)
      .map(String::as_str)
  }

  /// Value to write back into a field on
  /// load. Empty saved values leave the
  /// rendered value alone.
  pub fn restorable_value(
    &self,
    name: &str
  ) -> Option<&str> {
    self
      .get(name)
      .filter(|value| !value.is_empty())
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = (&str, &str)>
  {
    self
      .fields
      .iter()
      .map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

/// Raw string storage behind drafts.
pub trait DraftStore {
  fn get(&self, key: &str)
  -> Option<String>;

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;

  fn remove(&self, key: &str);
}

/// Page-lifetime storage. Clones share the
/// same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries:
    Rc<RefCell<HashMap<String, String>>>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contains(
    &self,
    key: &str
  ) -> bool {
    self
      .entries
      .borrow()
      .contains_key(key)
  }
}

impl DraftStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.entries.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }

  fn remove(&self, key: &str) {
    self.entries.borrow_mut().remove(key);
  }
}

/// JSON drafts on top of a [`DraftStore`].
#[derive(Debug, Clone)]
pub struct Drafts<S> {
  store: S
}

impl<S: DraftStore> Drafts<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// A malformed entry is logged and read
  /// as no draft at all.
  pub fn load(
    &self,
    key: &DraftKey
  ) -> Option<FormDraft> {
    let raw = self.store.get(key.as_str())?;

    match serde_json::from_str::<FormDraft>(
      &raw
    ) {
      | Ok(draft) => {
        debug!(
          key = %key,
          fields = draft.len(),
          "loaded form draft"
        );
        Some(draft)
      }
      | Err(error) => {
        error!(
          key = %key,
          %error,
          "error loading saved form data"
        );
        None
      }
    }
  }

  pub fn save(
    &self,
    key: &DraftKey,
    draft: &FormDraft
  ) {
    let json =
      match serde_json::to_string(draft) {
        | Ok(json) => json,
        | Err(error) => {
          error!(key = %key, %error, "failed encoding form draft");
          return;
        }
      };

    if let Err(error) =
      self.store.set(key.as_str(), &json)
    {
      error!(key = %key, error = %format!("{error:#}"), "failed saving form draft");
    }
  }

  pub fn discard(&self, key: &DraftKey) {
    debug!(key = %key, "discarding form draft");
    self.store.remove(key.as_str());
  }
}
