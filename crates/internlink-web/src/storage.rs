use anyhow::anyhow;
use internlink_core::{
  DraftStore,
  MemoryStore
};
use web_sys::{
  Storage,
  Window
};

/// `localStorage` when the page may use it,
/// otherwise an in-memory map that lasts as
/// long as the page.
#[derive(Debug, Clone)]
pub enum BrowserStore {
  Local(Storage),
  Memory(MemoryStore)
}

impl BrowserStore {
  pub fn detect(window: &Window) -> Self {
    match window.local_storage() {
      | Ok(Some(storage)) => {
        Self::Local(storage)
      }
      | Ok(None) => {
        tracing::warn!(
          "local storage unavailable; \
           drafts last for this page only"
        );
        Self::Memory(MemoryStore::new())
      }
      | Err(error) => {
        tracing::warn!(?error, "local storage blocked; drafts last for this page only");
        Self::Memory(MemoryStore::new())
      }
    }
  }
}

impl DraftStore for BrowserStore {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    match self {
      | Self::Local(storage) => {
        storage.get_item(key).ok().flatten()
      }
      | Self::Memory(memory) => {
        memory.get(key)
      }
    }
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match self {
      | Self::Local(storage) => storage
        .set_item(key, value)
        .map_err(|error| {
          anyhow!(
            "localStorage.setItem({key}) \
             failed: {error:?}"
          )
        }),
      | Self::Memory(memory) => {
        memory.set(key, value)
      }
    }
  }

  fn remove(&self, key: &str) {
    match self {
      | Self::Local(storage) => {
        if let Err(error) =
          storage.remove_item(key)
        {
          tracing::warn!(key, ?error, "localStorage.removeItem failed");
        }
      }
      | Self::Memory(memory) => {
        memory.remove(key)
      }
    }
  }
}
