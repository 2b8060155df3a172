use std::time::Duration;

use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

/// Timer lengths and limits used by the
/// page controller.
///
/// Every field has a default, so an empty
/// TOML document is a valid config.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct BehaviorConfig {
  pub debounce_ms:       u32,
  pub alert_dismiss_ms:  u32,
  pub copy_feedback_ms:  u32,
  pub submit_lock_ms:    u32,
  pub dashboard_poll_ms: u32,
  pub max_upload_mb:     f64
}

impl Default for BehaviorConfig {
  fn default() -> Self {
    Self {
      debounce_ms:       300,
      alert_dismiss_ms:  5_000,
      copy_feedback_ms:  2_000,
      submit_lock_ms:    3_000,
      dashboard_poll_ms: 30_000,
      max_upload_mb:     16.0
    }
  }
}

impl BehaviorConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<Self>(text)
        .context(
          "failed to parse behavior \
           config"
        )?;
    config.sanitize();
    debug!(?config, "loaded behavior config");
    Ok(config)
  }

  /// Replaces values that would disable a
  /// behavior outright.
  pub fn sanitize(&mut self) {
    let defaults = Self::default();

    if self.dashboard_poll_ms == 0 {
      warn!(
        "dashboard_poll_ms of 0 would \
         spin; using default"
      );
      self.dashboard_poll_ms =
        defaults.dashboard_poll_ms;
    }

    if !self.max_upload_mb.is_finite()
      || self.max_upload_mb <= 0.0
    {
      warn!(
        max_upload_mb = self.max_upload_mb,
        "invalid upload ceiling; using \
         default"
      );
      self.max_upload_mb =
        defaults.max_upload_mb;
    }
  }

  pub fn debounce(&self) -> Duration {
    millis(self.debounce_ms)
  }

  pub fn alert_dismiss(&self) -> Duration {
    millis(self.alert_dismiss_ms)
  }

  pub fn copy_feedback(&self) -> Duration {
    millis(self.copy_feedback_ms)
  }

  pub fn submit_lock(&self) -> Duration {
    millis(self.submit_lock_ms)
  }

  pub fn dashboard_poll(
    &self
  ) -> Duration {
    millis(self.dashboard_poll_ms)
  }
}

fn millis(value: u32) -> Duration {
  Duration::from_millis(u64::from(value))
}
