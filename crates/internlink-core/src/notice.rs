use std::fmt;

use crate::error::RequestFailure;

pub const STATUS_UPDATED_MESSAGE: &str =
  "Status updated successfully";
pub const STATUS_FAILED_MESSAGE: &str =
  "Error updating status";

/// Style keyword interpolated into the
/// banner's `alert-*` class.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub enum Severity {
  Success,
  Danger,
  Warning,
  #[default]
  Info,
  Other(String)
}

impl Severity {
  /// Unknown keywords pass through as
  /// given; the caller owns their safety.
  pub fn parse(token: &str) -> Self {
    match token.trim() {
      | "success" => Self::Success,
      | "danger" => Self::Danger,
      | "warning" => Self::Warning,
      | "" | "info" => Self::Info,
      | other => {
        Self::Other(other.to_string())
      }
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      | Self::Success => "success",
      | Self::Danger => "danger",
      | Self::Warning => "warning",
      | Self::Info => "info",
      | Self::Other(token) => token
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Notice {
  pub message:  String,
  pub severity: Severity
}

impl Notice {
  pub fn new(
    message: impl Into<String>,
    severity: Severity
  ) -> Self {
    Self {
      message: message.into(),
      severity
    }
  }

  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self::new(message, Severity::Success)
  }

  pub fn danger(
    message: impl Into<String>
  ) -> Self {
    Self::new(message, Severity::Danger)
  }

  pub fn class_name(&self) -> String {
    format!(
      "alert alert-{} alert-dismissible \
       fade show",
      self.severity
    )
  }
}

/// Toast shown after a status update
/// settles.
pub fn status_update_notice(
  outcome: &Result<(), RequestFailure>
) -> Notice {
  match outcome {
    | Ok(()) => {
      Notice::success(
        STATUS_UPDATED_MESSAGE
      )
    }
    | Err(_) => {
      Notice::danger(STATUS_FAILED_MESSAGE)
    }
  }
}
