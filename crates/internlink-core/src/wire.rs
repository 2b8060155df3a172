use serde::{
  Deserialize,
  Serialize
};

use crate::error::RequestFailure;
use crate::routes;

/// A status selection waiting to be sent.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct StatusChange {
  pub application_id: String,
  pub status:         String
}

impl StatusChange {
  /// Returns `None` unless both the id and
  /// the status carry text.
  pub fn new(
    application_id: &str,
    status: &str
  ) -> Option<Self> {
    let application_id =
      application_id.trim();
    if application_id.is_empty()
      || status.trim().is_empty()
    {
      return None;
    }

    Some(Self {
      application_id: application_id
        .to_string(),
      status:         status.to_string()
    })
  }

  pub fn endpoint(&self) -> String {
    routes::status_update_path(
      &self.application_id
    )
  }

  /// Body for an
  /// `application/x-www-form-urlencoded`
  /// POST.
  pub fn form_body(&self) -> String {
    format!(
      "status={}&send_notification=on",
      urlencoding::encode(&self.status)
    )
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct StatusUpdateResponse {
  #[serde(default)]
  pub success: bool
}

impl StatusUpdateResponse {
  pub fn into_outcome(
    self
  ) -> Result<(), RequestFailure> {
    if self.success {
      Ok(())
    } else {
      Err(RequestFailure::Rejected)
    }
  }
}

/// Interprets the raw body returned by the
/// status endpoint.
pub fn decode_status_response(
  body: &str
) -> Result<(), RequestFailure> {
  serde_json::from_str::<
    StatusUpdateResponse
  >(body)
  .map_err(|error| {
    RequestFailure::Decode(
      error.to_string()
    )
  })?
  .into_outcome()
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct DashboardStats {
  pub total_internships:    u64,
  pub total_applications:   u64,
  pub pending_applications: u64
}

impl DashboardStats {
  pub fn from_json(
    body: &str
  ) -> Result<Self, RequestFailure> {
    serde_json::from_str(body).map_err(
      |error| {
        RequestFailure::Decode(
          error.to_string()
        )
      }
    )
  }

  /// Counter element ids paired with the
  /// value each one shows.
  pub fn counters(
    &self
  ) -> [(&'static str, u64); 3] {
    [
      (
        "total-internships",
        self.total_internships
      ),
      (
        "total-applications",
        self.total_applications
      ),
      (
        "pending-applications",
        self.pending_applications
      )
    ]
  }
}
