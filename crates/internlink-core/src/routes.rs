//! Backend paths and the URLs built from
//! them.

pub const DASHBOARD_STATS_PATH: &str =
  "/api/dashboard-stats";
pub const EXPORT_PATH: &str =
  "/applications/export";
pub const CREATE_INTERNSHIP_PATH: &str =
  "/internships/create";
pub const SHARE_BASE_URL: &str =
  "https://wa.me/";

pub fn status_update_path(
  application_id: &str
) -> String {
  format!(
    "/applications/{}/update_status",
    urlencoding::encode(application_id)
  )
}

/// Whether the dashboard poller should run
/// on this page.
pub fn is_dashboard_path(
  path: &str
) -> bool {
  matches!(path, "/" | "/dashboard")
}

/// Builds the export download URL. Filters
/// keep the caller's order and `format`
/// always comes last.
pub fn export_url<I, K, V>(
  format: &str,
  filters: I
) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: AsRef<str>
{
  let mut pairs: Vec<String> = filters
    .into_iter()
    .map(|(key, value)| {
      format!(
        "{}={}",
        urlencoding::encode(key.as_ref()),
        urlencoding::encode(
          value.as_ref()
        )
      )
    })
    .collect();
  pairs.push(format!(
    "format={}",
    urlencoding::encode(format)
  ));

  format!(
    "{EXPORT_PATH}?{}",
    pairs.join("&")
  )
}

/// Deep link into the messaging service
/// with a pre-filled message.
///
/// The recipient is reduced to its digits;
/// `wa.me` rejects `+`, spaces and dashes.
pub fn share_link(
  message: &str,
  phone_number: Option<&str>
) -> String {
  let phone: String = phone_number
    .unwrap_or_default()
    .chars()
    .filter(char::is_ascii_digit)
    .collect();

  format!(
    "{SHARE_BASE_URL}{phone}?text={}",
    urlencoding::encode(message)
  )
}
