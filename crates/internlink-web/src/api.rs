use gloo::net::http::Request;
use internlink_core::routes::DASHBOARD_STATS_PATH;
use internlink_core::wire::decode_status_response;
use internlink_core::{
  DashboardStats,
  RequestFailure,
  StatusChange
};

pub async fn send_status_change(
  change: &StatusChange
) -> Result<(), RequestFailure> {
  let response = Request::post(
    &change.endpoint()
  )
  .header(
    "Content-Type",
    "application/x-www-form-urlencoded"
  )
  .header("Accept", "application/json")
  .body(change.form_body())
  .map_err(|e| {
    RequestFailure::Network(format!(
      "failed to build request: {e}"
    ))
  })?
  .send()
  .await
  .map_err(|e| {
    RequestFailure::Network(e.to_string())
  })?;

  let body =
    response.text().await.map_err(|e| {
      RequestFailure::Decode(e.to_string())
    })?;
  decode_status_response(&body)
}

pub async fn fetch_dashboard_stats()
-> Result<DashboardStats, RequestFailure> {
  let response = Request::get(
    DASHBOARD_STATS_PATH
  )
  .header("Accept", "application/json")
  .send()
  .await
  .map_err(|e| {
    RequestFailure::Network(e.to_string())
  })?;

  let body =
    response.text().await.map_err(|e| {
      RequestFailure::Decode(e.to_string())
    })?;
  DashboardStats::from_json(&body)
}
