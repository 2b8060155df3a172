use internlink_core::BehaviorConfig;
use web_sys::Document;

const BEHAVIOR_CONFIG_TOML: &str =
  include_str!("../assets/behavior.toml");

/// Pages may override the bundled config
/// with `<script type="application/toml"
/// id="internlink-config">`.
pub const CONFIG_SCRIPT_ID: &str =
  "internlink-config";

pub fn load_behavior_config(
  document: &Document
) -> BehaviorConfig {
  let page_override = document
    .get_element_by_id(CONFIG_SCRIPT_ID)
    .and_then(|script| script.text_content())
    .filter(|text| !text.trim().is_empty());

  let (source, text) = match &page_override
  {
    | Some(text) => ("page", text.as_str()),
    | None => {
      ("bundled", BEHAVIOR_CONFIG_TOML)
    }
  };

  match BehaviorConfig::from_toml_str(text) {
    | Ok(config) => {
      tracing::info!(
        source,
        debounce_ms = config.debounce_ms,
        dashboard_poll_ms =
          config.dashboard_poll_ms,
        "loaded behavior config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(source, error = %format!("{error:#}"), "failed parsing behavior config; using defaults");
      BehaviorConfig::default()
    }
  }
}
