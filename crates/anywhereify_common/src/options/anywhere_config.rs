use serde::Deserialize;

pub const DEFAULT_OUT_DIR: &str = "dist";

/// The contents of `anywhere.config.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnywhereConfig {
  /// Left untyped on purpose: the export sanitizer owns its validation.
  #[serde(default)]
  pub exports: serde_json::Value,
  #[serde(default = "default_out")]
  pub out: String,
  #[serde(default)]
  pub minify: Option<bool>,
}

fn default_out() -> String {
  DEFAULT_OUT_DIR.to_string()
}

impl Default for AnywhereConfig {
  fn default() -> Self {
    Self { exports: serde_json::Value::Null, out: default_out(), minify: None }
  }
}
