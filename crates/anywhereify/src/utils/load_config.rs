use std::path::Path;

use anyhow::{bail, Context};
use anywhereify_common::AnywhereConfig;
use anywhereify_fs::FileSystem;

pub const CONFIG_FILE_NAME: &str = "anywhere.config.json";

pub struct LoadConfigReturn {
  pub config: AnywhereConfig,
  /// Raw text, hashed to detect unchanged builds.
  pub source: String,
}

pub fn load_config(fs: &dyn FileSystem, path: &Path) -> anyhow::Result<LoadConfigReturn> {
  if !fs.exists(path) {
    bail!("It looks like you have forgotten to define your {}.", path.display());
  }
  let source = fs.read_to_string(path)?;
  let value: serde_json::Value =
    serde_json::from_str(&source).with_context(|| format!("Failed to parse {}", path.display()))?;
  if !value.is_object() {
    bail!("Expected a config Object, encountered {value}.");
  }
  let config = serde_json::from_value(value)
    .with_context(|| format!("Invalid configuration in {}", path.display()))?;
  Ok(LoadConfigReturn { config, source })
}
