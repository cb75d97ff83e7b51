use anywhereify_utils::indexmap::FxIndexMap;
use serde::Deserialize;

/// The subset of `package.json` the build reads.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
  pub name: Option<String>,
  #[serde(default)]
  pub dependencies: FxIndexMap<String, String>,
}

impl PackageJson {
  pub fn parse(source: &str) -> serde_json::Result<Self> {
    serde_json::from_str(source)
  }
}
