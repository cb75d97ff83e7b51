pub mod anywhere_config;
pub mod normalized_options;

use std::path::PathBuf;

/// Options supplied by the caller, usually the CLI. Anything left `None`
/// falls back to `anywhere.config.json` and then to the built-in defaults.
#[derive(Default, Debug, Clone)]
pub struct AnywhereifyOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub config: Option<PathBuf>,
  pub root: Option<PathBuf>,
  pub polyfills: Option<Vec<String>>,
  pub temp_dir: Option<PathBuf>,

  // --- Output
  pub out: Option<String>,

  // --- Enhance
  pub minify: Option<bool>,
  pub force: Option<bool>,
  pub keep_temp: Option<bool>,
}
