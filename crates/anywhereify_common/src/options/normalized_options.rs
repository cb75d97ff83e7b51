use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
  // --- Input
  pub cwd: PathBuf,
  pub config_path: PathBuf,
  pub root: PathBuf,
  pub exports: serde_json::Value,
  pub polyfills: Vec<String>,
  pub temp_dir: PathBuf,

  // --- Output
  pub out_dir: PathBuf,

  // --- Enhance
  pub minify: bool,
  pub force: bool,
  pub keep_temp: bool,
}

impl NormalizedOptions {
  pub fn out_file(&self) -> PathBuf {
    self.out_dir.join("index.js")
  }

  pub fn hash_file(&self) -> PathBuf {
    self.out_dir.join(".anywhereify-hash")
  }

  pub fn package_json_path(&self) -> PathBuf {
    self.cwd.join("package.json")
  }
}
