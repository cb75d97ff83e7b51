use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct BuildOutput {
  pub out_file: PathBuf,
  /// Packages left for the host to provide.
  pub externals: Vec<String>,
  /// Size in bytes of the emitted bundle.
  pub size: usize,
  /// The inputs matched the previous build, nothing was rebuilt.
  pub skipped: bool,
  pub elapsed: Duration,
}
