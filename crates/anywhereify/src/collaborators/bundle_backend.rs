use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use async_trait::async_trait;
use tokio::process::Command;

#[async_trait]
pub trait BundleBackend: Send + Sync {
  /// Bundles `entries`, leaving every name in `externals` to be resolved at runtime.
  async fn bundle(
    &self,
    entries: &[PathBuf],
    externals: &[String],
    cwd: &Path,
  ) -> anyhow::Result<String>;
}

/// Shells out to `browserify` through `npx`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserifyBackend;

#[async_trait]
impl BundleBackend for BrowserifyBackend {
  async fn bundle(
    &self,
    entries: &[PathBuf],
    externals: &[String],
    cwd: &Path,
  ) -> anyhow::Result<String> {
    let mut command = Command::new(if cfg!(windows) { "npx.cmd" } else { "npx" });
    command.current_dir(cwd).kill_on_drop(true).args(["--yes", "browserify"]).args(entries);
    for external in externals {
      command.arg("-x").arg(external);
    }

    let output = command.output().await.context("Failed to spawn browserify")?;
    if !output.status.success() {
      bail!("browserify failed: {}", String::from_utf8_lossy(&output.stderr).trim());
    }
    String::from_utf8(output.stdout).context("browserify produced a non-UTF-8 bundle")
  }
}
