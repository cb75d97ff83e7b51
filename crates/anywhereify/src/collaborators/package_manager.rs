use std::path::Path;

use anyhow::{bail, Context};
use async_trait::async_trait;
use tokio::process::Command;

/// Installs packages and reports what a project depends on.
#[async_trait]
pub trait PackageManager: Send + Sync {
  /// Installs `packages` into the project at `cwd`, recording them in its
  /// `package.json` and `package-lock.json`.
  async fn install(&self, packages: &[String], cwd: &Path) -> anyhow::Result<()>;

  /// Names of the top-level dependencies installed in the project at `cwd`.
  async fn list(&self, cwd: &Path) -> anyhow::Result<Vec<String>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NpmPackageManager;

impl NpmPackageManager {
  fn command(cwd: &Path) -> Command {
    let mut command = Command::new(if cfg!(windows) { "npm.cmd" } else { "npm" });
    command.current_dir(cwd).kill_on_drop(true);
    command
  }
}

#[async_trait]
impl PackageManager for NpmPackageManager {
  async fn install(&self, packages: &[String], cwd: &Path) -> anyhow::Result<()> {
    if packages.is_empty() {
      return Ok(());
    }
    log::debug!("npm install {} (in {})", packages.join(" "), cwd.display());

    let output = Self::command(cwd)
      .args(["install", "--save", "--no-audit", "--no-fund"])
      .args(packages)
      .output()
      .await
      .context("Failed to spawn npm")?;

    if !output.status.success() {
      bail!(
        "`npm install` failed in {}: {}",
        cwd.display(),
        String::from_utf8_lossy(&output.stderr).trim()
      );
    }
    Ok(())
  }

  async fn list(&self, cwd: &Path) -> anyhow::Result<Vec<String>> {
    let output = Self::command(cwd)
      .args(["ls", "--json", "--depth=0"])
      .output()
      .await
      .context("Failed to spawn npm")?;

    // `npm ls` exits non-zero for extraneous or missing packages but still prints the tree.
    parse_npm_ls(&String::from_utf8_lossy(&output.stdout)).with_context(|| {
      format!("`npm ls` failed in {}: {}", cwd.display(), String::from_utf8_lossy(&output.stderr).trim())
    })
  }
}

fn parse_npm_ls(stdout: &str) -> anyhow::Result<Vec<String>> {
  let tree: serde_json::Value = serde_json::from_str(stdout)?;
  Ok(match tree.get("dependencies") {
    Some(serde_json::Value::Object(dependencies)) => dependencies.keys().cloned().collect(),
    _ => vec![],
  })
}
