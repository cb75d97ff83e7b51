use std::path::Path;

use anyhow::Context;
use anywhereify_common::DependencySnapshot;
use anywhereify_error::BuildResult;
use anywhereify_externals::{resolve_externals, snapshot_from_lockfile};
use serde_json::json;

use crate::types::{
  temp_project::TempProject, SharedFileSystem, SharedOptions, SharedPackageManager,
};

/// Never installed into a snapshot project.
pub const TOOL_PACKAGE_NAME: &str = "anywhereify";

pub struct ExternalsStage<'a> {
  fs: &'a SharedFileSystem,
  package_manager: &'a SharedPackageManager,
  options: &'a SharedOptions,
}

impl<'a> ExternalsStage<'a> {
  pub fn new(
    fs: &'a SharedFileSystem,
    package_manager: &'a SharedPackageManager,
    options: &'a SharedOptions,
  ) -> Self {
    Self { fs, package_manager, options }
  }

  /// Packages the host (`super`) already provides in a version the bundle
  /// (`sub`) can use. Both dependency lists are installed fresh into their
  /// own directory so the two lockfiles are comparable.
  pub async fn gather_externals(
    &self,
    project: &TempProject,
    own_name: Option<&str>,
  ) -> BuildResult<Vec<String>> {
    let super_dependencies = self.package_manager.list(&self.options.root).await?;
    let sub_dependencies = self.package_manager.list(project.path()).await?;

    let excluded = |name: &String| name != TOOL_PACKAGE_NAME && Some(name.as_str()) != own_name;
    let super_dependencies = super_dependencies.into_iter().filter(excluded).collect::<Vec<_>>();
    let sub_dependencies = sub_dependencies.into_iter().filter(excluded).collect::<Vec<_>>();

    let super_snapshot = self.capture_snapshot(project.path(), "super", &super_dependencies).await?;
    let sub_snapshot = self.capture_snapshot(project.path(), "sub", &sub_dependencies).await?;
    log::debug!(
      "Comparing {} host package(s) against {} bundled package(s)",
      super_snapshot.len(),
      sub_snapshot.len()
    );

    Ok(resolve_externals(&super_snapshot, &sub_snapshot))
  }

  async fn capture_snapshot(
    &self,
    project_dir: &Path,
    name: &str,
    dependencies: &[String],
  ) -> BuildResult<DependencySnapshot> {
    let dir = project_dir.join(name);
    self.fs.create_dir_all(&dir)?;
    self.fs.write(&dir.join("package.json"), json!({ "name": name }).to_string().as_bytes())?;

    if dependencies.is_empty() {
      return Ok(DependencySnapshot::default());
    }
    self.package_manager.install(dependencies, &dir).await?;

    let lockfile_path = dir.join("package-lock.json");
    let lockfile = self.fs.read_to_string(&lockfile_path)?;
    let lockfile: serde_json::Value = serde_json::from_str(&lockfile)
      .with_context(|| format!("Failed to parse {}", lockfile_path.display()))?;
    Ok(snapshot_from_lockfile(&lockfile)?)
  }
}
