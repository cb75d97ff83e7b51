use std::sync::Arc;

use anywhereify_common::{ExportTree, NormalizedOptions};
use anywhereify_error::BuildResult;
use anywhereify_exports::declare_exports;
use anywhereify_utils::concat_string;

use crate::types::{temp_project::TempProject, SharedFileSystem};

/// Seeds a scratch project with a copy of the child manifest and a `stub.js`
/// that loads every export.
pub fn prepare_temp_project(
  fs: &SharedFileSystem,
  options: &NormalizedOptions,
  tree: &ExportTree,
) -> BuildResult<TempProject> {
  let project = TempProject::create(Arc::clone(fs), &options.temp_dir, options.keep_temp)?;
  log::debug!("Preparing temporary project at {}", project.path().display());

  fs.copy(&options.package_json_path(), &project.package_json())?;
  fs.write(&project.stub_file(), concat_string!(declare_exports(tree), "\n").as_bytes())?;

  Ok(project)
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use anywhereify_exports::{sanitize_exports, SequentialIdentifierSource};
  use anywhereify_fs::OsFileSystem;
  use serde_json::json;

  use super::*;

  #[test]
  fn copies_manifest_and_writes_stub() {
    let temp = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    std::fs::write(cwd.path().join("package.json"), r#"{ "name": "child" }"#).unwrap();
    let options = NormalizedOptions {
      cwd: cwd.path().to_path_buf(),
      config_path: cwd.path().join("anywhere.config.json"),
      root: PathBuf::from("/"),
      exports: json!([{ "name": "web3", "alias": "Web3" }, { "name": "polyfill" }]),
      polyfills: vec![],
      temp_dir: temp.path().to_path_buf(),
      out_dir: PathBuf::from("/project/dist"),
      minify: true,
      force: false,
      keep_temp: false,
    };
    let ids = SequentialIdentifierSource::new("id");
    let tree = sanitize_exports(Some(&options.exports), &ids).unwrap();
    let fs: SharedFileSystem = Arc::new(OsFileSystem);

    let project = prepare_temp_project(&fs, &options, &tree).unwrap();

    assert!(project.path().starts_with(temp.path()));
    assert_eq!(std::fs::read_to_string(project.package_json()).unwrap(), r#"{ "name": "child" }"#);
    assert_eq!(
      std::fs::read_to_string(project.stub_file()).unwrap(),
      "var idA = require(\"web3\");\nrequire(\"polyfill\");\n"
    );
  }
}
