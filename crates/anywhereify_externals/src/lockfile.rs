use std::collections::VecDeque;

use anyhow::bail;
use anywhereify_common::DependencySnapshot;
use anywhereify_utils::indexmap::FxIndexMap;
use serde::Deserialize;
use serde_json::Value;

const NODE_MODULES: &str = "node_modules/";

/// The parts of `package-lock.json` that pin versions.
#[derive(Debug, Deserialize)]
struct PackageLock {
  /// Lockfile v2/v3, keyed by install path.
  packages: Option<FxIndexMap<String, LockedPackage>>,
  /// Lockfile v1, nested like the install tree.
  dependencies: Option<FxIndexMap<String, LockedDependency>>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
  version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LockedDependency {
  version: Option<String>,
  #[serde(default)]
  dependencies: FxIndexMap<String, LockedDependency>,
}

/// Reads the resolved versions out of a parsed `package-lock.json`.
///
/// Lockfile v2/v3 (`packages`) is preferred over v1 (`dependencies`). When a
/// package is installed more than once, the shallowest copy wins since that is
/// the one the host's own code resolves.
pub fn snapshot_from_lockfile(lockfile: &Value) -> anyhow::Result<DependencySnapshot> {
  if !lockfile.is_object() {
    bail!("Expected a package-lock Object, encountered {lockfile}.");
  }
  let lock = PackageLock::deserialize(lockfile)?;
  Ok(match (&lock.packages, &lock.dependencies) {
    (Some(packages), _) => from_packages(packages),
    (None, Some(dependencies)) => from_dependencies(dependencies),
    (None, None) => DependencySnapshot::default(),
  })
}

fn from_packages(packages: &FxIndexMap<String, LockedPackage>) -> DependencySnapshot {
  let mut entries: Vec<(usize, &str, &str)> = packages
    .iter()
    .filter_map(|(path, package)| {
      let depth = path.matches(NODE_MODULES).count();
      // `""` is the project itself, other paths without `node_modules/` are workspaces.
      if depth == 0 {
        return None;
      }
      let name = &path[path.rfind(NODE_MODULES)? + NODE_MODULES.len()..];
      Some((depth, name, package.version.as_deref()?))
    })
    .collect();
  entries.sort_by_key(|(depth, ..)| *depth);
  entries.into_iter().map(|(_, name, version)| (name, version)).collect()
}

fn from_dependencies(dependencies: &FxIndexMap<String, LockedDependency>) -> DependencySnapshot {
  let mut entries = Vec::new();
  let mut queue = VecDeque::from([dependencies]);
  while let Some(level) = queue.pop_front() {
    for (name, dependency) in level {
      if let Some(version) = &dependency.version {
        entries.push((name.as_str(), version.as_str()));
      }
      if !dependency.dependencies.is_empty() {
        queue.push_back(&dependency.dependencies);
      }
    }
  }
  entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn reads_lockfile_v2_packages() {
    let lockfile = json!({
      "name": "sub",
      "lockfileVersion": 2,
      "packages": {
        "": { "name": "sub", "dependencies": { "web3": "^1.3.0" } },
        "node_modules/web3-utils/node_modules/bn.js": { "version": "4.11.9" },
        "node_modules/bn.js": { "version": "5.2.1" },
        "node_modules/@opengsn/gsn": { "version": "2.1.0" },
        "node_modules/web3-utils": { "version": "1.3.0" },
        "packages/local": { "version": "0.0.1" },
        "node_modules/local": { "resolved": "packages/local", "link": true }
      },
      "dependencies": {
        "ignored": { "version": "9.9.9" }
      }
    });

    let snapshot = snapshot_from_lockfile(&lockfile).unwrap();
    assert_eq!(
      snapshot.iter().collect::<Vec<_>>(),
      vec![("bn.js", "5.2.1"), ("@opengsn/gsn", "2.1.0"), ("web3-utils", "1.3.0")]
    );
  }

  #[test]
  fn reads_lockfile_v1_dependencies_breadth_first() {
    let lockfile = json!({
      "lockfileVersion": 1,
      "dependencies": {
        "web3-utils": {
          "version": "1.3.0",
          "dependencies": { "bn.js": { "version": "4.11.9" } }
        },
        "bn.js": { "version": "5.2.1" }
      }
    });

    let snapshot = snapshot_from_lockfile(&lockfile).unwrap();
    assert_eq!(snapshot.version("bn.js"), Some("5.2.1"));
    assert_eq!(snapshot.version("web3-utils"), Some("1.3.0"));
    assert_eq!(snapshot.len(), 2);
  }

  #[test]
  fn empty_lockfile_has_no_dependencies() {
    assert!(snapshot_from_lockfile(&json!({ "lockfileVersion": 3 })).unwrap().is_empty());
  }

  #[test]
  fn rejects_non_objects() {
    assert!(snapshot_from_lockfile(&json!([])).is_err());
  }
}
