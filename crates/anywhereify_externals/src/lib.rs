//! Decides which packages the host already provides, so the bundler can
//! leave them out.

mod diff;
mod lockfile;
mod version_preference;

use anywhereify_common::DependencySnapshot;

pub use crate::{
  diff::diff_snapshots,
  lockfile::snapshot_from_lockfile,
  version_preference::should_externalize,
};

/// Names of the packages whose host ("super") version can stand in for the
/// bundle's own ("sub") version, in the order of the super snapshot.
pub fn resolve_externals(
  super_snapshot: &DependencySnapshot,
  sub_snapshot: &DependencySnapshot,
) -> Vec<String> {
  diff_snapshots(super_snapshot, sub_snapshot)
    .into_iter()
    .filter_map(|(name, pair)| {
      let externalize = should_externalize(Some(&pair.super_version), Some(&pair.sub_version));
      log::debug!(
        "{name}: host {} / bundle {} -> {}",
        pair.super_version,
        pair.sub_version,
        if externalize { "external" } else { "bundled" }
      );
      externalize.then_some(name)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn keeps_only_compatible_shared_packages() {
    let host: DependencySnapshot = [
      ("bn.js", "5.2.1"),
      ("web3-utils", "1.3.0"),
      ("ethers", "4.0.49"),
      ("react", "17.0.2"),
      ("buffer", "5.6.0"),
    ]
    .into_iter()
    .collect();
    let bundle: DependencySnapshot = [
      ("buffer", "5.7.1"),
      ("web3-utils", "1.2.11"),
      ("ethers", "5.0.0"),
      ("bn.js", "5.2.1"),
      ("axios", "0.21.1"),
    ]
    .into_iter()
    .collect();

    assert_eq!(resolve_externals(&host, &bundle), vec!["bn.js", "web3-utils"]);
  }

  #[test]
  fn nothing_shared_nothing_external() {
    let host: DependencySnapshot = [("a", "1.0.0")].into_iter().collect();
    let bundle: DependencySnapshot = [("b", "1.0.0")].into_iter().collect();
    assert!(resolve_externals(&host, &bundle).is_empty());
  }
}
