use anywhereify_common::{DependencySnapshot, VersionPair};
use anywhereify_utils::indexmap::FxIndexMap;

/// Packages present in both snapshots with the version each one resolved.
pub fn diff_snapshots(
  super_snapshot: &DependencySnapshot,
  sub_snapshot: &DependencySnapshot,
) -> FxIndexMap<String, VersionPair> {
  super_snapshot
    .iter()
    .filter_map(|(name, super_version)| {
      let sub_version = sub_snapshot.version(name)?;
      Some((
        name.to_string(),
        VersionPair { super_version: super_version.to_string(), sub_version: sub_version.to_string() },
      ))
    })
    .collect()
}
