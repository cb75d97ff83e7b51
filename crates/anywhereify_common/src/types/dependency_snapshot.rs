use anywhereify_utils::indexmap::FxIndexMap;

/// Package name to resolved version for one dependency graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySnapshot {
  versions: FxIndexMap<String, String>,
}

/// Versions of one package as seen by the host ("super") and the bundle ("sub").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
  pub super_version: String,
  pub sub_version: String,
}

impl DependencySnapshot {
  pub fn version(&self, name: &str) -> Option<&str> {
    self.versions.get(name).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.versions.iter().map(|(name, version)| (name.as_str(), version.as_str()))
  }

  pub fn len(&self) -> usize {
    self.versions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.versions.is_empty()
  }
}

/// Keeps the first version seen for each name.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencySnapshot {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut versions = FxIndexMap::default();
    for (name, version) in iter {
      versions.entry(name.into()).or_insert_with(|| version.into());
    }
    Self { versions }
  }
}

#[test]
fn first_version_wins() {
  let snapshot: DependencySnapshot =
    [("semver", "7.5.4"), ("lodash", "4.17.21"), ("semver", "6.3.1")].into_iter().collect();
  assert_eq!(snapshot.len(), 2);
  assert_eq!(snapshot.version("semver"), Some("7.5.4"));
  assert_eq!(snapshot.version("react"), None);
}
