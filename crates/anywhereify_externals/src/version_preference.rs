use nodejs_semver::{Version, VersionDiff};

/// Whether the host ("super") version may stand in for the version the bundle
/// resolved ("sub").
///
/// The host must not be older, and may only be ahead by a patch or minor
/// release. Missing or unparsable versions never externalize.
pub fn should_externalize(super_version: Option<&str>, sub_version: Option<&str>) -> bool {
  let (Some(super_raw), Some(sub_raw)) =
    (super_version.filter(|v| !v.is_empty()), sub_version.filter(|v| !v.is_empty()))
  else {
    return false;
  };
  let (Ok(super_version), Ok(sub_version)) = (Version::parse(super_raw), Version::parse(sub_raw))
  else {
    log::debug!("Not comparable as semver: `{super_raw}` / `{sub_raw}`");
    return false;
  };

  let super_is_greater = super_version >= sub_version;
  match super_version.diff(&sub_version) {
    None => true,
    Some(VersionDiff::Patch | VersionDiff::Minor) => super_is_greater,
    _ => false,
  }
}
