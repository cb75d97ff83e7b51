use anywhereify_common::{ExportTree, NormalizedOptions};
use anywhereify_error::BuildResult;
use anywhereify_exports::{sanitize_exports, IdentifierSource};

/// Turns the merged `exports` into a validated tree. Nothing touches the
/// disk before this succeeds.
pub fn compile_exports(
  options: &NormalizedOptions,
  ids: &dyn IdentifierSource,
) -> BuildResult<ExportTree> {
  let tree = sanitize_exports(Some(&options.exports), ids)?;
  log::debug!("Compiled {} export(s)", tree.len());
  Ok(tree)
}
