use thiserror::Error;

/// Failures raised while compiling an export list.
///
/// Every variant carries the JSON path of the offending entry, e.g.
/// `exports[2].exports[0]`, so the message can be surfaced verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportsError {
  /// A required field is missing or has the wrong type.
  #[error("Expected {expected} at `{path}`, encountered {found}.")]
  Shape { path: String, expected: &'static str, found: String },

  #[error("Expected non-empty String alias at `{path}`, encountered {found}.")]
  Alias { path: String, found: String },

  #[error(
    "It is not possible to define exports at a depth higher than {max_depth}. Expected depth <= {max_depth}, encountered {depth} at `{path}`."
  )]
  Depth { path: String, depth: usize, max_depth: usize },

  #[error(
    "In order to define nested exports, you must specify an alias for the parent export at `{path}`."
  )]
  NestedExportsRequireAlias { path: String },

  #[error("Expected a parent export with a non-empty name for `{path}` at depth {depth}.")]
  ParentShape { path: String, depth: usize },

  /// The sanitizer handed the emitter a node it has no policy for. Always a defect.
  #[error(
    "Unable to generate a declaration for `{path}` (depth {depth}, alias {alias_state}, {children} children)."
  )]
  UnrepresentableNode { path: String, depth: usize, alias_state: &'static str, children: usize },
}
