mod options;
mod types;

pub use crate::{
  options::{
    anywhere_config::{AnywhereConfig, DEFAULT_OUT_DIR},
    normalized_options::NormalizedOptions,
    AnywhereifyOptions,
  },
  types::{
    dependency_snapshot::{DependencySnapshot, VersionPair},
    export_node::{ExportHead, ExportNode},
    export_tree::{ExportTree, MAX_EXPORT_DEPTH},
    package_json::PackageJson,
    source::Source,
    source_joiner::SourceJoiner,
  },
};
