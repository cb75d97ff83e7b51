mod anywhereify;
mod collaborators;
mod stages;
mod types;
mod utils;

pub use crate::{
  anywhereify::Anywhereify,
  collaborators::{
    bundle_backend::{BrowserifyBackend, BundleBackend},
    minifier::{Minifier, OxcMinifier},
    package_manager::{NpmPackageManager, PackageManager},
  },
  types::build_output::BuildOutput,
};
pub use anywhereify_common::*;
pub use anywhereify_error::{BuildError, BuildResult, ExportsError};
pub use anywhereify_exports::{
  IdentifierSource, RandomIdentifierSource, SequentialIdentifierSource,
};
pub use anywhereify_fs::{FileSystem, OsFileSystem};
