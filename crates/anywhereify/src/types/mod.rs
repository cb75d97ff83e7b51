use std::sync::Arc;

use anywhereify_common::NormalizedOptions;
use anywhereify_exports::IdentifierSource;
use anywhereify_fs::FileSystem;

use crate::{BundleBackend, Minifier, PackageManager};

pub mod build_output;
pub mod temp_project;

pub type SharedOptions = Arc<NormalizedOptions>;
pub type SharedFileSystem = Arc<dyn FileSystem>;
pub type SharedPackageManager = Arc<dyn PackageManager>;
pub type SharedBundleBackend = Arc<dyn BundleBackend>;
pub type SharedMinifier = Arc<dyn Minifier>;
pub type SharedIdentifierSource = Arc<dyn IdentifierSource>;
