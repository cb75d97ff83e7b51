pub mod bundle_backend;
pub mod minifier;
pub mod package_manager;
