use std::{sync::Arc, time::Instant};

use anyhow::Context;
use anywhereify_common::{AnywhereifyOptions, NormalizedOptions, PackageJson};
use anywhereify_error::BuildResult;
use anywhereify_exports::{packages, IdentifierSource, RandomIdentifierSource};
use anywhereify_fs::{FileSystem, OsFileSystem};
use anywhereify_utils::{concat_string, xxhash::xxhash_base64_url};
use itertools::Itertools;

use crate::{
  stages::{
    compile::compile_exports, externals::ExternalsStage, generate::generate_output,
    prepare::prepare_temp_project,
  },
  types::{
    build_output::BuildOutput, SharedBundleBackend, SharedFileSystem, SharedIdentifierSource,
    SharedMinifier, SharedOptions, SharedPackageManager,
  },
  utils::{
    load_config::{load_config, LoadConfigReturn},
    normalize_options::{normalize_options, resolve_config_path, resolve_cwd},
  },
  BrowserifyBackend, BundleBackend, Minifier, NpmPackageManager, OxcMinifier, PackageManager,
};

pub struct Anywhereify {
  options: AnywhereifyOptions,
  fs: SharedFileSystem,
  package_manager: SharedPackageManager,
  bundle_backend: SharedBundleBackend,
  minifier: SharedMinifier,
  ids: SharedIdentifierSource,
}

impl Anywhereify {
  pub fn new(options: AnywhereifyOptions) -> Self {
    Self {
      options,
      fs: Arc::new(OsFileSystem),
      package_manager: Arc::new(NpmPackageManager),
      bundle_backend: Arc::new(BrowserifyBackend),
      minifier: Arc::new(OxcMinifier),
      ids: Arc::new(RandomIdentifierSource::default()),
    }
  }

  pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
    self.fs = fs;
    self
  }

  pub fn with_package_manager(mut self, package_manager: Arc<dyn PackageManager>) -> Self {
    self.package_manager = package_manager;
    self
  }

  pub fn with_bundle_backend(mut self, bundle_backend: Arc<dyn BundleBackend>) -> Self {
    self.bundle_backend = bundle_backend;
    self
  }

  pub fn with_minifier(mut self, minifier: Arc<dyn Minifier>) -> Self {
    self.minifier = minifier;
    self
  }

  pub fn with_identifier_source(mut self, ids: Arc<dyn IdentifierSource>) -> Self {
    self.ids = ids;
    self
  }

  pub async fn build(&self) -> BuildResult<BuildOutput> {
    let start = Instant::now();

    let cwd = resolve_cwd(&self.options)?;
    let config_path = resolve_config_path(&self.options, &cwd);
    let LoadConfigReturn { config, source: config_source } = load_config(&*self.fs, &config_path)?;
    let options: SharedOptions =
      Arc::new(normalize_options(self.options.clone(), config, &*self.fs)?);

    let package_json_path = options.package_json_path();
    if !self.fs.exists(&package_json_path) {
      Err(anyhow::anyhow!("Expected a package.json at {}.", package_json_path.display()))?;
    }
    let package_json_source = self.fs.read_to_string(&package_json_path)?;
    let package_json = PackageJson::parse(&package_json_source)
      .with_context(|| format!("Failed to parse {}", package_json_path.display()))?;
    log::debug!("Dependencies: {}", package_json.dependencies.keys().join(", "));

    let tree = compile_exports(&options, &*self.ids)?;

    let host_inputs = self.host_inputs(&options);
    let hash = build_hash(&options, &config_source, &package_json_source, &host_inputs);
    if let Some(size) = self.previous_output_size(&options, &hash) {
      log::info!("{} is up to date", options.out_file().display());
      return Ok(BuildOutput {
        out_file: options.out_file(),
        externals: vec![],
        size,
        skipped: true,
        elapsed: start.elapsed(),
      });
    }

    let project = prepare_temp_project(&self.fs, &options, &tree)?;

    let packages = packages(&tree).into_iter().map(ToString::to_string).collect::<Vec<_>>();
    log::info!("Installing {}", packages.join(", "));
    self.package_manager.install(&packages, project.path()).await?;

    let externals = ExternalsStage::new(&self.fs, &self.package_manager, &options)
      .gather_externals(&project, package_json.name.as_deref())
      .await?;
    if !externals.is_empty() {
      log::info!("Leaving {} to the host", externals.join(", "));
    }

    let bundle =
      self.bundle_backend.bundle(&[project.stub_file()], &externals, project.path()).await?;
    let mut code = generate_output(&tree, &bundle)?;
    if options.minify {
      code = self.minifier.minify(&code)?;
    }

    let out_file = options.out_file();
    self.fs.create_dir_all(&options.out_dir)?;
    self.fs.write(&out_file, code.as_bytes())?;
    self.fs.write(&options.hash_file(), hash.as_bytes())?;

    Ok(BuildOutput { out_file, externals, size: code.len(), skipped: false, elapsed: start.elapsed() })
  }

  /// Host manifest and lockfile text. The externals depend on them, so they
  /// are part of the cache key.
  fn host_inputs(&self, options: &NormalizedOptions) -> String {
    ["package.json", "package-lock.json"]
      .iter()
      .map(|file| self.fs.read_to_string(&options.root.join(file)).unwrap_or_default())
      .join("\0")
  }

  /// Size of the existing output when it was built from the same inputs.
  fn previous_output_size(&self, options: &NormalizedOptions, hash: &str) -> Option<usize> {
    if options.force {
      return None;
    }
    let previous = self.fs.read_to_string(&options.hash_file()).ok()?;
    if previous != hash {
      return None;
    }
    self.fs.read_to_string(&options.out_file()).ok().map(|code| code.len())
  }
}

fn build_hash(
  options: &NormalizedOptions,
  config_source: &str,
  package_json_source: &str,
  host_inputs: &str,
) -> String {
  let input = concat_string!(
    config_source,
    "\0",
    package_json_source,
    "\0",
    options.root.to_string_lossy(),
    "\0",
    host_inputs,
    "\0",
    options.polyfills.join(","),
    "\0",
    if options.minify { "minify" } else { "" }
  );
  xxhash_base64_url(input.as_bytes())
}
