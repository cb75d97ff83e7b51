use std::path::{Path, PathBuf};

use anyhow::bail;
use anywhereify_common::{AnywhereConfig, AnywhereifyOptions, NormalizedOptions};
use anywhereify_fs::FileSystem;
use serde_json::{json, Value};
use sugar_path::SugarPath;

use super::load_config::CONFIG_FILE_NAME;

pub fn resolve_cwd(raw_options: &AnywhereifyOptions) -> anyhow::Result<PathBuf> {
  Ok(match &raw_options.cwd {
    Some(cwd) => cwd.clone(),
    None => std::env::current_dir()?,
  })
}

pub fn resolve_config_path(raw_options: &AnywhereifyOptions, cwd: &Path) -> PathBuf {
  raw_options.config.as_ref().map_or_else(|| cwd.join(CONFIG_FILE_NAME), |config| cwd.join(config))
}

/// Merges caller options over the config file. Caller options win.
pub fn normalize_options(
  raw_options: AnywhereifyOptions,
  config: AnywhereConfig,
  fs: &dyn FileSystem,
) -> anyhow::Result<NormalizedOptions> {
  let cwd = resolve_cwd(&raw_options)?;
  let config_path = resolve_config_path(&raw_options, &cwd);

  let out = raw_options.out.unwrap_or(config.out);
  if out.is_empty() {
    bail!("Expected non-empty String out, encountered \"\".");
  }

  let polyfills = raw_options
    .polyfills
    .unwrap_or_default()
    .into_iter()
    .map(|name| name.trim().to_string())
    .filter(|name| !name.is_empty())
    .collect::<Vec<_>>();
  let root = raw_options.root.map_or_else(|| find_host_root(fs, &cwd), |root| cwd.join(root));

  Ok(NormalizedOptions {
    out_dir: cwd.join(out).normalize(),
    root: root.normalize(),
    config_path,
    exports: with_polyfills(config.exports, &polyfills),
    polyfills,
    temp_dir: raw_options.temp_dir.unwrap_or_else(std::env::temp_dir),
    minify: raw_options.minify.or(config.minify).unwrap_or(true),
    force: raw_options.force.unwrap_or(false),
    keep_temp: raw_options.keep_temp.unwrap_or(false),
    cwd,
  })
}

/// The closest enclosing npm project above `cwd`, which is the one that will
/// load the bundle. Falls back to `cwd` itself.
fn find_host_root(fs: &dyn FileSystem, cwd: &Path) -> PathBuf {
  cwd
    .ancestors()
    .skip(1)
    .find(|dir| fs.exists(&dir.join("package.json")))
    .unwrap_or(cwd)
    .to_path_buf()
}

/// Polyfills are side-effect-only exports loaded before everything else.
fn with_polyfills(exports: Value, polyfills: &[String]) -> Value {
  match exports {
    Value::Array(items) if !polyfills.is_empty() => {
      Value::Array(polyfills.iter().map(|name| json!({ "name": name })).chain(items).collect())
    }
    other => other,
  }
}
