use std::{
  io,
  path::{Path, PathBuf},
  sync::Arc,
};

use anywhereify_fs::FileSystem;
use anywhereify_utils::concat_string;
use rand::{distributions::Alphanumeric, Rng};

/// A scratch npm project the exports are installed and bundled in.
/// Removed on drop unless `keep` is set.
pub struct TempProject {
  path: PathBuf,
  fs: Arc<dyn FileSystem>,
  keep: bool,
}

impl TempProject {
  pub fn create(fs: Arc<dyn FileSystem>, base: &Path, keep: bool) -> io::Result<Self> {
    let random: String =
      rand::thread_rng().sample_iter(&Alphanumeric).take(12).map(char::from).collect();
    let path = base.join(concat_string!("anywhereify-", random));
    fs.create_dir_all(&path)?;
    Ok(Self { path, fs, keep })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn stub_file(&self) -> PathBuf {
    self.path.join("stub.js")
  }

  pub fn package_json(&self) -> PathBuf {
    self.path.join("package.json")
  }
}

impl Drop for TempProject {
  fn drop(&mut self) {
    if self.keep {
      log::info!("Keeping temporary project at {}", self.path.display());
      return;
    }
    log::debug!("Cleaning up {}", self.path.display());
    if let Err(err) = self.fs.remove_dir_all(&self.path) {
      log::warn!("Failed to remove {}: {err}", self.path.display());
    }
  }
}

#[cfg(test)]
mod tests {
  use anywhereify_fs::OsFileSystem;

  use super::*;

  #[test]
  fn removed_on_drop_unless_kept() {
    let base = tempfile::tempdir().unwrap();
    let fs: Arc<dyn FileSystem> = Arc::new(OsFileSystem);

    let project = TempProject::create(Arc::clone(&fs), base.path(), false).unwrap();
    let path = project.path().to_path_buf();
    assert!(path.is_dir());
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("anywhereify-"));
    drop(project);
    assert!(!path.exists());

    let kept = TempProject::create(fs, base.path(), true).unwrap();
    let path = kept.path().to_path_buf();
    drop(kept);
    assert!(path.exists());
  }
}
