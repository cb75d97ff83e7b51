use std::{fs, io, path::Path};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    fs::write(path, content)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
  }

  fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
  }
}

#[test]
fn round_trips_through_disk() {
  let dir = tempfile::tempdir().unwrap();
  let fs = OsFileSystem;
  let nested = dir.path().join("a").join("b");

  fs.create_dir_all(&nested).unwrap();
  fs.write(&nested.join("package.json"), b"{}").unwrap();
  fs.copy(&nested.join("package.json"), &dir.path().join("copy.json")).unwrap();

  assert!(fs.exists(&dir.path().join("copy.json")));
  assert_eq!(fs.read_to_string(&dir.path().join("copy.json")).unwrap(), "{}");

  fs.remove_dir_all(&dir.path().join("a")).unwrap();
  assert!(!fs.exists(&nested));
}
