mod exports_error;

use std::ops::Deref;

pub use crate::exports_error::ExportsError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<ExportsError> for BuildError {
  fn from(error: ExportsError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<std::io::Error> for BuildError {
  fn from(error: std::io::Error) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn exports_error_keeps_its_message() {
  let error = BuildError::from(ExportsError::NestedExportsRequireAlias { path: "exports[0]".into() });
  assert_eq!(error.len(), 1);
  assert_eq!(
    error[0].to_string(),
    "In order to define nested exports, you must specify an alias for the parent export at `exports[0]`."
  );
  assert!(error[0].downcast_ref::<ExportsError>().is_some());
}
