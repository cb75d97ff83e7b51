/// One exposed package (depth 0) or a path inside its parent package (depth 1).
///
/// Nodes are only built by the export sanitizer. All fields are fixed at
/// construction, including the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNode {
  id: String,
  name: String,
  alias: Option<String>,
  children: Vec<ExportNode>,
  declaration: Option<String>,
  global_declaration: Option<String>,
}

/// The parts of a node that exist before its children are sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportHead<'a> {
  pub id: &'a str,
  pub name: &'a str,
  pub alias: Option<&'a str>,
}

impl ExportNode {
  pub fn new(
    head: ExportHead<'_>,
    children: Vec<ExportNode>,
    declaration: Option<String>,
    global_declaration: Option<String>,
  ) -> Self {
    Self {
      id: head.id.to_string(),
      name: head.name.to_string(),
      alias: head.alias.map(ToString::to_string),
      children,
      declaration,
      global_declaration,
    }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn alias(&self) -> Option<&str> {
    self.alias.as_deref()
  }

  pub fn children(&self) -> &[ExportNode] {
    &self.children
  }

  pub fn declaration(&self) -> Option<&str> {
    self.declaration.as_deref()
  }

  pub fn global_declaration(&self) -> Option<&str> {
    self.global_declaration.as_deref()
  }
}
