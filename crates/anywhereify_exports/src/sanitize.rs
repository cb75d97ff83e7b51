use anywhereify_common::{ExportHead, ExportNode, ExportTree, MAX_EXPORT_DEPTH};
use anywhereify_error::ExportsError;
use serde_json::{Map, Value};

use crate::{
  declaration::{emit_declaration, emit_global_declaration},
  identifier::{IdentifierAllocator, IdentifierSource},
};

const KNOWN_FIELDS: [&str; 3] = ["name", "alias", "exports"];

/// Validates a raw export specification into an [`ExportTree`].
///
/// `None` (no `exports` given at all) yields an empty tree. Anything else
/// must be a non-empty array of export objects. A single malformed entry
/// fails the whole compilation.
pub fn sanitize_exports(
  raw: Option<&Value>,
  ids: &dyn IdentifierSource,
) -> Result<ExportTree, ExportsError> {
  let mut sanitizer = Sanitizer { allocator: IdentifierAllocator::new(ids) };
  let nodes = sanitizer.sanitize_list(raw, None, 0, "exports")?;
  Ok(ExportTree::new(nodes))
}

struct Sanitizer<'a> {
  allocator: IdentifierAllocator<'a>,
}

impl Sanitizer<'_> {
  fn sanitize_list(
    &mut self,
    raw: Option<&Value>,
    parent: Option<ExportHead<'_>>,
    depth: usize,
    path: &str,
  ) -> Result<Vec<ExportNode>, ExportsError> {
    let Some(raw) = raw else {
      return Ok(vec![]);
    };
    let Value::Array(items) = raw else {
      return Err(shape_error(path, "Array or undefined exports", Some(raw)));
    };
    if items.is_empty() {
      return Err(shape_error(path, "at least a single export child", Some(raw)));
    }
    if depth > MAX_EXPORT_DEPTH {
      return Err(ExportsError::Depth {
        path: path.to_string(),
        depth,
        max_depth: MAX_EXPORT_DEPTH,
      });
    }

    items
      .iter()
      .enumerate()
      .map(|(index, item)| self.sanitize_export(item, parent, depth, &format!("{path}[{index}]")))
      .collect()
  }

  fn sanitize_export(
    &mut self,
    raw: &Value,
    parent: Option<ExportHead<'_>>,
    depth: usize,
    path: &str,
  ) -> Result<ExportNode, ExportsError> {
    let Value::Object(fields) = raw else {
      return Err(shape_error(path, "Object export", Some(raw)));
    };
    let name = match fields.get("name") {
      Some(Value::String(name)) if !name.is_empty() => name.as_str(),
      other => return Err(shape_error(path, "non-empty String name", other)),
    };
    let alias = sanitize_alias(fields, path)?;
    warn_unknown_fields(fields, path);

    let id = self.allocator.allocate();
    let head = ExportHead { id: &id, name, alias };

    let children_path = format!("{path}.exports");
    let children = self.sanitize_list(fields.get("exports"), Some(head), depth + 1, &children_path)?;
    if !children.is_empty() && alias.is_none() {
      return Err(ExportsError::NestedExportsRequireAlias { path: path.to_string() });
    }

    let declaration = emit_declaration(head, children.len(), parent, depth, path)?;
    let global_declaration = emit_global_declaration(head, children.len(), depth, path)?;

    Ok(ExportNode::new(head, children, declaration, global_declaration))
  }
}

/// An alias is optional. Without one the export is a side-effect-only import.
fn sanitize_alias<'v>(
  fields: &'v Map<String, Value>,
  path: &str,
) -> Result<Option<&'v str>, ExportsError> {
  match fields.get("alias") {
    None => Ok(None),
    Some(Value::String(alias)) if !alias.is_empty() => Ok(Some(alias)),
    Some(other) => {
      Err(ExportsError::Alias { path: path.to_string(), found: other.to_string() })
    }
  }
}

fn warn_unknown_fields(fields: &Map<String, Value>, path: &str) {
  for key in fields.keys().filter(|key| !KNOWN_FIELDS.contains(&key.as_str())) {
    log::warn!("Ignoring unknown field `{key}` at `{path}`");
  }
}

fn shape_error(path: &str, expected: &'static str, found: Option<&Value>) -> ExportsError {
  ExportsError::Shape {
    path: path.to_string(),
    expected,
    found: found.map_or_else(|| "undefined".to_string(), Value::to_string),
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use rustc_hash::FxHashSet;
  use serde_json::json;

  use super::*;
  use crate::SequentialIdentifierSource;

  fn sanitize(raw: &Value) -> Result<ExportTree, ExportsError> {
    sanitize_exports(Some(raw), &SequentialIdentifierSource::new("id"))
  }

  #[test]
  fn absent_exports_yield_an_empty_tree() {
    let tree = sanitize_exports(None, &SequentialIdentifierSource::new("id")).unwrap();
    assert!(tree.is_empty());
  }

  #[test]
  fn rejects_malformed_roots() {
    assert!(matches!(sanitize(&json!([])), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!(null)), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!({ "name": "a" })), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!("a")), Err(ExportsError::Shape { .. })));
  }

  #[test]
  fn rejects_malformed_entries() {
    assert_eq!(
      sanitize(&json!([{}])).unwrap_err(),
      ExportsError::Shape {
        path: "exports[0]".into(),
        expected: "non-empty String name",
        found: "undefined".into()
      }
    );
    assert!(matches!(sanitize(&json!([{ "alias": "" }])), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!([{ "name": "" }])), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!([{ "name": 1 }])), Err(ExportsError::Shape { .. })));
    assert!(matches!(sanitize(&json!(["web3"])), Err(ExportsError::Shape { .. })));
  }

  #[test]
  fn rejects_invalid_aliases() {
    for alias in [json!(""), json!(null), json!(3), json!(["A"])] {
      assert!(matches!(
        sanitize(&json!([{ "name": "a", "alias": alias }])),
        Err(ExportsError::Alias { .. })
      ));
    }
  }

  #[test]
  fn nested_exports_require_a_parent_alias() {
    let err = sanitize(&json!([{ "name": "a", "exports": [{ "name": "b" }] }])).unwrap_err();
    assert_eq!(err, ExportsError::NestedExportsRequireAlias { path: "exports[0]".into() });
  }

  #[test]
  fn rejects_nesting_deeper_than_one_level() {
    let err = sanitize(&json!([{
      "name": "a",
      "alias": "A",
      "exports": [{
        "name": "b",
        "alias": "B",
        "exports": [{ "name": "c", "alias": "C" }]
      }]
    }]))
    .unwrap_err();
    assert_eq!(
      err,
      ExportsError::Depth { path: "exports[0].exports[0].exports".into(), depth: 2, max_depth: 1 }
    );

  }

  #[test]
  fn malformed_lists_below_the_depth_limit_are_shape_errors() {
    for exports in [json!([]), json!(null), json!("c")] {
      let err = sanitize(&json!([{
        "name": "a",
        "alias": "A",
        "exports": [{ "name": "b", "alias": "B", "exports": exports }]
      }]))
      .unwrap_err();
      assert!(
        matches!(err, ExportsError::Shape { ref path, .. } if path == "exports[0].exports[0].exports")
      );
    }
  }

  #[test]
  fn rejects_empty_nested_exports() {
    let err = sanitize(&json!([{ "name": "a", "alias": "A", "exports": [] }])).unwrap_err();
    assert!(matches!(err, ExportsError::Shape { ref path, .. } if path == "exports[0].exports"));
  }

  #[test]
  fn every_entry_becomes_a_uniquely_named_node() {
    let tree = sanitize(&json!([
      { "name": "a" },
      { "name": "b", "alias": "B" },
      { "name": "c", "alias": "C", "exports": [{ "name": "x", "alias": "X" }, { "name": "y" }] }
    ]))
    .unwrap();

    assert_eq!(tree.len(), 5);
    let ids: FxHashSet<&str> = tree.walk().map(|(node, _)| node.id()).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_alphabetic())));
  }

  #[test]
  fn precomputes_declarations() {
    let tree = sanitize(&json!([
      { "name": "c", "alias": "C", "exports": [{ "name": "x", "alias": "X" }] }
    ]))
    .unwrap();
    let parent = &tree.nodes()[0];
    let child = &parent.children()[0];

    assert_eq!(parent.id(), "idA");
    assert_eq!(parent.declaration(), None);
    assert_eq!(parent.global_declaration(), None);
    assert_eq!(child.declaration(), Some(r#"var idB = require("c/x")"#));
    assert_eq!(child.global_declaration(), Some("var idB"));
  }

  #[test]
  fn ignores_unknown_fields() {
    let tree = sanitize(&json!([{ "name": "a", "version": "1.0.0" }])).unwrap();
    assert_eq!(tree.nodes()[0].name(), "a");
  }
}
