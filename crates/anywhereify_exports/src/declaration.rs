use anywhereify_common::{ExportHead, MAX_EXPORT_DEPTH};
use anywhereify_error::ExportsError;
use anywhereify_utils::{concat_string, ecmascript::require_call};

/// How a node is brought into scope by the generated stub.
///
/// Both emitters derive their output from [`binding_kind`], so a node gets a
/// hoisted binding exactly when it gets an initialised one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
  /// `require("x")`, nothing is bound.
  SideEffect,
  /// Nothing is loaded here, the children are.
  Deferred,
  /// `var id = require("x")`, hoisted as `var id`.
  Bound,
}

/// `None` when no policy covers the combination.
pub fn binding_kind(has_alias: bool, has_children: bool, depth: usize) -> Option<BindingKind> {
  match (has_alias, has_children, depth) {
    (_, _, depth) if depth > MAX_EXPORT_DEPTH => None,
    (false, false, _) => Some(BindingKind::SideEffect),
    (true, false, 0) => Some(BindingKind::Bound),
    (true, true, 0) => Some(BindingKind::Deferred),
    (true, _, 1) => Some(BindingKind::Bound),
    _ => None,
  }
}

fn classify(
  node: ExportHead<'_>,
  children: usize,
  depth: usize,
  path: &str,
) -> Result<BindingKind, ExportsError> {
  binding_kind(node.alias.is_some(), children > 0, depth).ok_or_else(|| {
    ExportsError::UnrepresentableNode {
      path: path.to_string(),
      depth,
      alias_state: if node.alias.is_some() { "present" } else { "absent" },
      children,
    }
  })
}

/// The module specifier a bound node loads. Nested exports are paths inside the parent package.
fn specifier(
  node: ExportHead<'_>,
  parent: Option<ExportHead<'_>>,
  depth: usize,
  path: &str,
) -> Result<String, ExportsError> {
  if depth == 0 {
    return Ok(node.name.to_string());
  }
  match parent {
    Some(parent) if !parent.name.is_empty() => {
      Ok(collapse_separators(&concat_string!(parent.name, "/", node.name)))
    }
    _ => Err(ExportsError::ParentShape { path: path.to_string(), depth }),
  }
}

/// Users may or may not spell out the separator between package and path.
fn collapse_separators(specifier: &str) -> String {
  let mut collapsed = String::with_capacity(specifier.len());
  for c in specifier.chars() {
    if c == '/' && collapsed.ends_with('/') {
      continue;
    }
    collapsed.push(c);
  }
  collapsed
}

pub fn emit_declaration(
  node: ExportHead<'_>,
  children: usize,
  parent: Option<ExportHead<'_>>,
  depth: usize,
  path: &str,
) -> Result<Option<String>, ExportsError> {
  let declaration = match classify(node, children, depth, path)? {
    BindingKind::SideEffect => Some(require_call(node.name)),
    BindingKind::Deferred => None,
    BindingKind::Bound => Some(concat_string!(
      "var ",
      node.id,
      " = ",
      require_call(&specifier(node, parent, depth, path)?)
    )),
  };
  Ok(declaration)
}

pub fn emit_global_declaration(
  node: ExportHead<'_>,
  children: usize,
  depth: usize,
  path: &str,
) -> Result<Option<String>, ExportsError> {
  Ok(match classify(node, children, depth, path)? {
    BindingKind::Bound => Some(concat_string!("var ", node.id)),
    BindingKind::SideEffect | BindingKind::Deferred => None,
  })
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  const PARENT: ExportHead<'static> = ExportHead { id: "P", name: "@opengsn/gsn", alias: Some("G") };

  fn head(name: &'static str, alias: Option<&'static str>) -> ExportHead<'static> {
    ExportHead { id: "X", name, alias }
  }

  #[test]
  fn side_effect_only_without_alias() {
    let node = head("polyfill-base64", None);
    assert_eq!(
      emit_declaration(node, 0, None, 0, "exports[0]").unwrap().as_deref(),
      Some(r#"require("polyfill-base64")"#)
    );
    assert_eq!(emit_global_declaration(node, 0, 0, "exports[0]").unwrap(), None);
  }

  #[test]
  fn side_effect_only_child_loads_its_own_name() {
    let node = head("dist/register", None);
    assert_eq!(
      emit_declaration(node, 0, Some(PARENT), 1, "p").unwrap().as_deref(),
      Some(r#"require("dist/register")"#)
    );
    assert_eq!(
      emit_declaration(node, 0, None, 1, "p").unwrap().as_deref(),
      Some(r#"require("dist/register")"#)
    );
    assert_eq!(emit_global_declaration(node, 0, 1, "p").unwrap(), None);
  }

  #[test]
  fn binds_top_level_alias() {
    let node = head("web3-providers-http", Some("Web3HttpProvider"));
    assert_eq!(
      emit_declaration(node, 0, None, 0, "p").unwrap().as_deref(),
      Some(r#"var X = require("web3-providers-http")"#)
    );
    assert_eq!(emit_global_declaration(node, 0, 0, "p").unwrap().as_deref(), Some("var X"));
  }

  #[test]
  fn defers_to_children() {
    let node = head("@opengsn/gsn", Some("OpenGSN"));
    assert_eq!(emit_declaration(node, 2, None, 0, "p").unwrap(), None);
    assert_eq!(emit_global_declaration(node, 2, 0, "p").unwrap(), None);
  }

  #[test]
  fn joins_child_path_and_collapses_separators() {
    for name in ["dist/RelayProvider", "/dist/RelayProvider", "//dist//RelayProvider"] {
      assert_eq!(
        emit_declaration(head(name, Some("RelayProvider")), 0, Some(PARENT), 1, "p")
          .unwrap()
          .as_deref(),
        Some(r#"var X = require("@opengsn/gsn/dist/RelayProvider")"#)
      );
    }
  }

  #[test]
  fn child_without_parent_is_a_parent_shape_error() {
    let err = emit_declaration(head("dist/a", Some("A")), 0, None, 1, "exports[0].exports[0]")
      .unwrap_err();
    assert_eq!(err, ExportsError::ParentShape { path: "exports[0].exports[0]".into(), depth: 1 });

    let nameless = ExportHead { id: "P", name: "", alias: Some("P") };
    assert!(matches!(
      emit_declaration(head("dist/a", Some("A")), 0, Some(nameless), 1, "p"),
      Err(ExportsError::ParentShape { .. })
    ));
  }

  #[test]
  fn uncovered_combinations_are_unrepresentable() {
    assert!(matches!(
      emit_declaration(head("a", None), 1, None, 0, "p"),
      Err(ExportsError::UnrepresentableNode { children: 1, .. })
    ));
    assert!(matches!(
      emit_global_declaration(head("a", Some("A")), 0, 2, "p"),
      Err(ExportsError::UnrepresentableNode { depth: 2, .. })
    ));
  }

  #[test]
  fn emitters_agree_on_which_nodes_bind() {
    for has_alias in [false, true] {
      for has_children in [false, true] {
        for depth in 0..=2 {
          let kind = binding_kind(has_alias, has_children, depth);
          let hoisted = has_alias && ((depth == 0 && !has_children) || depth == 1);
          if kind.is_some() {
            assert_eq!(kind == Some(BindingKind::Bound), hoisted);
          }
        }
      }
    }
  }
}
