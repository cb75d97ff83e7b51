use anywhereify_common::{ExportNode, ExportTree};
use anywhereify_utils::ecmascript::to_string_literal;
use rustc_hash::FxHashSet;

/// Renders the `module.exports` object literal for the tree.
///
/// Childless aliased exports become `"Alias": id`. Exports with children
/// become a nested object keyed by the children's aliases. Exports without an
/// alias have nothing to expose and are skipped.
///
/// Keys are emitted in tree order even when an alias repeats at the same
/// level, so the later export wins when the literal is evaluated. Repeats are
/// reported as warnings.
pub fn generate_module_exports(tree: &ExportTree) -> String {
  let mut s = String::from("module.exports = {\n");
  let mut seen = FxHashSet::default();

  for node in tree.nodes() {
    let Some(alias) = node.alias() else {
      continue;
    };
    warn_on_repeated_alias(&mut seen, alias, "module.exports");

    s.push_str("  ");
    s.push_str(&to_string_literal(alias));
    s.push_str(": ");
    if node.children().is_empty() {
      s.push_str(node.id());
    } else {
      render_nested(&mut s, node, alias);
    }
    s.push_str(",\n");
  }

  s.push_str("};");
  s
}

fn render_nested(s: &mut String, node: &ExportNode, parent_alias: &str) {
  let mut seen = FxHashSet::default();
  s.push_str("{\n");
  for child in node.children() {
    let Some(alias) = child.alias() else {
      continue;
    };
    warn_on_repeated_alias(&mut seen, alias, parent_alias);

    s.push_str("    ");
    s.push_str(&to_string_literal(alias));
    s.push_str(": ");
    s.push_str(child.id());
    s.push_str(",\n");
  }
  s.push_str("  }");
}

fn warn_on_repeated_alias<'a>(seen: &mut FxHashSet<&'a str>, alias: &'a str, scope: &str) {
  if !seen.insert(alias) {
    log::warn!("Alias `{alias}` is exported more than once in `{scope}`, the last one wins");
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::{sanitize_exports, SequentialIdentifierSource};

  fn compile(exports: &serde_json::Value) -> ExportTree {
    sanitize_exports(Some(exports), &SequentialIdentifierSource::new("id")).unwrap()
  }

  #[test]
  fn renders_flat_and_nested_exports() {
    let tree = compile(&json!([
      { "name": "@react-native-anywhere/polyfill-base64" },
      { "name": "web3-providers-http", "alias": "Web3HttpProvider" },
      {
        "name": "@opengsn/gsn",
        "alias": "OpenGSN",
        "exports": [
          { "name": "dist/RelayProvider", "alias": "RelayProvider" },
          { "name": "dist/GSNConfigurator", "alias": "GSNConfigurator" }
        ]
      }
    ]));

    assert_eq!(
      generate_module_exports(&tree),
      r#"module.exports = {
  "Web3HttpProvider": idB,
  "OpenGSN": {
    "RelayProvider": idD,
    "GSNConfigurator": idE,
  },
};"#
    );
  }

  #[test]
  fn is_idempotent() {
    let tree = compile(&json!([{ "name": "a", "alias": "A" }]));
    assert_eq!(generate_module_exports(&tree), generate_module_exports(&tree));
  }

  #[test]
  fn skips_exports_without_alias() {
    let tree = compile(&json!([
      { "name": "a" },
      { "name": "b", "alias": "B", "exports": [{ "name": "side-effect" }, { "name": "c", "alias": "C" }] }
    ]));
    assert_eq!(
      generate_module_exports(&tree),
      "module.exports = {\n  \"B\": {\n    \"C\": idD,\n  },\n};"
    );
  }

  #[test]
  fn repeated_aliases_are_kept_in_order_so_the_last_one_wins() {
    let tree = compile(&json!([
      { "name": "a", "alias": "Dup" },
      { "name": "b", "alias": "Dup" }
    ]));
    assert_eq!(generate_module_exports(&tree), "module.exports = {\n  \"Dup\": idA,\n  \"Dup\": idB,\n};");
  }

  #[test]
  fn quotes_aliases() {
    let tree = compile(&json!([{ "name": "a", "alias": "we\"ird" }]));
    assert_eq!(generate_module_exports(&tree), "module.exports = {\n  \"we\\\"ird\": idA,\n};");
  }

  #[test]
  fn empty_tree_exports_an_empty_object() {
    assert_eq!(generate_module_exports(&ExportTree::default()), "module.exports = {\n};");
  }
}
