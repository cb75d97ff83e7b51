//! Compiles an export list into the source fragments that load,
//! hoist and re-export the exposed packages.

mod declaration;
mod identifier;
mod module_exports;
mod sanitize;
mod suppress;

use anywhereify_common::ExportTree;
use anywhereify_utils::concat_string;
use itertools::Itertools;

pub use crate::{
  declaration::{binding_kind, emit_declaration, emit_global_declaration, BindingKind},
  identifier::{
    IdentifierAllocator, IdentifierSource, RandomIdentifierSource, SequentialIdentifierSource,
  },
  module_exports::generate_module_exports,
  sanitize::sanitize_exports,
  suppress::suppress_scoped_declarations,
};

/// Every declaration in the tree, depth-first, one statement per line.
pub fn declare_exports(tree: &ExportTree) -> String {
  tree.walk().filter_map(|(node, _)| node.declaration()).map(|d| concat_string!(d, ";")).join("\n")
}

/// Every hoisted binding in the tree, depth-first, one statement per line.
pub fn declare_global_exports(tree: &ExportTree) -> String {
  tree
    .walk()
    .filter_map(|(node, _)| node.global_declaration())
    .map(|d| concat_string!(d, ";"))
    .join("\n")
}

/// Names of the packages to install. Only top-level exports declare packages.
pub fn packages(tree: &ExportTree) -> Vec<&str> {
  tree.nodes().iter().map(|node| node.name()).collect()
}
