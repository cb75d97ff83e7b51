use crate::ExportNode;

/// Deepest level an export may be declared at. Depth 0 is a package, depth 1 a path inside it.
pub const MAX_EXPORT_DEPTH: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTree {
  nodes: Vec<ExportNode>,
}

impl ExportTree {
  pub fn new(nodes: Vec<ExportNode>) -> Self {
    Self { nodes }
  }

  pub fn nodes(&self) -> &[ExportNode] {
    &self.nodes
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Depth-first, pre-order walk yielding each node with its depth.
  pub fn walk(&self) -> impl Iterator<Item = (&ExportNode, usize)> + '_ {
    let mut stack: Vec<(&ExportNode, usize)> = self.nodes.iter().rev().map(|n| (n, 0)).collect();
    std::iter::from_fn(move || {
      let (node, depth) = stack.pop()?;
      stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
      Some((node, depth))
    })
  }

  pub fn len(&self) -> usize {
    self.walk().count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ExportHead;

  fn leaf(id: &str) -> ExportNode {
    ExportNode::new(ExportHead { id, name: id, alias: Some(id) }, vec![], None, None)
  }

  #[test]
  fn walk_is_pre_order() {
    let parent = ExportNode::new(
      ExportHead { id: "b", name: "b", alias: Some("B") },
      vec![leaf("c"), leaf("d")],
      None,
      None,
    );
    let tree = ExportTree::new(vec![leaf("a"), parent, leaf("e")]);

    let visited: Vec<_> = tree.walk().map(|(node, depth)| (node.id(), depth)).collect();
    assert_eq!(visited, vec![("a", 0), ("b", 0), ("c", 1), ("d", 1), ("e", 0)]);
    assert_eq!(tree.len(), 5);
  }
}
