use anywhereify_common::ExportTree;
use rustc_hash::FxHashSet;

const BINDING_KEYWORDS: [&str; 3] = ["var", "let", "const"];

/// Rewrites the first initialised `var|let|const <id> = ...` of every id in
/// the tree into `<id> = ...`. Uninitialised declarations are never rewritten.
///
/// The bundler wraps each module in a function, so a declaration inside the
/// stub would shadow the hoisted binding emitted by `declare_global_exports`.
/// Only the first initialised declaration of each id is rewritten. Forward
/// declarations (`var <id>;`) and plain references are left alone, which lets
/// this run on text that already starts with the hoisted bindings.
///
/// This is a single textual pass matching whole identifiers. It does not
/// understand strings or comments.
pub fn suppress_scoped_declarations(source: &str, tree: &ExportTree) -> String {
  let mut pending: FxHashSet<&str> = tree.walk().map(|(node, _)| node.id()).collect();
  let bytes = source.as_bytes();
  let mut output = String::with_capacity(source.len());
  let mut copied_until = 0;
  let mut cursor = 0;

  while cursor < bytes.len() && !pending.is_empty() {
    if !is_identifier_byte(bytes[cursor]) {
      cursor += 1;
      continue;
    }
    let keyword_start = cursor;
    cursor = skip_identifier(bytes, cursor);
    if !BINDING_KEYWORDS.contains(&&source[keyword_start..cursor]) {
      continue;
    }

    let id_start = skip_whitespace(bytes, cursor);
    if id_start == cursor {
      continue;
    }
    let id_end = skip_identifier(bytes, id_start);
    let id = &source[id_start..id_end];
    if !pending.contains(id) || !is_initializer(bytes, id_end) {
      continue;
    }

    output.push_str(&source[copied_until..keyword_start]);
    copied_until = id_start;
    pending.remove(id);
    cursor = id_end;
  }

  output.push_str(&source[copied_until..]);
  output
}

/// Non-ASCII bytes count as identifier bytes so slices never split a char.
fn is_identifier_byte(byte: u8) -> bool {
  byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || !byte.is_ascii()
}

fn skip_identifier(bytes: &[u8], mut cursor: usize) -> usize {
  while cursor < bytes.len() && is_identifier_byte(bytes[cursor]) {
    cursor += 1;
  }
  cursor
}

fn skip_whitespace(bytes: &[u8], mut cursor: usize) -> usize {
  while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
    cursor += 1;
  }
  cursor
}

/// `=` but not `==`.
fn is_initializer(bytes: &[u8], cursor: usize) -> bool {
  let cursor = skip_whitespace(bytes, cursor);
  bytes.get(cursor) == Some(&b'=') && bytes.get(cursor + 1) != Some(&b'=')
}
