use oxc::syntax::identifier;

use crate::concat_string;

static RESERVED_WORDS: phf::Set<&'static str> = phf::phf_set! {
  "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
  "default", "delete", "do", "else", "enum", "eval", "export", "exports", "extends", "false",
  "finally", "for", "function", "if", "implements", "import", "in", "instanceof", "interface",
  "let", "module", "new", "null", "package", "private", "protected", "public", "require",
  "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined",
  "var", "void", "while", "with", "yield",
};

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Keywords plus the CommonJS names a generated binding must never shadow.
pub fn is_reserved_word(name: &str) -> bool {
  RESERVED_WORDS.contains(name)
}

pub fn is_safe_binding_name(name: &str) -> bool {
  is_validate_identifier_name(name) && !is_reserved_word(name)
}

/// Quotes `value` as a JavaScript string literal.
pub fn to_string_literal(value: &str) -> String {
  serde_json::Value::from(value).to_string()
}

pub fn require_call(specifier: &str) -> String {
  concat_string!("require(", to_string_literal(specifier), ")")
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_is_safe_binding_name() {
  assert!(is_safe_binding_name("VxQhTz"));
  assert!(!is_safe_binding_name("do"));
  assert!(!is_safe_binding_name("module"));
  assert!(!is_safe_binding_name(""));
}

#[test]
fn test_require_call() {
  assert_eq!(require_call("web3-providers-http"), r#"require("web3-providers-http")"#);
  assert_eq!(require_call(r#"we"ird"#), r#"require("we\"ird")"#);
}
