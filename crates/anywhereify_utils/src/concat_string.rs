/// Concatenates string-like values into a single `String`, allocating once.
///
/// ```ignore
/// let s = concat_string!("require(", "\"a\"", ")");
/// ```
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {
    [$(AsRef::<str>::as_ref(&$s)),+].concat()
  };
}

#[test]
fn test_concat_string() {
  let name = String::from("web3");
  assert_eq!(concat_string!("require(\"", name, "\")"), "require(\"web3\")");
  assert_eq!(concat_string!(), "");
}
