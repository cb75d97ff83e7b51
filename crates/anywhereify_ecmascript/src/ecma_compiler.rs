use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  parser::Parser,
  span::SourceType,
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Bundles are CommonJS scripts, so they are parsed in sloppy mode.
  fn source_type() -> SourceType {
    SourceType::default().with_module(false)
  }

  pub fn check_syntax(source_text: &str) -> anyhow::Result<()> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, Self::source_type()).parse();
    if ret.errors.is_empty() {
      Ok(())
    } else {
      Err(anyhow::anyhow!("{:?}", ret.errors))
    }
  }

  /// Strips whitespace and comments. Names are kept as-is, the exported
  /// bindings must survive.
  pub fn minify(source_text: &str) -> anyhow::Result<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, Self::source_type()).parse();
    if !ret.errors.is_empty() {
      return Err(anyhow::anyhow!("{:?}", ret.errors));
    }

    let ret = Codegen::new()
      .with_options(CodegenOptions { minify: true, ..CodegenOptions::default() })
      .build(&ret.program);

    Ok(ret.code)
  }
}

#[test]
fn check_syntax_test() {
  assert!(EcmaCompiler::check_syntax("var a;\na = require(\"a\");\nmodule.exports = { \"A\": a, };").is_ok());
  assert!(EcmaCompiler::check_syntax("var = ;").is_err());
}

#[test]
fn minify_keeps_names() {
  let code = EcmaCompiler::minify("var someBinding = require(\"a\");\n\nmodule.exports = {\n  \"A\": someBinding,\n};").unwrap();
  assert!(code.contains("someBinding"));
  assert!(!code.contains("\n\n"));
}
