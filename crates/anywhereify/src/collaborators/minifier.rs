use anywhereify_ecmascript::EcmaCompiler;

pub trait Minifier: Send + Sync {
  fn minify(&self, source: &str) -> anyhow::Result<String>;
}

/// Whitespace-only minification. Mangling would rename the exported bindings.
#[derive(Debug, Default, Clone, Copy)]
pub struct OxcMinifier;

impl Minifier for OxcMinifier {
  fn minify(&self, source: &str) -> anyhow::Result<String> {
    EcmaCompiler::minify(source)
  }
}
