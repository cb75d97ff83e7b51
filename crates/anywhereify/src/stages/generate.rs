use anywhereify_common::{ExportTree, SourceJoiner};
use anywhereify_ecmascript::EcmaCompiler;
use anywhereify_error::BuildResult;
use anywhereify_exports::{
  declare_global_exports, generate_module_exports, suppress_scoped_declarations,
};

/// Hoists the exported bindings out of the bundle's module scope and
/// re-exports them from the top level.
pub fn generate_output(tree: &ExportTree, bundle: &str) -> BuildResult<String> {
  let mut hoisted = SourceJoiner::default();
  hoisted.append_source(declare_global_exports(tree));
  hoisted.append_source(bundle);

  let mut output = SourceJoiner::default();
  output.append_source(suppress_scoped_declarations(&hoisted.join(), tree));
  output.append_source(generate_module_exports(tree));
  let code = output.join();

  EcmaCompiler::check_syntax(&code)?;
  Ok(code)
}
