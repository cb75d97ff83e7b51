use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Directory holding `anywhere.config.json` and `package.json`.
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Host project whose dependencies may be left external.
  #[clap(long)]
  pub root: Option<PathBuf>,

  #[clap(long)]
  pub temp_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'o')]
  pub out: Option<String>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, short = 'm')]
  pub minify: Option<bool>,

  /// Comma-separated packages loaded for their side effects before the exports.
  #[clap(long, value_delimiter = ',')]
  pub polyfills: Option<Vec<String>>,

  #[clap(long, short = 'f')]
  pub force: bool,

  #[clap(long)]
  pub keep_temp: bool,
}
