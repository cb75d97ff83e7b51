mod args;

use std::process::ExitCode;

use ansi_term::Colour;
use anywhereify::{Anywhereify, AnywhereifyOptions, BuildOutput};
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn print_output(output: &BuildOutput) {
  let dim = Colour::White.dimmed();
  let size = format!("{:.2}", output.size as f64 / 1024.0);

  println!(
    "{}{}{} kB",
    Colour::Cyan.paint(output.out_file.to_string_lossy()),
    dim.paint(" │ size: "),
    size
  );

  if output.skipped {
    println!("{}", dim.paint("Inputs unchanged, reusing the previous build (pass --force to rebuild)."));
    return;
  }

  for external in &output.externals {
    println!("{}{}", dim.paint("external: "), external);
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Commands::parse();
  let InputArgs { cwd, config, root, temp_dir } = args.input;
  let EnhanceArgs { minify, polyfills, force, keep_temp } = args.enhance;

  let anywhereify = Anywhereify::new(AnywhereifyOptions {
    cwd,
    config,
    root,
    polyfills,
    temp_dir,
    out: args.output.out,
    minify,
    force: Some(force),
    keep_temp: Some(keep_temp),
  });

  match anywhereify.build().await {
    Ok(output) => {
      print_output(&output);

      let elapsed = format!("{:.2}s", output.elapsed.as_secs_f64());
      println!(
        "\n{} Anywhereified your project in {}",
        Colour::Green.paint("✨"),
        Colour::White.bold().paint(elapsed)
      );
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        log::debug!("{error:?}");
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
