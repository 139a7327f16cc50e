use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use linedraw_viewer::app::{App, AppError};
use linedraw_viewer::house::House;
use linedraw_viewer::shader_sources;

/// Static house made of three triangles
#[derive(Debug, Parser)]
struct Args {
    /// Directory with default.vert and default.frag, built-in shaders when omitted
    #[arg(long)]
    shaders: Option<PathBuf>,
    /// Width of the window
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Height of the window
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = <Args as Parser>::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let shaders = shader_sources(args.shaders.as_deref())?;

    App::new(House::new(shaders), args.width, args.height)?.run()
}
