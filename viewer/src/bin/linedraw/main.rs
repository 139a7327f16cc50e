use std::process::ExitCode;

use clap::Parser;

use linedraw_viewer::app::{App, AppError};
use linedraw_viewer::lines::Lines;
use linedraw_viewer::shader_sources;

mod args;

use args::Args;

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
    let scene = args.scene.to_scene()?;
    let shaders = shader_sources(args.shaders.as_deref())?;

    App::new(Lines::new(scene, shaders), args.width, args.height)?.run()
}
