use std::path::PathBuf;

use clap::Parser;

use linedraw_common::args::SceneArgs;

/// Rasterizes line segments and shows them as line strips
#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub scene: SceneArgs,
    /// Directory with default.vert and default.frag, built-in shaders when omitted
    #[arg(long)]
    pub shaders: Option<PathBuf>,
    /// Width of the window
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Height of the window
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
