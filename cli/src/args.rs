use clap::{Parser, ValueEnum};

use linedraw_common::args::SceneArgs;
use std::path::PathBuf;

/// Rasterizes line segments without opening a window
#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub scene: SceneArgs,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    pub format: Format,
    /// Path to save output to, json goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Width of the output image
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Height of the output image
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Png,
}
