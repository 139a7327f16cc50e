use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use serde::Serialize;

use thiserror::Error;

use linedraw::{Point, RasterError};
use linedraw_common::scene::Scene;
use linedraw_common::scene_loader::LoaderError;

mod args;
mod framebuffer;

use args::{Args, Format};
use framebuffer::FrameBuffer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let scene = args.scene.to_scene()?;

    let start = std::time::Instant::now();
    let strips = scene.rasterize()?;
    log::info!(
        "Rasterization took {:.03} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    match args.format {
        Format::Json => {
            let output = JsonOutput::new(&scene, &strips);

            match &args.output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(path)?);
                    serde_json::to_writer_pretty(writer, &output)?;
                    log::info!("Wrote samples to {:?}", path);
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut lock = stdout.lock();
                    serde_json::to_writer_pretty(&mut lock, &output)?;
                    writeln!(lock)?;
                }
            }
        }
        Format::Png => {
            let fb = plot(&scene, &strips, args.width, args.height)?;

            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("out.png"));
            fb.write_png(BufWriter::new(File::create(&path)?))?;

            log::info!("Wrote image to {:?}", path);
        }
    }

    Ok(())
}

/// Every strip plotted in the color of its line.
fn plot(
    scene: &Scene,
    strips: &[Vec<Point>],
    width: u32,
    height: u32,
) -> Result<FrameBuffer, RasterError> {
    let mut fb = FrameBuffer::new(width, height, scene.clear_color);

    for (strip, line) in strips.iter().zip(&scene.lines) {
        fb.plot_strip(strip, line.color)?;
    }

    Ok(fb)
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    algorithm: String,
    strips: Vec<JsonStrip>,
}

#[derive(Debug, Serialize)]
struct JsonStrip {
    color: [f32; 3],
    samples: Vec<[f32; 2]>,
}

impl JsonOutput {
    fn new(scene: &Scene, strips: &[Vec<Point>]) -> Self {
        Self {
            algorithm: scene.algorithm.to_string(),
            strips: strips
                .iter()
                .zip(&scene.lines)
                .map(|(strip, line)| JsonStrip {
                    color: line.color,
                    samples: strip.iter().map(|p| [p.x, p.y]).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Scene(#[from] LoaderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Png(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use linedraw::{Algorithm, Segment};
    use linedraw_common::scene::Line;

    #[test]
    fn json_output() {
        let scene = Scene::new(Algorithm::Dda)
            .push(Segment::new(Point::new(-0.5, -0.8), Point::new(0.5, 0.3)))
            .push(Line::new(
                Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 0.5)),
                [0.0, 0.0, 1.0],
            ));
        let strips = scene.rasterize().unwrap();

        let json = serde_json::to_value(JsonOutput::new(&scene, &strips)).unwrap();

        assert_eq!(json["algorithm"], "DDA");
        assert_eq!(json["strips"].as_array().unwrap().len(), 2);
        assert_eq!(json["strips"][0]["samples"].as_array().unwrap().len(), 2);
        assert_eq!(json["strips"][0]["samples"][0][0], -0.5);
        assert_eq!(json["strips"][0]["color"][0], 1.0);
        assert_eq!(json["strips"][1]["color"], serde_json::json!([0.0, 0.0, 1.0]));
    }

    #[test]
    fn strips_plotted_in_line_color() {
        let scene = Scene::new(Algorithm::Dda)
            .push(Line::new(
                Segment::new(Point::new(-1.0, 0.5), Point::new(0.5, 0.5)),
                [1.0, 0.0, 0.0],
            ))
            .push(Line::new(
                Segment::new(Point::new(-1.0, -0.5), Point::new(0.5, -0.5)),
                [0.0, 1.0, 0.0],
            ));
        let strips = scene.rasterize().unwrap();

        let fb = plot(&scene, &strips, 8, 8).unwrap();

        assert_eq!(fb.pixel(0, 2), Some([255, 0, 0, 255]));
        assert_eq!(fb.pixel(0, 6), Some([0, 255, 0, 255]));
        assert_eq!(fb.pixel(7, 2), Some([0, 0, 0, 255]));
    }
}
