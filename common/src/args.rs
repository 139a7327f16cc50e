use std::path::PathBuf;

use clap::{Args, ValueEnum};

use linedraw::{Algorithm, Bresenham, Point, Segment};

use crate::random::LineGenerator;
use crate::scene::{Line, Scene, DEFAULT_LINE_COLOR};
use crate::scene_loader::{check_color, LoaderError, SceneLoader};

/// Segment selection shared by the viewer and the cli.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Line rasterization algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Dda)]
    pub algorithm: AlgorithmArg,
    /// Grid cells per unit used by Bresenham
    #[arg(long, default_value_t = Bresenham::DEFAULT_SCALE)]
    pub scale: u32,
    /// Start of the segment
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        default_values_t = [-0.5, -0.8]
    )]
    pub start: Vec<f32>,
    /// End of the segment
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        default_values_t = [0.5, 0.3]
    )]
    pub end: Vec<f32>,
    /// Color of the segment
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values_t = DEFAULT_LINE_COLOR
    )]
    pub color: Vec<f32>,
    /// Path to scene JSON5 file, replaces the algorithm, segment and color options
    #[arg(long)]
    pub scene: Option<PathBuf>,
    /// Amount of random lines to add
    #[arg(short, long, default_value_t = 0)]
    pub random: usize,
    /// Seed for the random lines
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl SceneArgs {
    pub fn to_scene(&self) -> Result<Scene, LoaderError> {
        let mut scene = match &self.scene {
            Some(path) => SceneLoader::load_from_path(path)?,
            None => {
                let algorithm = self.algorithm()?;
                let segment = Segment::new(point_from(&self.start), point_from(&self.end));
                let color = check_color(color_from(&self.color), "line color")?;

                Scene::new(algorithm).push(Line::new(segment, color))
            }
        };

        if self.random > 0 {
            scene
                .lines
                .extend(LineGenerator::new(self.seed).take(self.random));
        }

        Ok(scene)
    }

    fn algorithm(&self) -> Result<Algorithm, LoaderError> {
        match self.algorithm {
            AlgorithmArg::Dda => Ok(Algorithm::Dda),
            AlgorithmArg::Bresenham => Bresenham::new(self.scale)
                .map(Algorithm::Bresenham)
                .map_err(LoaderError::Raster),
        }
    }
}

// clap guarantees the value counts
fn point_from(values: &[f32]) -> Point {
    Point::new(values[0], values[1])
}

fn color_from(values: &[f32]) -> [f32; 3] {
    [values[0], values[1], values[2]]
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum AlgorithmArg {
    Dda,
    Bresenham,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    use linedraw::RasterError;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        scene: SceneArgs,
    }

    fn parse(args: &[&str]) -> SceneArgs {
        TestArgs::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .scene
    }

    #[test]
    fn default_segment() {
        let scene = parse(&[]).to_scene().unwrap();

        assert_eq!(scene.algorithm, Algorithm::Dda);
        assert_eq!(
            scene.lines,
            vec![Line::new(
                Segment::new(Point::new(-0.5, -0.8), Point::new(0.5, 0.3)),
                DEFAULT_LINE_COLOR
            )]
        );
    }

    #[test]
    fn explicit_segment() {
        let scene = parse(&[
            "--algorithm",
            "bresenham",
            "--scale",
            "200",
            "--start",
            "-1",
            "0.25",
            "--end",
            "0.5",
            "-0.75",
            "--color",
            "0",
            "1",
            "0.5",
            "--random",
            "2",
            "--seed",
            "3",
        ])
        .to_scene()
        .unwrap();

        assert_eq!(
            scene.algorithm,
            Algorithm::Bresenham(Bresenham::new(200).unwrap())
        );
        assert_eq!(scene.lines.len(), 3);
        assert_eq!(
            scene.lines[0],
            Line::new(
                Segment::new(Point::new(-1.0, 0.25), Point::new(0.5, -0.75)),
                [0.0, 1.0, 0.5]
            )
        );
        assert_eq!(
            &scene.lines[1..],
            LineGenerator::new(3).take(2).collect::<Vec<_>>().as_slice()
        );
    }

    #[test]
    fn zero_scale() {
        let args = parse(&["-a", "bresenham", "--scale", "0"]);

        assert!(matches!(
            args.to_scene(),
            Err(LoaderError::Raster(RasterError::InvalidScale(0)))
        ));
    }

    #[test]
    fn color_out_of_range() {
        let args = parse(&["--color", "1", "1", "2"]);

        assert!(matches!(args.to_scene(), Err(LoaderError::Other(_))));
        assert!(TestArgs::try_parse_from(["test", "--color", "1", "1"]).is_err());
    }

    #[test]
    fn point_needs_two_values() {
        assert!(TestArgs::try_parse_from(["test", "--start", "0.5"]).is_err());
    }
}
