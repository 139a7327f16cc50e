use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use linedraw::{Algorithm, Bresenham, Point, RasterError, Segment};

use crate::random::LineGenerator;
use crate::scene::{Line, Scene, DEFAULT_LINE_COLOR};

pub struct SceneLoader {}

impl SceneLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Scene, LoaderError> {
        let scene_str = std::fs::read_to_string(&path).map_err(LoaderError::InputError)?;

        let scene = Self::load_from_str(&scene_str)?;

        log::info!(
            "Read scene file from {:?} ({} lines)",
            path.as_ref(),
            scene.lines.len()
        );

        Ok(scene)
    }

    pub fn load_from_str(scene_str: &str) -> Result<Scene, LoaderError> {
        let file: SceneFile = json5::from_str(scene_str).map_err(LoaderError::FormatError)?;

        let algorithm = match &file.algorithm {
            Some(name) => parse_algorithm(name, file.scale)?,
            None => Algorithm::default(),
        };

        let mut scene = Scene::new(algorithm);

        if let Some(color) = file.clear_color {
            scene.clear_color = check_color(color, "clear color")?;
        }

        for stub in &file.segments {
            let segment = Segment::new(Point::from(stub.start), Point::from(stub.end));
            let color = check_color(stub.color.unwrap_or(DEFAULT_LINE_COLOR), "line color")?;

            scene.lines.push(Line::new(segment, color));
        }

        if let Some(random) = &file.random {
            let generator = LineGenerator::new(random.seed.unwrap_or(0));
            scene.lines.extend(generator.take(random.count));
        }

        Ok(scene)
    }
}

/// Colors are rgb triples with channels in [0, 1].
pub fn check_color(color: [f32; 3], what: &str) -> Result<[f32; 3], LoaderError> {
    if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
        return Err(LoaderError::Other(format!("{what} out of [0, 1] range")));
    }

    Ok(color)
}

/// Resolves an algorithm name, `scale` only applies to Bresenham.
pub fn parse_algorithm(name: &str, scale: Option<u32>) -> Result<Algorithm, LoaderError> {
    match name.to_ascii_lowercase().as_str() {
        "dda" => {
            if scale.is_some() {
                log::warn!("Scale factor has no effect on the DDA rasterizer");
            }
            Ok(Algorithm::Dda)
        }
        "bresenham" => {
            let scale = scale.unwrap_or(Bresenham::DEFAULT_SCALE);
            let bresenham = Bresenham::new(scale).map_err(LoaderError::Raster)?;

            Ok(Algorithm::Bresenham(bresenham))
        }
        _ => Err(LoaderError::UnknownAlgorithm(name.to_owned())),
    }
}

#[derive(Debug)]
pub enum LoaderError {
    InputError(std::io::Error),
    FormatError(json5::Error),
    UnknownAlgorithm(String),
    Raster(RasterError),
    Other(String),
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError(e) => f.write_fmt(format_args!("{e}")),
            Self::FormatError(e) => f.write_fmt(format_args!("{e}")),
            Self::UnknownAlgorithm(name) => {
                f.write_fmt(format_args!("unknown algorithm '{name}'"))
            }
            Self::Raster(e) => f.write_fmt(format_args!("{e}")),
            Self::Other(e) => f.write_fmt(format_args!("{e}")),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputError(e) => Some(e),
            Self::FormatError(e) => Some(e),
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SegmentStub {
    start: [f32; 2],
    end: [f32; 2],
    color: Option<[f32; 3]>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RandomStub {
    count: usize,
    seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneFile {
    algorithm: Option<String>,
    scale: Option<u32>,
    clear_color: Option<[f32; 3]>,
    #[serde(default)]
    segments: Vec<SegmentStub>,
    random: Option<RandomStub>,
}
