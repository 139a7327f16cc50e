use std::fmt::{Display, Formatter};

use cgmath::Point2;

use thiserror::Error;

pub mod bresenham;
pub mod dda;

pub use bresenham::Bresenham;
pub use dda::Dda;

/// Upper bound on the samples emitted for a single segment.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Point in the caller's 2D space, normalized device coordinates for the demos.
pub type Point = Point2<f32>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub(crate) fn check_finite(&self) -> Result<(), RasterError> {
        for point in [self.start, self.end] {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(RasterError::NonFinite(point.x, point.y));
            }
        }

        Ok(())
    }
}

///
/// Converts a segment into an ordered sequence of sample points
///
/// The first sample is the segment start and the last one the segment end,
/// modulo the precision of the implementation. Consecutive samples are meant
/// to be connected as a line strip.
///
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, segment: &Segment) -> Result<Vec<Point>, RasterError>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Dda,
    Bresenham(Bresenham),
}

impl Rasterizer for Algorithm {
    fn rasterize(&self, segment: &Segment) -> Result<Vec<Point>, RasterError> {
        match self {
            Algorithm::Dda => Dda.rasterize(segment),
            Algorithm::Bresenham(b) => b.rasterize(segment),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dda => f.write_str("DDA"),
            Algorithm::Bresenham(b) => {
                f.write_fmt(format_args!("Bresenham (scale {})", b.scale()))
            }
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RasterError {
    #[error("endpoint ({0}, {1}) is not finite")]
    NonFinite(f32, f32),
    #[error("invalid scale factor {0}, must be greater than zero")]
    InvalidScale(u32),
    #[error("value {0} is outside of the rasterizable range")]
    Overflow(f32),
}

/// Flattens samples into `[x0, y0, x1, y1, ...]` for a `Vec2` vertex buffer.
pub fn interleave(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
