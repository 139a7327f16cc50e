use rayon::prelude::*;

use linedraw::{Algorithm, Point, RasterError, Rasterizer, Segment};

/// Color of lines that don't pick their own.
pub const DEFAULT_LINE_COLOR: [f32; 3] = [1.0, 0.93, 0.8];

/// Segment drawn in a single flat color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub segment: Segment,
    pub color: [f32; 3],
}

impl Line {
    pub fn new(segment: Segment, color: [f32; 3]) -> Self {
        Self { segment, color }
    }
}

impl From<Segment> for Line {
    fn from(segment: Segment) -> Self {
        Self::new(segment, DEFAULT_LINE_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub algorithm: Algorithm,
    pub lines: Vec<Line>,
    pub clear_color: [f32; 3],
}

impl Scene {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            lines: Vec::new(),
            clear_color: [0.0; 3],
        }
    }

    pub fn push<L: Into<Line>>(mut self, line: L) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Rasterizes every line in parallel, results keep the line order.
    pub fn rasterize(&self) -> Result<Vec<Vec<Point>>, RasterError> {
        let strips = self
            .lines
            .par_iter()
            .map(|line| self.algorithm.rasterize(&line.segment))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Rasterized {} lines with {} into {} samples",
            strips.len(),
            self.algorithm,
            strips.iter().map(Vec::len).sum::<usize>()
        );

        Ok(strips)
    }
}
