use crate::{Point, RasterError, Rasterizer, Segment, MAX_SAMPLES};

/// Grid coordinates must fit an `i32` once scaled.
const GRID_LIMIT: f32 = 2_147_483_648.0;

///
/// Bresenham's line algorithm on an integer grid of `scale` cells per unit
///
/// Endpoints are multiplied by the scale factor and truncated toward zero,
/// walked with an integer error term and divided back on output. Endpoints
/// closer together than `1 / scale` collapse into a single grid cell.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bresenham {
    scale: u32,
}

impl Bresenham {
    /// Grid cells per unit used by [`Bresenham::default`].
    pub const DEFAULT_SCALE: u32 = 1000;

    pub fn new(scale: u32) -> Result<Self, RasterError> {
        if scale == 0 {
            return Err(RasterError::InvalidScale(scale));
        }

        Ok(Self { scale })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn to_grid(&self, point: Point) -> Result<(i64, i64), RasterError> {
        let scale = self.scale as f32;

        let mut grid = [0; 2];
        for (cell, value) in grid.iter_mut().zip([point.x * scale, point.y * scale]) {
            if value.abs() >= GRID_LIMIT {
                return Err(RasterError::Overflow(value));
            }
            *cell = value.trunc() as i64;
        }

        Ok((grid[0], grid[1]))
    }

    fn walk(&self, from: (i64, i64), to: (i64, i64)) -> Vec<Point> {
        let (mut x, mut y) = from;
        let (x_end, y_end) = to;

        let dx = (x_end - x).abs();
        let dy = (y_end - y).abs();

        let sx = if x <= x_end { 1 } else { -1 };
        let sy = if y <= y_end { 1 } else { -1 };

        let mut err = dx - dy;

        let scale = self.scale as f32;
        let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

        loop {
            points.push(Point::new(x as f32 / scale, y as f32 / scale));

            if x == x_end && y == y_end {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += sx;
            }

            if e2 < dx {
                err += dx;
                y += sy;
            }
        }

        points
    }
}

impl Default for Bresenham {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
        }
    }
}

impl Rasterizer for Bresenham {
    fn rasterize(&self, segment: &Segment) -> Result<Vec<Point>, RasterError> {
        segment.check_finite()?;

        let from = self.to_grid(segment.start)?;
        let to = self.to_grid(segment.end)?;

        let span = (to.0 - from.0).abs().max((to.1 - from.1).abs());
        if span >= MAX_SAMPLES as i64 {
            return Err(RasterError::Overflow(span as f32));
        }

        // always walk from the lexicographically smaller end, so that swapping
        // the endpoints only reverses the output
        let points = if from <= to {
            self.walk(from, to)
        } else {
            let mut points = self.walk(to, from);
            points.reverse();
            points
        };

        log::trace!(
            "Bresenham emitted {} samples for {:?} at scale {}",
            points.len(),
            segment,
            self.scale
        );

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    fn to_cells(points: &[Point], scale: u32) -> Vec<(i64, i64)> {
        points
            .iter()
            .map(|p| {
                (
                    (p.x * scale as f32).round() as i64,
                    (p.y * scale as f32).round() as i64,
                )
            })
            .collect()
    }

    fn random_segments(count: usize) -> Vec<Segment> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        (0..count)
            .map(|_| {
                segment(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
            })
            .collect()
    }

    #[test]
    fn reference_segment() {
        let bresenham = Bresenham::default();
        let points = bresenham.rasterize(&segment(-0.5, -0.8, 0.5, 0.3)).unwrap();

        assert_eq!(points.len(), 1101);
        assert_eq!(points[0], Point::new(-0.5, -0.8));
        assert_eq!(*points.last().unwrap(), Point::new(0.5, 0.3));

        let cells = to_cells(&points, 1000);
        assert_eq!(cells[0], (-500, -800));
        assert_eq!(cells[1100], (500, 300));

        // y is the dominant axis, x never goes backwards
        for pair in cells.windows(2) {
            assert_eq!(pair[1].1 - pair[0].1, 1);
            assert!(pair[1].0 - pair[0].0 == 0 || pair[1].0 - pair[0].0 == 1);
        }
    }

    #[test]
    fn degenerate_segment() {
        let points = Bresenham::default()
            .rasterize(&segment(0.0, 0.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(points, vec![Point::new(0.0, 0.0)]);

        // below the grid resolution both ends collapse into one cell
        let points = Bresenham::new(10)
            .unwrap()
            .rasterize(&segment(0.11, 0.11, 0.12, 0.14))
            .unwrap();
        assert_eq!(points, vec![Point::new(0.1, 0.1)]);
    }

    #[test]
    fn zero_scale_rejected() {
        assert_eq!(Bresenham::new(0), Err(RasterError::InvalidScale(0)));
        assert_eq!(Bresenham::new(1).unwrap().scale(), 1);
    }

    #[test]
    fn axis_aligned() {
        let bresenham = Bresenham::new(1).unwrap();

        let points = bresenham.rasterize(&segment(0.0, 0.0, 0.0, -3.0)).unwrap();
        assert_eq!(
            to_cells(&points, 1),
            vec![(0, 0), (0, -1), (0, -2), (0, -3)]
        );

        let points = bresenham.rasterize(&segment(2.0, 5.0, -1.0, 5.0)).unwrap();
        assert_eq!(
            to_cells(&points, 1),
            vec![(2, 5), (1, 5), (0, 5), (-1, 5)]
        );
    }

    #[test]
    fn shallow_slope() {
        let bresenham = Bresenham::new(1).unwrap();
        let points = bresenham.rasterize(&segment(0.0, 0.0, 2.0, 1.0)).unwrap();

        assert_eq!(to_cells(&points, 1), vec![(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn swapped_endpoints_reverse_output() {
        let bresenham = Bresenham::new(1).unwrap();

        let forward = bresenham.rasterize(&segment(0.0, 0.0, 2.0, 1.0)).unwrap();
        let mut backward = bresenham.rasterize(&segment(2.0, 1.0, 0.0, 0.0)).unwrap();
        backward.reverse();
        assert_eq!(forward, backward);

        let bresenham = Bresenham::default();
        for s in random_segments(64) {
            let forward = bresenham.rasterize(&s).unwrap();
            let mut backward = bresenham
                .rasterize(&Segment::new(s.end, s.start))
                .unwrap();
            backward.reverse();

            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn eight_connected() {
        let bresenham = Bresenham::default();

        for s in random_segments(64) {
            let points = bresenham.rasterize(&s).unwrap();
            let cells = to_cells(&points, Bresenham::DEFAULT_SCALE);

            let dx = (cells[cells.len() - 1].0 - cells[0].0).abs();
            let dy = (cells[cells.len() - 1].1 - cells[0].1).abs();
            assert_eq!(cells.len() as i64, dx.max(dy) + 1);

            for pair in cells.windows(2) {
                assert!((pair[1].0 - pair[0].0).abs() <= 1);
                assert!((pair[1].1 - pair[0].1).abs() <= 1);
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn overflow_rejected() {
        let bresenham = Bresenham::new(1_000_000).unwrap();

        assert!(matches!(
            bresenham.rasterize(&segment(0.0, 0.0, 5000.0, 0.0)),
            Err(RasterError::Overflow(_))
        ));
        assert!(matches!(
            bresenham.rasterize(&segment(0.0, f32::NEG_INFINITY, 0.0, 0.0)),
            Err(RasterError::NonFinite(..))
        ));
    }

    #[test]
    fn sample_limit() {
        // both ends fit the grid, the walk between them does not
        let bresenham = Bresenham::new(u32::MAX).unwrap();
        assert!(matches!(
            bresenham.rasterize(&segment(-0.45, 0.0, 0.45, 0.0)),
            Err(RasterError::Overflow(span)) if span >= MAX_SAMPLES as f32
        ));

        let bresenham = Bresenham::new(1).unwrap();
        let limit = MAX_SAMPLES as f32;
        assert!(matches!(
            bresenham.rasterize(&segment(0.0, 0.0, limit, 3.0)),
            Err(RasterError::Overflow(_))
        ));
        assert_eq!(
            bresenham.rasterize(&segment(0.0, 0.0, 0.0, 1000.0)).unwrap().len(),
            1001
        );
    }
}
