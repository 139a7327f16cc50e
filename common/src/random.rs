use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use linedraw::{Point, Segment};

use crate::scene::Line;

///
/// Endless source of lines with both endpoints uniformly placed in [-1, 1)²
///
/// Every line also gets a random color with channels in [0, 1).
///
pub struct LineGenerator {
    generator: Xoshiro256PlusPlus,
}

impl LineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            generator: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    fn point(&mut self) -> Point {
        Point::new(
            self.generator.gen_range(-1.0..1.0),
            self.generator.gen_range(-1.0..1.0),
        )
    }

    fn color(&mut self) -> [f32; 3] {
        [
            self.generator.gen(),
            self.generator.gen(),
            self.generator.gen(),
        ]
    }
}

impl Iterator for LineGenerator {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.point();
        let end = self.point();

        Some(Line::new(Segment::new(start, end), self.color()))
    }
}
