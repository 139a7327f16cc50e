use crate::{Point, RasterError, Rasterizer, Segment, MAX_SAMPLES};

///
/// Digital differential analyzer working directly in the input space
///
/// Steps `floor(max(|dx|, |dy|))` times (at least once) with constant
/// floating point increments, so the last sample lands on the segment end.
/// No snapping to a pixel grid takes place.
///
#[derive(Debug, Copy, Clone, Default)]
pub struct Dda;

impl Rasterizer for Dda {
    fn rasterize(&self, segment: &Segment) -> Result<Vec<Point>, RasterError> {
        segment.check_finite()?;

        let delta = segment.end - segment.start;
        let steps = delta.x.abs().max(delta.y.abs());

        if steps == 0.0 {
            return Ok(vec![segment.start]);
        }

        // the cast saturates, huge spans still end up above the limit
        let count = (steps.floor() as usize).max(1);
        if count >= MAX_SAMPLES {
            return Err(RasterError::Overflow(steps));
        }

        let increment = delta / count as f32;

        let mut points = Vec::with_capacity(count + 1);
        let mut current = segment.start;

        for _ in 0..=count {
            points.push(current);
            current += increment;
        }

        log::trace!("DDA emitted {} samples for {:?}", points.len(), segment);

        Ok(points)
    }
}
