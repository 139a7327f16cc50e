use std::io::Write;

use linedraw::{Bresenham, Point, RasterError, Rasterizer, Segment};

/// Rgba8 image the line strips are plotted into.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    buffer: Vec<[u8; 4]>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, clear_color: [f32; 3]) -> Self {
        Self {
            width,
            height,
            buffer: vec![to_rgba(clear_color); width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.buffer[x as usize + y as usize * self.width as usize])
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }

        let index = x as usize + y as usize * self.width as usize;

        Some(&mut self.buffer[index])
    }

    /// NDC to pixel space, y pointing down.
    fn to_pixel(&self, point: Point) -> Point {
        Point::new(
            (point.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - point.y) * 0.5 * self.height as f32,
        )
    }

    /// Connects consecutive samples with one pixel wide lines, samples outside
    /// of the image are skipped.
    pub fn plot_strip(&mut self, strip: &[Point], color: [f32; 3]) -> Result<(), RasterError> {
        let pixels = Bresenham::new(1)?;
        let color = to_rgba(color);

        let segments = match strip {
            [single] => vec![Segment::new(*single, *single)],
            _ => strip
                .windows(2)
                .map(|pair| Segment::new(pair[0], pair[1]))
                .collect(),
        };

        for segment in segments {
            let segment = Segment::new(self.to_pixel(segment.start), self.to_pixel(segment.end));

            for p in pixels.rasterize(&segment)? {
                if let Some(pixel) = self.pixel_mut(p.x as i64, p.y as i64) {
                    *pixel = color;
                }
            }
        }

        Ok(())
    }

    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.buffer.concat().as_slice())?;

        Ok(())
    }
}

fn to_rgba(color: [f32; 3]) -> [u8; 4] {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);

    [r, g, b, 255]
}
