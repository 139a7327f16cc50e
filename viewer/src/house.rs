use std::ops::Range;

use gl::types::GLint;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::Program;
use gl_wrapper::renderer::{GlRenderer, Primitive};
use gl_wrapper::shader::ShaderSources;

use crate::app::AppError;
use crate::demo::Demo;
use crate::COLOR_UNIFORM;

#[rustfmt::skip]
pub const HOUSE: [f32; 18] = [
    // body
    -0.5, -0.5,
     0.5, -0.5,
     0.5,  0.0,

    -0.5, -0.5,
     0.5,  0.0,
    -0.5,  0.0,

    // roof
    -0.6,  0.0,
     0.6,  0.0,
     0.0,  0.5,
];

pub const BODY: Range<usize> = 0..6;
pub const ROOF: Range<usize> = 6..9;

pub const SKY: [f32; 3] = [0.53, 0.81, 0.92];
pub const WALLS: [f32; 3] = [1.0, 0.93, 0.8];

pub struct House {
    shaders: ShaderSources,
}

impl House {
    pub fn new(shaders: ShaderSources) -> Self {
        Self { shaders }
    }
}

pub struct HouseResources {
    geometry: Geometry,
    program: Program,
    tint: GLint,
}

impl Demo for House {
    type Resources = HouseResources;

    fn title(&self) -> String {
        "Masterpiece".to_string()
    }

    fn clear_color(&self) -> [f32; 3] {
        SKY
    }

    fn load(&self) -> Result<Self::Resources, AppError> {
        let geometry = GeometryBuilder::new(&HOUSE)
            .with_attribute(VertexAttribute::Vec2)
            .build()?;
        let program = self.shaders.build()?;
        let tint = program.uniform_location(COLOR_UNIFORM)?;

        Ok(HouseResources {
            geometry,
            program,
            tint,
        })
    }

    fn draw(&self, resources: &Self::Resources, renderer: &mut GlRenderer) {
        let HouseResources {
            geometry,
            program,
            tint,
        } = resources;

        program.set_vec3(*tint, WALLS);

        renderer.draw_range(geometry, program, Primitive::Triangles, BODY);
        renderer.draw_range(geometry, program, Primitive::Triangles, ROOF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_vertices() {
        assert_eq!(HOUSE.len() / 2, ROOF.end);
        assert_eq!(BODY.end, ROOF.start);
        assert_eq!(BODY.len() % 3, 0);
        assert_eq!(ROOF.len(), 3);
    }

    #[test]
    fn roof_overhangs_body() {
        let xs = |range: Range<usize>| range.map(|i| HOUSE[i * 2]).collect::<Vec<_>>();

        let body = xs(BODY);
        let roof = xs(ROOF);

        let min = |v: &[f32]| v.iter().cloned().fold(f32::MAX, f32::min);
        let max = |v: &[f32]| v.iter().cloned().fold(f32::MIN, f32::max);

        assert!(min(&roof) < min(&body));
        assert!(max(&roof) > max(&body));
    }
}
