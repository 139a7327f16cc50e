use gl::types::GLint;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::Program;
use gl_wrapper::renderer::{GlRenderer, Primitive};
use gl_wrapper::shader::ShaderSources;

use linedraw::interleave;
use linedraw_common::scene::Scene;

use crate::app::AppError;
use crate::demo::Demo;
use crate::COLOR_UNIFORM;

/// Every line of the scene drawn as its own line strip in its own color.
pub struct Lines {
    scene: Scene,
    shaders: ShaderSources,
}

impl Lines {
    pub fn new(scene: Scene, shaders: ShaderSources) -> Self {
        Self { scene, shaders }
    }

    /// Vertex buffer contents and color, one pair per line.
    pub fn vertex_data(&self) -> Result<Vec<(Vec<f32>, [f32; 3])>, AppError> {
        let strips = self.scene.rasterize()?;

        Ok(strips
            .iter()
            .zip(&self.scene.lines)
            .map(|(strip, line)| (interleave(strip), line.color))
            .collect())
    }
}

pub struct LinesResources {
    strips: Vec<(Geometry, [f32; 3])>,
    program: Program,
    tint: GLint,
}

impl Demo for Lines {
    type Resources = LinesResources;

    fn title(&self) -> String {
        format!("LineDraw ({})", self.scene.algorithm)
    }

    fn clear_color(&self) -> [f32; 3] {
        self.scene.clear_color
    }

    fn load(&self) -> Result<Self::Resources, AppError> {
        let strips = self
            .vertex_data()?
            .iter()
            .map(|(data, color)| {
                GeometryBuilder::new(data)
                    .with_attribute(VertexAttribute::Vec2)
                    .build()
                    .map(|geometry| (geometry, *color))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let program = self.shaders.build()?;
        let tint = program.uniform_location(COLOR_UNIFORM)?;

        log::info!(
            "Loaded {} line strips using {}",
            strips.len(),
            self.scene.algorithm
        );

        Ok(LinesResources {
            strips,
            program,
            tint,
        })
    }

    fn draw(&self, resources: &Self::Resources, renderer: &mut GlRenderer) {
        for (strip, color) in &resources.strips {
            resources.program.set_vec3(resources.tint, *color);
            renderer.draw(strip, &resources.program, Primitive::LineStrip);
        }
    }
}
