use std::ops::Range;

use gl::types::GLenum;

use crate::geometry::Geometry;
use crate::program::Program;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    LineStrip,
}

impl Primitive {
    fn gl_mode(&self) -> GLenum {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::LineStrip => gl::LINE_STRIP,
        }
    }
}

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program, primitive: Primitive) {
        self.draw_range(geometry, program, primitive, 0..geometry.vertices());
    }

    /// Draws the vertices in `range`, clamped to the vertices of `geometry`.
    pub fn draw_range(
        &mut self,
        geometry: &Geometry,
        program: &Program,
        primitive: Primitive,
        range: Range<usize>,
    ) {
        let end = range.end.min(geometry.vertices());
        if range.start >= end {
            return;
        }

        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(
                primitive.gl_mode(),
                range.start as i32,
                (end - range.start) as i32,
            );
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
