use std::ffi::c_void;
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Floats making up a single vertex.
    pub fn stride(&self) -> usize {
        self.attributes.iter().map(|a| a.size()).sum()
    }

    fn validate(&self) -> Result<usize, GBError> {
        let stride = self.stride();

        if stride == 0 {
            return Err(GBError::NoAttributes);
        }

        if self.data.len() % stride != 0 {
            return Err(GBError::InvalidDataLength);
        }

        Ok(stride)
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let stride = self.validate()?;

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(self.data) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            let mut offset = 0;

            for (i, attr) in self.attributes.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (stride * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                offset += attr.size();
                gl::EnableVertexAttribArray(i as u32);
            }

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        let vertices = self.data.len() / stride;

        log::debug!("Uploaded {vertices} vertices into vao {vao} / vbo {vbo}");

        Ok(Geometry { vao, vbo, vertices })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry needs at least one vertex attribute")]
    NoAttributes,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexAttribute {
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    vertices: usize,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }
    pub fn vertices(&self) -> usize {
        self.vertices
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_from_attributes() {
        let data = [0.0; 10];
        let builder = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec2)
            .with_attribute(VertexAttribute::Vec3);

        assert_eq!(builder.stride(), 5);
        assert_eq!(builder.validate(), Ok(5));
    }

    #[test]
    fn rejected_before_upload() {
        let data = [0.0; 5];

        let no_attributes = GeometryBuilder::new(&data).build();
        assert!(matches!(no_attributes, Err(GBError::NoAttributes)));

        let odd_length = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec2)
            .build();
        assert!(matches!(odd_length, Err(GBError::InvalidDataLength)));
    }
}
