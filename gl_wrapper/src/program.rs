use gl::types::{GLenum, GLint, GLuint};
use std::ffi::{c_char, CString, NulError};
use thiserror::Error;

const LOG_SIZE: usize = 1024;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Result<Self, PBError> {
        Ok(Self {
            vert: CString::new(vert_src)?,
            frag: CString::new(frag_src)?,
        })
    }

    pub fn build(self) -> Result<Program, PBError> {
        let mut success: i32 = 0;

        unsafe {
            let vert = compile(gl::VERTEX_SHADER, &self.vert)?;

            let frag = match compile(gl::FRAGMENT_SHADER, &self.frag) {
                Ok(frag) => frag,
                Err(e) => {
                    gl::DeleteShader(vert);
                    return Err(e);
                }
            };

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; LOG_SIZE];

                gl::GetProgramInfoLog(
                    program,
                    LOG_SIZE as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log(&buf)));
            }

            log::debug!("Linked shader program {program}");

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile(kind: GLenum, source: &CString) -> Result<GLuint, PBError> {
    let mut success: i32 = 0;

    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&source.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let mut buf = [0_u8; LOG_SIZE];

        gl::GetShaderInfoLog(
            shader,
            LOG_SIZE as i32,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );
        gl::DeleteShader(shader);

        return Err(PBError::Compilation(info_log(&buf)));
    }

    Ok(shader)
}

/// Info logs are nul terminated unless they fill the whole buffer.
fn info_log(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
    #[error("shader source or uniform name contains a nul byte: {0}")]
    InvalidSource(#[from] NulError),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// `-1` when the program has no active uniform called `name`.
    pub fn uniform_location(&self, name: &str) -> Result<GLint, PBError> {
        let name = CString::new(name)?;

        Ok(unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) })
    }

    /// Sets a `vec3` uniform without binding the program. GL ignores location `-1`.
    pub fn set_vec3(&self, location: GLint, value: [f32; 3]) {
        let [x, y, z] = value;

        unsafe { gl::ProgramUniform3f(self.id, location, x, y, z) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
