use std::path::Path;

use gl_wrapper::shader::ShaderSources;

pub mod app;
pub mod demo;
pub mod house;
pub mod lines;

use crate::app::AppError;

/// `vec3` uniform holding the flat color of whatever is drawn.
pub const COLOR_UNIFORM: &str = "tint";

/// Built-in flat color program.
pub fn default_shaders() -> ShaderSources {
    ShaderSources::new(
        include_str!("gl_shaders/default.vert"),
        include_str!("gl_shaders/default.frag"),
    )
}

/// Sources from `dir` when given, the built-in program otherwise.
pub fn shader_sources(dir: Option<&Path>) -> Result<ShaderSources, AppError> {
    match dir {
        Some(dir) => Ok(ShaderSources::load_dir(dir)?),
        None => Ok(default_shaders()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shaders() {
        let sources = shader_sources(None).unwrap();

        assert!(sources.vert.contains("layout (location = 0) in vec2"));
        assert!(sources.frag.contains("out vec4"));
        assert!(sources
            .frag
            .contains(&format!("uniform vec3 {COLOR_UNIFORM};")));
    }

    #[test]
    fn missing_shader_dir() {
        assert!(matches!(
            shader_sources(Some(Path::new("does/not/exist"))),
            Err(AppError::ShaderSource(_))
        ));
    }
}
