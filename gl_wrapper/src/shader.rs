use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::program::{PBError, Program, ProgramBuilder};

pub const VERTEX_FILE: &str = "default.vert";
pub const FRAGMENT_FILE: &str = "default.frag";

///
/// Vertex and fragment source pair of a program
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vert: String,
    pub frag: String,
}

impl ShaderSources {
    pub fn new(vert: &str, frag: &str) -> Self {
        Self {
            vert: vert.to_owned(),
            frag: frag.to_owned(),
        }
    }

    /// Reads [`VERTEX_FILE`] and [`FRAGMENT_FILE`] from `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ShaderSourceError> {
        let dir = dir.as_ref();

        let sources = Self {
            vert: read_source(dir.join(VERTEX_FILE))?,
            frag: read_source(dir.join(FRAGMENT_FILE))?,
        };

        log::info!("Loaded shader sources from {:?}", dir);

        Ok(sources)
    }

    /// Needs a current GL context.
    pub fn build(&self) -> Result<Program, PBError> {
        ProgramBuilder::new(&self.vert, &self.frag)?.build()
    }
}

fn read_source(path: PathBuf) -> Result<String, ShaderSourceError> {
    std::fs::read_to_string(&path).map_err(|source| ShaderSourceError { path, source })
}

#[derive(Debug, Error)]
#[error("failed to load shader source file {path:?}: {source}")]
pub struct ShaderSourceError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
