use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::render;
use crate::params::types::Parameter;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no vertex shader selected")]
    MissingVertexShader,
    #[error("no fragment shader selected")]
    MissingFragmentShader,
    #[error("vertex shader file does not exist: {}", .0.display())]
    VertexFileNotFound(PathBuf),
    #[error("fragment shader file does not exist: {}", .0.display())]
    FragmentFileNotFound(PathBuf),
    #[error("failed to read shader source {}: {source}", .path.display())]
    ShaderReadFailed { path: PathBuf, source: io::Error },
    #[error("failed to write shader document {}: {source}", .path.display())]
    DocumentWriteFailed { path: PathBuf, source: io::Error },
}

/// Everything needed to emit one shader document, captured at conversion
/// time: the shader name, both source blobs and a parameter snapshot.
#[derive(Debug)]
pub struct ShaderDefinition {
    pub name: String,
    pub vertex_source: String,
    pub fragment_source: String,
    pub parameters: Vec<Parameter>,
}

impl ShaderDefinition {
    /// Validate the conversion inputs and load both shader sources.
    ///
    /// Checks run in a fixed order and the first failure wins: vertex path
    /// supplied, fragment path supplied, vertex file exists, fragment file
    /// exists. Returns `Ok(None)` when no shader name was supplied: the user
    /// backed out of the conversion, which is not an error.
    pub fn load(
        name: Option<&str>,
        vertex: Option<&Path>,
        fragment: Option<&Path>,
        parameters: Vec<Parameter>,
    ) -> Result<Option<Self>, BuildError> {
        let vertex = vertex.ok_or(BuildError::MissingVertexShader)?;
        let fragment = fragment.ok_or(BuildError::MissingFragmentShader)?;
        if !vertex.exists() {
            return Err(BuildError::VertexFileNotFound(vertex.to_path_buf()));
        }
        if !fragment.exists() {
            return Err(BuildError::FragmentFileNotFound(fragment.to_path_buf()));
        }

        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Ok(None),
        };

        let vertex_source = read_source(vertex)?;
        let fragment_source = read_source(fragment)?;

        Ok(Some(ShaderDefinition {
            name,
            vertex_source,
            fragment_source,
            parameters,
        }))
    }

    /// Serialize the definition to XML document text.
    pub fn to_xml(&self) -> String {
        render::to_xml(self)
    }

    /// Render the document and write it to `dest` in one shot, fully
    /// overwriting an existing file. The destination is only touched after
    /// both sources have been read.
    pub fn write_to(&self, dest: &Path) -> Result<(), BuildError> {
        let xml = self.to_xml();
        std::fs::write(dest, xml).map_err(|source| BuildError::DocumentWriteFailed {
            path: dest.to_path_buf(),
            source,
        })
    }
}

fn read_source(path: &Path) -> Result<String, BuildError> {
    std::fs::read_to_string(path).map_err(|source| BuildError::ShaderReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
