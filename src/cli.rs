use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shaderpack", about = "Package a GLSL shader pair into a mod-ready XML document")]
pub struct Cli {
    /// Vertex shader source file (GLSL)
    pub vertex: Option<PathBuf>,

    /// Fragment shader source file (GLSL)
    pub fragment: Option<PathBuf>,

    /// Output XML document
    #[arg(short, long, default_value = "shaders.xml")]
    pub output: PathBuf,

    /// Shader name recorded in the document
    #[arg(short, long)]
    pub name: Option<String>,

    /// Shader parameter as NAME or NAME=TYPE (float, vec2, vec3, vec4); up to 7
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List supported parameter types and exit
    #[arg(long)]
    pub list_types: bool,
}
