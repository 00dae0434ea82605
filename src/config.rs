use serde::Deserialize;
use std::path::PathBuf;

use crate::params::types::Parameter;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shader: ShaderConfig,
    #[serde(default)]
    pub param: Vec<Parameter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShaderConfig {
    /// Default shader name, used when --name is not given.
    #[serde(default)]
    pub name: Option<String>,
    /// Default output path, used when --output is at its default.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

pub fn load_config(path: &PathBuf) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}
