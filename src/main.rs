mod cli;
mod config;
mod document;
mod params;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use document::builder::ShaderDefinition;
use params::registry::ParameterRegistry;
use params::types::{ParamType, Parameter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect shaderpack.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let local = std::path::PathBuf::from("shaderpack.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("shaderpack").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("shaderpack").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });
    let mut config_params: Vec<Parameter> = Vec::new();
    if let Some(ref path) = config_path {
        if let Some(cfg) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            // Merge: config values apply only when CLI is at its default
            if cli.name.is_none() {
                cli.name = cfg.shader.name;
            }
            if cli.output.as_os_str() == "shaders.xml" {
                if let Some(output) = cfg.shader.output {
                    cli.output = output;
                }
            }
            config_params = cfg.param;
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    // List types mode
    if cli.list_types {
        println!("Supported parameter types:");
        for ty in ParamType::ALL {
            println!("  {}", ty);
        }
        return Ok(());
    }

    log::info!("shaderpack - GLSL shader pair to XML converter");

    // Parameters: -p flags win over config [[param]] tables
    let requested: Vec<Parameter> = if cli.params.is_empty() {
        config_params
    } else {
        cli.params
            .iter()
            .map(|spec| parse_param(spec))
            .collect::<Result<_>>()?
    };

    // Every parameter goes through the registry so the slot cap and name
    // validation apply no matter where it came from.
    let mut registry = ParameterRegistry::new();
    for param in &requested {
        let slot = registry.count();
        registry
            .add()
            .with_context(|| format!("Cannot add parameter '{}'", param.name))?;
        registry.update(slot, &param.name, param.ty)?;
    }

    let def = match ShaderDefinition::load(
        cli.name.as_deref(),
        cli.vertex.as_deref(),
        cli.fragment.as_deref(),
        registry.list(),
    )? {
        Some(def) => def,
        None => {
            log::warn!("No shader name supplied; conversion abandoned");
            return Ok(());
        }
    };

    log::info!("Shader: {}", def.name);
    log::info!("Parameters: {}", def.parameters.len());

    def.write_to(&cli.output)?;

    log::info!("Successfully converted shader to XML: {}", cli.output.display());
    Ok(())
}

/// Parse a `-p NAME=TYPE` argument; a bare `NAME` defaults to float.
fn parse_param(spec: &str) -> Result<Parameter> {
    let mut parts = spec.splitn(2, '=');
    let name = parts.next().unwrap_or("").trim();
    if name.is_empty() {
        anyhow::bail!("Parameter spec '{}' has no name", spec);
    }
    let ty = match parts.next() {
        Some(raw) => raw
            .trim()
            .parse::<ParamType>()
            .with_context(|| format!("Invalid parameter spec '{}'", spec))?,
        None => ParamType::Float,
    };
    Ok(Parameter {
        name: name.to_string(),
        ty,
    })
}
