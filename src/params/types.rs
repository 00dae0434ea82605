use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Value types a shader parameter can take on the scripting side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl ParamType {
    pub const ALL: [ParamType; 4] = [
        ParamType::Float,
        ParamType::Vec2,
        ParamType::Vec3,
        ParamType::Vec4,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::Float => "float",
            ParamType::Vec2 => "vec2",
            ParamType::Vec3 => "vec3",
            ParamType::Vec4 => "vec4",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown parameter type '{0}' (expected float, vec2, vec3 or vec4)")]
pub struct UnknownParamType(String);

impl FromStr for ParamType {
    type Err = UnknownParamType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(ParamType::Float),
            "vec2" => Ok(ParamType::Vec2),
            "vec3" => Ok(ParamType::Vec3),
            "vec4" => Ok(ParamType::Vec4),
            other => Err(UnknownParamType(other.to_string())),
        }
    }
}

/// A single shader parameter: a display name plus its value type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: ParamType,
}
