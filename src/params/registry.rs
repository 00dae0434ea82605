use thiserror::Error;

use super::types::{ParamType, Parameter};

/// Hard cap on shader parameters, matching the uniform slots the game
/// exposes to mod scripts.
pub const MAX_PARAMS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("parameter list is full ({MAX_PARAMS} max)")]
    CapacityExceeded,
    #[error("no parameter at index {0}")]
    IndexOutOfRange(usize),
    #[error("parameter name cannot be empty")]
    EmptyName,
}

/// Ordered, bounded list of shader parameters.
///
/// Positions are not stable identifiers: removing a parameter shifts every
/// later parameter down one slot. Callers that display the list rebuild
/// their view after any mutation. The registry is owned by a single thread
/// of control; every add, remove and edit goes through it.
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    params: Vec<Parameter>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter named after its 1-based position, typed `float`.
    pub fn add(&mut self) -> Result<&Parameter, RegistryError> {
        if self.params.len() == MAX_PARAMS {
            return Err(RegistryError::CapacityExceeded);
        }
        let slot = self.params.len();
        self.params.push(Parameter {
            name: format!("Parameter {}", slot + 1),
            ty: ParamType::Float,
        });
        Ok(&self.params[slot])
    }

    /// Remove the parameter at `index`, shifting later parameters down.
    #[allow(dead_code)]
    pub fn remove(&mut self, index: usize) -> Result<(), RegistryError> {
        if index >= self.params.len() {
            return Err(RegistryError::IndexOutOfRange(index));
        }
        self.params.remove(index);
        Ok(())
    }

    /// Validate and commit a name/type edit for the parameter at `index`.
    pub fn update(&mut self, index: usize, name: &str, ty: ParamType) -> Result<(), RegistryError> {
        let param = self
            .params
            .get_mut(index)
            .ok_or(RegistryError::IndexOutOfRange(index))?;
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        param.name = name.to_string();
        param.ty = ty;
        Ok(())
    }

    /// Snapshot of the current parameters in order, unaffected by later
    /// mutations.
    pub fn list(&self) -> Vec<Parameter> {
        self.params.clone()
    }

    pub fn count(&self) -> usize {
        self.params.len()
    }

    /// True once the cap is reached; callers disable their add control.
    #[allow(dead_code)]
    pub fn is_full(&self) -> bool {
        self.params.len() == MAX_PARAMS
    }
}
