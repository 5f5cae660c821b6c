// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{ModDef, Result};

/// The value of a module parameter default or an instance parameter
/// override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A string literal, emitted in double quotes. It may not contain quotes,
    /// backslashes or line breaks.
    String(String),
    /// The name of a parameter of the enclosing module.
    Reference(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(value) => write!(f, "\"{value}\""),
            ParamValue::Reference(name) => write!(f, "{name}"),
        }
    }
}

impl ModDef {
    /// Declares a module-scoped parameter with a default value.
    pub fn add_parameter(&mut self, name: impl AsRef<str>, default: ParamValue) -> Result<()> {
        self.check_undeclared(name.as_ref())?;
        self.parameters.insert(name.as_ref().to_string(), default);
        Ok(())
    }

    /// Returns all parameters with their defaults, in declaration order.
    pub fn get_parameters(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
