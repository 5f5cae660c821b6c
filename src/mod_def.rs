// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::{Error, IO, Result};

mod assign;
pub use assign::Assignment;

mod emit;
mod instances;
pub use instances::ModInst;

mod params;
pub use params::ParamValue;

mod ports;
mod validate;
mod wires;

/// Represents a module definition, like `module <mod_def_name> ... endmodule`
/// in Verilog.
///
/// Ports, parameters, wires and instances share a single namespace, and all
/// declarations keep their insertion order, which is the order in which they
/// are emitted.
#[derive(Clone, Debug)]
pub struct ModDef {
    pub(crate) name: String,
    pub(crate) ports: IndexMap<String, IO>,
    pub(crate) parameters: IndexMap<String, ParamValue>,
    pub(crate) wires: IndexMap<String, usize>,
    pub(crate) instances: IndexMap<String, ModInst>,
    pub(crate) assignments: Vec<Assignment>,
}

impl ModDef {
    /// Creates a new, empty module definition with the given name.
    pub fn new(name: impl AsRef<str>) -> ModDef {
        ModDef {
            name: name.as_ref().to_string(),
            ports: IndexMap::new(),
            parameters: IndexMap::new(),
            wires: IndexMap::new(),
            instances: IndexMap::new(),
            assignments: Vec::new(),
        }
    }

    /// Returns the name of this module definition.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `name` is already used by a port, parameter, wire or
    /// instance of this module.
    pub fn is_declared(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.ports.contains_key(name)
            || self.parameters.contains_key(name)
            || self.wires.contains_key(name)
            || self.instances.contains_key(name)
    }

    pub(crate) fn check_undeclared(&self, name: &str) -> Result<()> {
        if self.is_declared(name) {
            Err(Error::DuplicateName {
                module: self.name.clone(),
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_width(&self, name: &str, width: usize) -> Result<()> {
        if width == 0 {
            Err(Error::InvalidNetlist(format!(
                "{}.{name} must be at least one bit wide",
                self.name
            )))
        } else {
            Ok(())
        }
    }

    /// Returns the width of the port or wire called `name`, if there is one.
    pub fn net_width(&self, name: impl AsRef<str>) -> Option<usize> {
        let name = name.as_ref();
        self.ports
            .get(name)
            .map(IO::width)
            .or_else(|| self.wires.get(name).copied())
    }
}
