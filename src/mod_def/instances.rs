// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{Error, IO, ModDef, ParamValue, Result};

/// Represents an instance of a module definition, like
/// `<mod_def_name> #(...) <mod_inst_name> ( ... );` in Verilog.
///
/// An instance only records the interface of the module it places (its ports
/// and overridable parameters), so the instantiated module can be an opaque
/// stub.
#[derive(Clone, Debug)]
pub struct ModInst {
    pub(crate) name: String,
    pub(crate) mod_def_name: String,
    pub(crate) ports: IndexMap<String, IO>,
    pub(crate) overridable: Vec<String>,
    pub(crate) parameters: IndexMap<String, ParamValue>,
    pub(crate) connections: IndexMap<String, String>,
}

impl ModInst {
    /// Returns the name of this instance.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the module definition being instantiated.
    pub fn get_mod_def_name(&self) -> &str {
        &self.mod_def_name
    }

    /// Overrides a parameter of the instantiated module.
    pub fn set_parameter(&mut self, name: impl AsRef<str>, value: ParamValue) -> Result<()> {
        let name = name.as_ref();
        if !self.overridable.iter().any(|p| p == name) {
            return Err(Error::InvalidNetlist(format!(
                "Parameter {}.{} does not exist",
                self.mod_def_name, name
            )));
        }
        match self.parameters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateName {
                module: self.name.clone(),
                name: name.to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Returns all parameter overrides, in the order they were set.
    pub fn get_parameters(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Connects a port of this instance to a net (port or wire) of the
    /// enclosing module. Each port can be connected once.
    pub fn connect(&mut self, port_name: impl AsRef<str>, net: impl AsRef<str>) -> Result<()> {
        let port_name = port_name.as_ref();
        if !self.ports.contains_key(port_name) {
            return Err(Error::InvalidNetlist(format!(
                "Port {}.{} does not exist",
                self.name, port_name
            )));
        }
        match self.connections.entry(port_name.to_string()) {
            Entry::Occupied(entry) => Err(Error::InvalidNetlist(format!(
                "Port {}.{} is already connected to {}",
                self.name,
                port_name,
                entry.get()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(net.as_ref().to_string());
                Ok(())
            }
        }
    }

    /// Returns the net connected to the given port, if any.
    pub fn get_connection(&self, port_name: impl AsRef<str>) -> Option<&str> {
        self.connections.get(port_name.as_ref()).map(String::as_str)
    }
}

impl ModDef {
    /// Returns all module instances within this module definition.
    pub fn get_instances(&self) -> impl Iterator<Item = &ModInst> {
        self.instances.values()
    }

    /// Returns the module instance within this module definition with the
    /// given name.
    pub fn get_instance(&self, name: impl AsRef<str>) -> Option<&ModInst> {
        self.instances.get(name.as_ref())
    }

    /// Instantiates `moddef` under the instance name `name` and returns the
    /// new instance so that its parameters and ports can be bound. Only the
    /// ports and parameters of `moddef` are recorded; its body is never
    /// emitted.
    pub fn instantiate(
        &mut self,
        moddef: &ModDef,
        name: impl AsRef<str>,
    ) -> Result<&mut ModInst> {
        let name = name.as_ref().to_string();
        self.check_undeclared(&name)?;

        let inst = ModInst {
            name: name.clone(),
            mod_def_name: moddef.name.clone(),
            ports: moddef.ports.clone(),
            overridable: moddef.parameters.keys().cloned().collect(),
            parameters: IndexMap::new(),
            connections: IndexMap::new(),
        };

        Ok(self.instances.entry(name).or_insert(inst))
    }
}
