// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::util::is_identifier;
use crate::{Error, IO, ModDef, ParamValue, Result};

impl ModDef {
    /// Validates this module definition; returns `Error::InvalidNetlist`
    /// describing the first problem found.
    ///
    /// Validation checks that every name is a legal Verilog identifier, that
    /// parameter references resolve, that every net referenced by an
    /// assignment or instance connection is declared with a matching width,
    /// that every instance port is connected, and that each wire and each
    /// output port is driven exactly once.
    pub fn validate(&self) -> Result<()> {
        self.check_names()?;
        self.check_parameters()?;

        let mut drivers: IndexMap<&str, usize> = self
            .wires
            .keys()
            .map(|name| (name.as_str(), 0))
            .chain(
                self.ports
                    .iter()
                    .filter(|(_, io)| matches!(io, IO::Output(_)))
                    .map(|(name, _)| (name.as_str(), 0)),
            )
            .collect();

        for assignment in &self.assignments {
            let lhs_width = self.declared_width(&assignment.lhs, "assignment")?;
            let rhs_width = self.declared_width(&assignment.rhs, "assignment")?;
            if lhs_width != rhs_width {
                return Err(invalid(format!(
                    "Width mismatch in {}: assign {} ({} bits) = {} ({} bits)",
                    self.name, assignment.lhs, lhs_width, assignment.rhs, rhs_width
                )));
            }
            match drivers.get_mut(assignment.lhs.as_str()) {
                Some(count) => *count += 1,
                None => {
                    return Err(invalid(format!(
                        "Cannot assign to input port {}.{}",
                        self.name, assignment.lhs
                    )));
                }
            }
        }

        for inst in self.instances.values() {
            for (port_name, io) in &inst.ports {
                let path = format!("{}.{}.{}", self.name, inst.name, port_name);
                let Some(net) = inst.get_connection(port_name) else {
                    return Err(invalid(format!("{path} is unconnected")));
                };
                let width = self.declared_width(net, &path)?;
                if width != io.width() {
                    return Err(invalid(format!(
                        "Width mismatch: {path} ({} bits) is connected to {net} ({width} bits)",
                        io.width()
                    )));
                }
                if let IO::Output(_) = io {
                    match drivers.get_mut(net) {
                        Some(count) => *count += 1,
                        None => {
                            return Err(invalid(format!(
                                "{path} drives input port {}.{net}",
                                self.name
                            )));
                        }
                    }
                }
            }
        }

        for (net, count) in drivers {
            match count {
                1 => {}
                0 => return Err(invalid(format!("{}.{net} is undriven", self.name))),
                _ => {
                    return Err(invalid(format!(
                        "{}.{net} is driven {count} times",
                        self.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn check_names(&self) -> Result<()> {
        let mut names = vec![self.name.as_str()];
        names.extend(self.ports.keys().map(String::as_str));
        names.extend(self.parameters.keys().map(String::as_str));
        names.extend(self.wires.keys().map(String::as_str));
        for inst in self.instances.values() {
            names.push(&inst.name);
            names.push(&inst.mod_def_name);
            names.extend(inst.ports.keys().map(String::as_str));
            names.extend(inst.parameters.keys().map(String::as_str));
        }

        match names.into_iter().find(|name| !is_identifier(name)) {
            Some(name) => Err(invalid(format!(
                "\"{name}\" in module {} is not a legal Verilog identifier",
                self.name
            ))),
            None => Ok(()),
        }
    }

    fn check_parameters(&self) -> Result<()> {
        let values = self.parameters.values().chain(
            self.instances
                .values()
                .flat_map(|inst| inst.parameters.values()),
        );
        for value in values {
            match value {
                ParamValue::String(s) if s.contains(['"', '\\', '\n', '\r']) => {
                    return Err(invalid(format!(
                        "String parameter value {s:?} in module {} cannot be emitted",
                        self.name
                    )));
                }
                ParamValue::Reference(name) if !self.parameters.contains_key(name) => {
                    return Err(invalid(format!(
                        "Parameter {}.{name} does not exist",
                        self.name
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn declared_width(&self, net: &str, context: &str) -> Result<usize> {
        self.net_width(net).ok_or_else(|| {
            invalid(format!(
                "Net {}.{net} used in {context} is not declared",
                self.name
            ))
        })
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidNetlist(msg)
}
