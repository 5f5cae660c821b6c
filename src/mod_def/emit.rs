// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use xlsynth::vast::{Expr, LogicRef, VastFile, VastFileType, VastModule};

use crate::param_text::{fill_in_parameters, placeholder_name};
use crate::{Error, IO, ModDef, Result};

impl ModDef {
    /// Returns Verilog code for this module definition as a string. If
    /// `validate` is `true`, validate the module definition before emitting
    /// Verilog.
    ///
    /// The output is a deterministic function of the declarations: the header
    /// (parameters, then ports), then wires, then continuous assignments, then
    /// instances, each in declaration order.
    pub fn emit(&self, validate: bool) -> Result<String> {
        if validate {
            self.validate()?;
        }

        let mut file = VastFile::new(VastFileType::SystemVerilog);
        let mut module = file.add_module(&self.name);

        // Create nets for each module port and wire

        let mut nets: IndexMap<String, LogicRef> = IndexMap::new();

        for (port_name, io) in &self.ports {
            let logic_ref = match io {
                IO::Input(width) => {
                    module.add_input(port_name, &file.make_bit_vector_type(*width as i64, false))
                }
                IO::Output(width) => {
                    module.add_output(port_name, &file.make_bit_vector_type(*width as i64, false))
                }
            };
            nets.insert(port_name.clone(), logic_ref);
        }

        for (wire_name, width) in &self.wires {
            let logic_ref =
                module.add_wire(wire_name, &file.make_bit_vector_type(*width as i64, false));
            nets.insert(wire_name.clone(), logic_ref);
        }

        for assignment in &self.assignments {
            let lhs = self.net_expr(&nets, &assignment.lhs)?;
            let rhs = self.net_expr(&nets, &assignment.rhs)?;
            let assignment = file.make_continuous_assignment(&lhs, &rhs);
            module.add_member_continuous_assignment(assignment);
        }

        // Create module instances

        let mut values: IndexMap<String, LogicRef> = IndexMap::new();

        for inst in self.instances.values() {
            let mut parameter_port_names = Vec::new();
            let mut parameter_expressions = Vec::new();

            for (param_name, value) in &inst.parameters {
                parameter_port_names.push(param_name.as_str());
                parameter_expressions.push(placeholder_expr(
                    value.to_string(),
                    &mut file,
                    &mut module,
                    &mut values,
                ));
            }

            let mut connection_port_names = Vec::new();
            let mut connection_expressions = Vec::new();

            for port_name in inst.ports.keys() {
                connection_port_names.push(port_name.as_str());
                // Unconnected ports are left empty.
                connection_expressions.push(match inst.get_connection(port_name) {
                    Some(net) => Some(self.net_expr(&nets, net)?),
                    None => None,
                });
            }

            let instantiation = file.make_instantiation(
                &inst.mod_def_name,
                &inst.name,
                &parameter_port_names,
                &parameter_expressions.iter().collect::<Vec<&Expr>>(),
                &connection_port_names,
                &connection_expressions
                    .iter()
                    .map(|o| o.as_ref())
                    .collect::<Vec<_>>(),
            );
            module.add_member_instantiation(instantiation);
        }

        let values: Vec<String> = values.into_keys().collect();
        Ok(fill_in_parameters(
            file.emit(),
            &self.name,
            &self.parameters,
            &values,
        ))
    }

    fn net_expr(&self, nets: &IndexMap<String, LogicRef>, name: &str) -> Result<Expr> {
        nets.get(name).map(LogicRef::to_expr).ok_or_else(|| {
            Error::InvalidNetlist(format!("Net {}.{name} is not declared", self.name))
        })
    }
}

// Parameter values are not expressible in VAST; each distinct value gets a
// placeholder wire that `fill_in_parameters` swaps back out.
fn placeholder_expr(
    value: String,
    file: &mut VastFile,
    module: &mut VastModule,
    values: &mut IndexMap<String, LogicRef>,
) -> Expr {
    let index = values.get_index_of(&value).unwrap_or(values.len());
    values
        .entry(value)
        .or_insert_with(|| {
            module.add_wire(&placeholder_name(index), &file.make_bit_vector_type(1, false))
        })
        .to_expr()
}
