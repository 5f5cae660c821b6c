// SPDX-License-Identifier: Apache-2.0

// TODO: Replace with VAST API calls once VAST can declare module parameters
// and build string-valued parameter expressions.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::ParamValue;

/// Instance parameter values are handed to VAST as references to 1-bit
/// placeholder wires whose names start with this marker.
pub const PARAM_VALUE_MARKER: &str = "__PARAM_VALUE_";

/// Name of the placeholder wire standing for the `index`th distinct value.
pub fn placeholder_name(index: usize) -> String {
    format!("{PARAM_VALUE_MARKER}{index}__")
}

/// Rewrites VAST output for module `module_name`: the header gains a
/// parameter list, placeholder wire declarations are dropped, and every
/// placeholder reference is replaced by `values[index]`.
pub fn fill_in_parameters(
    text: String,
    module_name: &str,
    parameters: &IndexMap<String, ParamValue>,
    values: &[String],
) -> String {
    let open_header = format!("module {module_name}(");
    let closed_header = format!("module {module_name};");

    let mut lines = Vec::new();
    for line in text.split('\n') {
        if line.contains(PARAM_VALUE_MARKER) {
            if line.trim_start().starts_with("wire ") {
                continue;
            }
            let mut line = line.to_string();
            for (index, value) in values.iter().enumerate() {
                line = line.replace(&placeholder_name(index), value);
            }
            lines.push(line);
        } else if !parameters.is_empty() && (line == open_header || line == closed_header) {
            let list = parameters
                .iter()
                .map(|(name, value)| format!("  parameter {name} = {value}"))
                .join(",\n");
            let close = if line == open_header { ") (" } else { ");" };
            lines.push(format!("module {module_name} #(\n{list}\n{close}"));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}
