// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").unwrap());

// Verilog-2005 reserved words that could plausibly appear as a net or
// instance name.
const RESERVED: &[&str] = &[
    "always", "and", "assign", "begin", "buf", "case", "default", "else", "end", "endcase",
    "endfunction", "endmodule", "for", "function", "generate", "genvar", "if", "initial",
    "inout", "input", "integer", "localparam", "module", "nand", "nor", "not", "or", "output",
    "parameter", "reg", "signed", "supply0", "supply1", "task", "tri", "wire", "xor",
];

/// Returns `true` if `name` can be used verbatim as a Verilog identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !RESERVED.contains(&name)
}

/// Returns `true` if `fragment` can start an identifier once an index is
/// appended to it.
pub(crate) fn is_identifier_prefix(fragment: &str) -> bool {
    is_identifier(&format!("{fragment}0"))
}
