// SPDX-License-Identifier: Apache-2.0

use crate::{ModDef, Result};

impl ModDef {
    /// Declares an internal wire of the given (nonzero) width.
    pub fn add_wire(&mut self, name: impl AsRef<str>, width: usize) -> Result<()> {
        self.check_undeclared(name.as_ref())?;
        self.check_width(name.as_ref(), width)?;
        self.wires.insert(name.as_ref().to_string(), width);
        Ok(())
    }

    /// Returns all wires with the given prefix, in declaration order. If
    /// `prefix` is `None`, returns all wires.
    pub fn get_wires(&self, prefix: Option<&str>) -> Vec<(&str, usize)> {
        self.wires
            .iter()
            .filter(|(name, _)| prefix.is_none_or(|pfx| name.starts_with(pfx)))
            .map(|(name, width)| (name.as_str(), *width))
            .collect()
    }
}
