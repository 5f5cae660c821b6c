// SPDX-License-Identifier: Apache-2.0

use crate::{IO, ModDef, Result};

impl ModDef {
    /// Adds a port to the module definition with the given name. The direction
    /// and width are specified via the `io` parameter; the width must be
    /// nonzero.
    pub fn add_port(&mut self, name: impl AsRef<str>, io: IO) -> Result<()> {
        self.check_undeclared(name.as_ref())?;
        self.check_width(name.as_ref(), io.width())?;
        self.ports.insert(name.as_ref().to_string(), io);
        Ok(())
    }

    /// Returns all ports on this module definition with the given prefix, in
    /// declaration order. If `prefix` is `None`, returns all ports.
    pub fn get_ports(&self, prefix: Option<&str>) -> Vec<(&str, IO)> {
        self.ports
            .iter()
            .filter(|(name, _)| prefix.is_none_or(|pfx| name.starts_with(pfx)))
            .map(|(name, io)| (name.as_str(), *io))
            .collect()
    }
}
