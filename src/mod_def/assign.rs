// SPDX-License-Identifier: Apache-2.0

use crate::ModDef;

/// A continuous assignment, `assign <lhs> = <rhs>;`, between two nets of the
/// same module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub(crate) lhs: String,
    pub(crate) rhs: String,
}

impl Assignment {
    /// The net being driven.
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// The net driving `lhs`.
    pub fn rhs(&self) -> &str {
        &self.rhs
    }
}

impl ModDef {
    /// Adds `assign <lhs> = <rhs>;` to this module. Both sides must name ports
    /// or wires; this is checked by [`ModDef::validate`].
    pub fn assign(&mut self, lhs: impl AsRef<str>, rhs: impl AsRef<str>) {
        self.assignments.push(Assignment {
            lhs: lhs.as_ref().to_string(),
            rhs: rhs.as_ref().to_string(),
        });
    }

    /// Returns the continuous assignments of this module, in order.
    pub fn get_assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}
