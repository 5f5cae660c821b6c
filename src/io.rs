// SPDX-License-Identifier: Apache-2.0

/// Represents the direction (`Input` or `Output`) and bit width of a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IO {
    Input(usize),
    Output(usize),
}

impl IO {
    /// Returns the width of the port in bits.
    pub fn width(&self) -> usize {
        match self {
            IO::Input(width) => *width,
            IO::Output(width) => *width,
        }
    }
}
