// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use clap::ValueEnum;

use crate::{ChainConfig, TileDef};

/// Boot image loaded into every tile unless overridden.
pub const DEFAULT_BOOTROM: &str = "bootloader.vh";

/// The two top-level flavors of the tile chain. They share one topology and
/// differ only in names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    Array,
    Pack,
}

impl Variant {
    /// The short name used in every generated identifier, e.g. `array`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Array => "array",
            Variant::Pack => "pack",
        }
    }

    /// Name of the generated top-level module.
    pub fn module_name(&self) -> String {
        format!("veerwolf_{}", self.as_str())
    }

    /// Name of the generated Verilog file.
    pub fn file_name(&self) -> String {
        format!("{}.v", self.module_name())
    }

    /// Returns the chain configuration for this variant. `bootrom` overrides
    /// the default boot image file.
    pub fn chain_config(&self, bootrom: Option<&str>) -> ChainConfig {
        ChainConfig {
            module_name: self.module_name(),
            tile: TileDef::veerwolf(),
            instance_prefix: "tile".to_string(),
            bus_prefix: "gpio".to_string(),
            serial_prefix: "uart".to_string(),
            parameter_name: format!("{}_code", self.as_str()),
            parameter_default: bootrom.unwrap_or(DEFAULT_BOOTROM).to_string(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
