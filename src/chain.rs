// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::util::{is_identifier, is_identifier_prefix};
use crate::{Error, ModDef, ParamValue, Result, TileDef, TileRole};

/// Naming conventions for a chain of tiles.
///
/// Wires are named `<bus_prefix><i>` and `<serial_prefix><i>` for `i` in
/// `0..=N`; instances are named `<instance_prefix><i>` for `i` in `0..N`.
/// The top-level ports reuse the tile's port names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    pub module_name: String,
    pub tile: TileDef,
    pub instance_prefix: String,
    pub bus_prefix: String,
    pub serial_prefix: String,
    /// Top-level parameter forwarded to every tile's boot image parameter.
    pub parameter_name: String,
    pub parameter_default: String,
}

impl ChainConfig {
    /// Name of bus wire `index`.
    pub fn bus_wire(&self, index: usize) -> String {
        format!("{}{}", self.bus_prefix, index)
    }

    /// Name of serial wire `index`.
    pub fn serial_wire(&self, index: usize) -> String {
        format!("{}{}", self.serial_prefix, index)
    }

    /// Name of tile instance `index`.
    pub fn instance_name(&self, index: usize) -> String {
        format!("{}{}", self.instance_prefix, index)
    }

    /// Returns the net that tile instance `index` connects to its `role` port.
    pub fn net_for(&self, role: TileRole, index: usize) -> String {
        match role {
            TileRole::Clock => self.tile.clock.clone(),
            TileRole::Reset => self.tile.reset.clone(),
            TileRole::SerialIn => self.serial_wire(index),
            TileRole::SerialOut => self.serial_wire(index + 1),
            TileRole::BusIn => self.bus_wire(index),
            TileRole::BusOut => self.bus_wire(index + 1),
        }
    }

    /// Checks that the naming conventions can produce distinct, legal names
    /// for any tile count.
    pub fn check(&self) -> Result<()> {
        for (what, name) in [
            ("module name", &self.module_name),
            ("parameter name", &self.parameter_name),
        ] {
            if !is_identifier(name) {
                return Err(Error::config(format!(
                    "{what} \"{name}\" is not a legal Verilog identifier"
                )));
            }
        }

        let prefixes = [
            ("instance prefix", &self.instance_prefix),
            ("bus prefix", &self.bus_prefix),
            ("serial prefix", &self.serial_prefix),
        ];

        for (what, prefix) in prefixes {
            if !is_identifier_prefix(prefix) {
                return Err(Error::config(format!(
                    "{what} \"{prefix}\" cannot start a Verilog identifier"
                )));
            }
        }

        for (i, (what_a, a)) in prefixes.iter().enumerate() {
            for (what_b, b) in &prefixes[i + 1..] {
                if indexed_names_overlap(a, b) {
                    return Err(Error::config(format!(
                        "{what_a} \"{a}\" and {what_b} \"{b}\" produce colliding names"
                    )));
                }
            }
        }

        Ok(())
    }
}

// "<a><i>" and "<b><j>" can only be equal if one prefix extends the other by
// a run of digits that could start an index. Indices have no leading zeros,
// so "g1" and "g10" never collide.
fn indexed_names_overlap(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    long.strip_prefix(short).is_some_and(|rest| {
        rest.is_empty() || (!rest.starts_with('0') && rest.chars().all(|c| c.is_ascii_digit()))
    })
}

/// Builds a module that chains `count` tiles together.
///
/// Tile `i` reads serial wire `i` and bus wire `i` and drives serial wire
/// `i + 1` and bus wire `i + 1`. Wire `0` of each family is assigned from the
/// matching top-level input and wire `count` drives the matching top-level
/// output, so with `count == 0` the inputs pass straight through to the
/// outputs. Every tile's boot image parameter is bound to the single
/// top-level parameter.
///
/// Returns `Error::InvalidConfiguration` if `count` is negative or the naming
/// conventions in `config` cannot produce a valid module. The returned module
/// always passes [`ModDef::validate`].
pub fn build_chain(count: i64, config: &ChainConfig) -> Result<ModDef> {
    let count = usize::try_from(count).map_err(|_| {
        Error::config(format!("tile count must be non-negative, got {count}"))
    })?;

    config.check()?;

    let tile = config.tile.to_mod_def().map_err(as_config_error)?;
    let mut top = ModDef::new(&config.module_name);
    populate(&mut top, &tile, count, config)
        .and_then(|()| top.validate())
        .map_err(as_config_error)?;

    Ok(top)
}

fn populate(
    top: &mut ModDef,
    tile_stub: &ModDef,
    count: usize,
    config: &ChainConfig,
) -> Result<()> {
    let tile = &config.tile;

    for role in TileRole::ALL {
        top.add_port(tile.port_name(role), tile.port_io(role))?;
    }
    top.add_parameter(
        &config.parameter_name,
        ParamValue::String(config.parameter_default.clone()),
    )?;

    for index in 0..=count {
        top.add_wire(config.bus_wire(index), tile.bus_width)?;
        top.add_wire(config.serial_wire(index), 1)?;
    }

    top.assign(config.bus_wire(0), &tile.bus_in);
    top.assign(&tile.bus_out, config.bus_wire(count));
    top.assign(config.serial_wire(0), &tile.serial_in);
    top.assign(&tile.serial_out, config.serial_wire(count));

    for index in 0..count {
        let inst = top.instantiate(tile_stub, config.instance_name(index))?;
        inst.set_parameter(
            &tile.parameter,
            ParamValue::Reference(config.parameter_name.clone()),
        )?;
        for role in TileRole::ALL {
            inst.connect(tile.port_name(role), config.net_for(role, index))?;
        }
        debug!(
            "{}.{}: {} -> {}",
            config.module_name,
            inst.name(),
            config.serial_wire(index),
            config.serial_wire(index + 1)
        );
    }

    Ok(())
}

fn as_config_error(err: Error) -> Error {
    match err {
        Error::DuplicateName { module, name } => {
            Error::config(format!("{name} is declared twice in module {module}"))
        }
        Error::InvalidNetlist(msg) => Error::InvalidConfiguration(msg),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::indexed_names_overlap;

    #[test]
    fn overlapping_prefixes() {
        assert!(indexed_names_overlap("gpio", "gpio"));
        assert!(indexed_names_overlap("g", "g1"));
        assert!(indexed_names_overlap("g12", "g"));
        assert!(!indexed_names_overlap("g", "gx"));
        assert!(!indexed_names_overlap("g1", "g10"));
        assert!(!indexed_names_overlap("g", "g01"));
        assert!(!indexed_names_overlap("gpio", "uart"));
    }
}
