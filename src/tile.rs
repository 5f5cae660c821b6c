// SPDX-License-Identifier: Apache-2.0

use crate::{IO, ModDef, ParamValue, Result};

/// The function a tile port plays in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileRole {
    Clock,
    Reset,
    SerialIn,
    SerialOut,
    BusIn,
    BusOut,
}

impl TileRole {
    /// All roles, in port declaration order.
    pub const ALL: [TileRole; 6] = [
        TileRole::Clock,
        TileRole::Reset,
        TileRole::SerialIn,
        TileRole::SerialOut,
        TileRole::BusIn,
        TileRole::BusOut,
    ];
}

/// The externally visible interface of the tile module. The tile itself is
/// defined elsewhere; only its name, port names, widths and boot image
/// parameter are needed to instantiate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDef {
    pub name: String,
    /// Parameter selecting the boot image loaded into the tile.
    pub parameter: String,
    pub clock: String,
    pub reset: String,
    pub serial_in: String,
    pub serial_out: String,
    pub bus_in: String,
    pub bus_out: String,
    pub bus_width: usize,
}

impl TileDef {
    /// The `veerwolf_tile` SoC tile: a UART daisy chain and a 16-bit GPIO
    /// chain from switches to LEDs.
    pub fn veerwolf() -> Self {
        TileDef {
            name: "veerwolf_tile".to_string(),
            parameter: "bootrom_file".to_string(),
            clock: "clk_core".to_string(),
            reset: "rst_core".to_string(),
            serial_in: "i_uart_rx".to_string(),
            serial_out: "o_uart_tx".to_string(),
            bus_in: "i_sw".to_string(),
            bus_out: "o_led".to_string(),
            bus_width: 16,
        }
    }

    /// Returns the name of the port playing `role`.
    pub fn port_name(&self, role: TileRole) -> &str {
        match role {
            TileRole::Clock => &self.clock,
            TileRole::Reset => &self.reset,
            TileRole::SerialIn => &self.serial_in,
            TileRole::SerialOut => &self.serial_out,
            TileRole::BusIn => &self.bus_in,
            TileRole::BusOut => &self.bus_out,
        }
    }

    /// Returns the direction and width of the port playing `role`.
    pub fn port_io(&self, role: TileRole) -> IO {
        match role {
            TileRole::Clock | TileRole::Reset | TileRole::SerialIn => IO::Input(1),
            TileRole::SerialOut => IO::Output(1),
            TileRole::BusIn => IO::Input(self.bus_width),
            TileRole::BusOut => IO::Output(self.bus_width),
        }
    }

    /// Returns a stub module definition carrying only the tile's ports and
    /// boot image parameter, suitable for [`ModDef::instantiate`].
    pub fn to_mod_def(&self) -> Result<ModDef> {
        let mut stub = ModDef::new(&self.name);
        stub.add_parameter(&self.parameter, ParamValue::String(String::new()))?;
        for role in TileRole::ALL {
            stub.add_port(self.port_name(role), self.port_io(role))?;
        }
        Ok(stub)
    }
}
