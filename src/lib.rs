// SPDX-License-Identifier: Apache-2.0

//! Generate structural Verilog for a linear chain of identical tiles.
//!
//! A chain of `N` tiles is described by a [`ModDef`] built by [`build_chain`]
//! from a [`ChainConfig`]. The [`Variant`] presets produce the
//! `veerwolf_array` and `veerwolf_pack` top levels; [`generate`] ties the
//! builder, a [`NetlistEmitter`] and a [`BuildRegistry`] together.

mod chain;
mod driver;
mod emitter;
mod error;
mod fusesoc;
mod io;
mod mod_def;
mod param_text;
mod tile;
mod util;
mod variant;

pub use chain::{ChainConfig, build_chain};
pub use driver::{GenerateRequest, generate, override_parameters, tile_count};
pub use emitter::{NetlistEmitter, VerilogEmitter};
pub use error::{Error, Result};
pub use fusesoc::{BuildRegistry, FileType, GeneratedFile, Generator, GeneratorInput};
pub use io::IO;
pub use mod_def::{Assignment, ModDef, ModInst, ParamValue};
pub use tile::{TileDef, TileRole};
pub use variant::{DEFAULT_BOOTROM, Variant};
