// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, ModDef, Result};

/// Turns a module definition into a hardware description file.
pub trait NetlistEmitter {
    /// Renders `mod_def` as text.
    fn render(&self, mod_def: &ModDef) -> Result<String>;

    /// Writes rendered text to `path`. On failure no file is left at `path`
    /// unless one existed before.
    fn persist(&self, path: &Path, text: &str) -> Result<()> {
        persist_atomically(path, text)
    }
}

/// Emits Verilog via [`ModDef::emit`].
#[derive(Clone, Debug)]
pub struct VerilogEmitter {
    /// Validate each module before rendering it.
    pub validate: bool,
}

impl Default for VerilogEmitter {
    fn default() -> Self {
        VerilogEmitter { validate: true }
    }
}

impl NetlistEmitter for VerilogEmitter {
    fn render(&self, mod_def: &ModDef) -> Result<String> {
        mod_def.emit(self.validate)
    }
}

// The text goes to a temporary file in the destination directory, which is
// renamed into place. The temporary file is removed if anything fails.
fn persist_atomically(path: &Path, text: &str) -> Result<()> {
    let emission_error = |source: io::Error| Error::Emission {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(emission_error)?;
    file.write_all(text.as_bytes()).map_err(emission_error)?;
    file.persist(path).map_err(|err| emission_error(err.error))?;

    Ok(())
}
