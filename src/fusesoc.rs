// SPDX-License-Identifier: Apache-2.0

//! The FuseSoC generator handshake.
//!
//! FuseSoC runs a generator with a single argument: a YAML file carrying the
//! generator `parameters`, the root of the calling core (`files_root`) and the
//! VLNV to give the generated core. The generator writes its sources into the
//! working directory, followed by a `CAPI=2` core description listing them.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

/// Fileset that generated sources are added to.
const FILESET: &str = "rtl";
/// Target that includes the generated fileset.
const TARGET: &str = "default";

/// How a build system should treat a generated file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FileType {
    #[serde(rename = "verilogSource")]
    VerilogSource,
}

/// A file registered with a [`BuildRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub file_type: FileType,
}

/// Receives the files a generator produces so that the surrounding build
/// system can pick them up.
pub trait BuildRegistry {
    fn register_generated_file(&mut self, name: &str, file_type: FileType) -> Result<()>;
}

impl BuildRegistry for Vec<GeneratedFile> {
    fn register_generated_file(&mut self, name: &str, file_type: FileType) -> Result<()> {
        self.push(GeneratedFile {
            name: name.to_string(),
            file_type,
        });
        Ok(())
    }
}

/// Contents of the YAML file FuseSoC passes to a generator.
#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorInput {
    /// Version of the generator API, e.g. `"1.0"`.
    #[serde(default)]
    pub gapi: Option<String>,
    #[serde(default)]
    pub files_root: Option<PathBuf>,
    #[serde(default)]
    pub parameters: Mapping,
    pub vlnv: String,
}

impl GeneratorInput {
    /// Reads the generator input from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::config(format!("cannot read generator input {path:?}: {err}"))
        })?;
        Self::parse(&text)
    }

    /// Parses generator input from YAML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Returns the generator parameter called `name`.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(&Value::String(name.to_string()))
    }

    /// Returns the file name of the core description to write: the name
    /// field of the VLNV with a `.core` extension.
    pub fn core_file_name(&self) -> Result<String> {
        match self.vlnv.split(':').nth(2) {
            Some(name) if !name.is_empty() => Ok(format!("{name}.core")),
            _ => Err(Error::config(format!(
                "VLNV \"{}\" has no name field",
                self.vlnv
            ))),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct Fileset {
    files: Vec<IndexMap<String, FileAttributes>>,
}

#[derive(Debug, Serialize)]
struct FileAttributes {
    file_type: FileType,
}

#[derive(Debug, Default, Serialize)]
struct Target {
    filesets: Vec<String>,
}

#[derive(Serialize)]
struct CoreDescription<'a> {
    name: &'a str,
    filesets: &'a IndexMap<String, Fileset>,
    parameters: Mapping,
    targets: &'a IndexMap<String, Target>,
}

/// A FuseSoC generator run: collects registered files and writes the core
/// description that exposes them.
#[derive(Debug)]
pub struct Generator {
    input: GeneratorInput,
    filesets: IndexMap<String, Fileset>,
    targets: IndexMap<String, Target>,
}

impl Generator {
    pub fn new(input: GeneratorInput) -> Self {
        Generator {
            input,
            filesets: IndexMap::new(),
            targets: IndexMap::new(),
        }
    }

    /// Renders the core description.
    pub fn core_description(&self) -> Result<String> {
        let description = CoreDescription {
            name: &self.input.vlnv,
            filesets: &self.filesets,
            parameters: Mapping::new(),
            targets: &self.targets,
        };
        let yaml = serde_yaml::to_string(&description)?;
        let yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml);
        Ok(format!("CAPI=2:\n{yaml}"))
    }

    /// Writes the core description into `dir` and returns its path.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.input.core_file_name()?);
        let text = self.core_description()?;
        fs::write(&path, text).map_err(|source| Error::Registration {
            path: path.clone(),
            source,
        })?;
        info!("Wrote core description {path:?}");
        Ok(path)
    }
}

impl BuildRegistry for Generator {
    fn register_generated_file(&mut self, name: &str, file_type: FileType) -> Result<()> {
        let mut entry = IndexMap::new();
        entry.insert(name.to_string(), FileAttributes { file_type });
        self.filesets
            .entry(FILESET.to_string())
            .or_default()
            .files
            .push(entry);

        let target = self.targets.entry(TARGET.to_string()).or_default();
        if !target.filesets.iter().any(|f| f == FILESET) {
            target.filesets.push(FILESET.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
gapi: '1.0'
files_root: /work/veerwolf
parameters:
  count: 4
vlnv: '::veerwolf_array_0:0'
";

    #[test]
    fn parse_input() {
        let input = GeneratorInput::parse(INPUT).unwrap();
        assert_eq!(input.gapi.as_deref(), Some("1.0"));
        assert_eq!(input.files_root, Some(PathBuf::from("/work/veerwolf")));
        assert_eq!(input.parameter("count").and_then(Value::as_i64), Some(4));
        assert!(input.parameter("bootrom").is_none());
        assert_eq!(input.core_file_name().unwrap(), "veerwolf_array_0.core");
    }

    #[test]
    fn vlnv_without_name() {
        let input = GeneratorInput::parse("vlnv: veerwolf\n").unwrap();
        assert!(matches!(
            input.core_file_name(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn core_description_lists_files() {
        let mut generator = Generator::new(GeneratorInput::parse(INPUT).unwrap());
        generator
            .register_generated_file("veerwolf_array.v", FileType::VerilogSource)
            .unwrap();

        let text = generator.core_description().unwrap();
        assert!(text.starts_with("CAPI=2:\n"));

        let parsed: Value = serde_yaml::from_str(text.trim_start_matches("CAPI=2:\n")).unwrap();
        assert_eq!(
            parsed["name"],
            Value::String("::veerwolf_array_0:0".to_string())
        );
        assert_eq!(
            parsed["filesets"]["rtl"]["files"][0]["veerwolf_array.v"]["file_type"],
            Value::String("verilogSource".to_string())
        );
        assert_eq!(
            parsed["targets"]["default"]["filesets"][0],
            Value::String("rtl".to_string())
        );
    }
}
