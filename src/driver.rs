// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use log::info;
use serde_yaml::Value;

use crate::{
    BuildRegistry, Error, FileType, GeneratorInput, NetlistEmitter, Result, Variant, build_chain,
};

/// One generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub variant: Variant,
    /// Number of tiles; negative values are rejected by [`generate`].
    pub count: i64,
    /// Boot image file, if not the variant default.
    pub bootrom: Option<String>,
    pub output_dir: PathBuf,
}

impl GenerateRequest {
    /// Builds a request from the `count` and optional `bootrom` parameters of
    /// a FuseSoC generator input.
    pub fn from_generator_input(
        variant: Variant,
        input: &GeneratorInput,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let count = input
            .parameter("count")
            .ok_or_else(|| Error::config("generator input has no count parameter"))
            .and_then(tile_count)?;

        let bootrom = match input.parameter("bootrom") {
            None => None,
            Some(Value::String(bootrom)) => Some(bootrom.clone()),
            Some(other) => {
                return Err(Error::config(format!(
                    "bootrom must be a file name, got {other:?}"
                )));
            }
        };

        Ok(GenerateRequest {
            variant,
            count,
            bootrom,
            output_dir: output_dir.into(),
        })
    }
}

/// Makes command line values take precedence over the `count` and `bootrom`
/// parameters FuseSoC passed in.
pub fn override_parameters(
    input: &mut GeneratorInput,
    count: Option<i64>,
    bootrom: Option<&str>,
) {
    if let Some(count) = count {
        input.parameters.insert("count".into(), count.into());
    }
    if let Some(bootrom) = bootrom {
        input.parameters.insert("bootrom".into(), bootrom.into());
    }
}

/// Interprets a configuration value as a tile count. Only integers are
/// accepted; the sign is checked when the chain is built.
pub fn tile_count(value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::config(format!("tile count must be an integer, got {value:?}")))
}

/// Builds the chain described by `request`, writes it with `emitter` into the
/// request's output directory and registers the file with `registry`.
/// Returns the path of the written file.
///
/// Nothing is written if the chain cannot be built or rendered, and nothing
/// is registered if it cannot be written.
pub fn generate(
    request: &GenerateRequest,
    emitter: &impl NetlistEmitter,
    registry: &mut impl BuildRegistry,
) -> Result<PathBuf> {
    let config = request.variant.chain_config(request.bootrom.as_deref());
    let mod_def = build_chain(request.count, &config)?;
    info!(
        "Generating {} tiles in {}",
        mod_def.get_instances().count(),
        mod_def.get_name()
    );
    let text = emitter.render(&mod_def)?;

    let file_name = request.variant.file_name();
    let path = request.output_dir.join(&file_name);
    emitter.persist(&path, &text)?;
    info!("Wrote {path:?}");

    registry.register_generated_file(&file_name, FileType::VerilogSource)?;
    Ok(path)
}
