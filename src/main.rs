// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::Parser;
use log::info;

use tilestitch::{
    Error, GenerateRequest, GeneratedFile, Generator, GeneratorInput, Result, Variant,
    VerilogEmitter, generate, override_parameters,
};

/// Generate a daisy chain of veerwolf tiles as structural Verilog.
///
/// When run by FuseSoC, pass the generator input file; the tile count is read
/// from its `count` parameter and a core description is written next to the
/// Verilog file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Which top level to generate.
    #[arg(value_enum)]
    variant: Variant,

    /// FuseSoC generator input (YAML).
    gapi: Option<PathBuf>,

    /// Number of tiles. Overrides the generator input.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Boot image file loaded into every tile.
    #[arg(long)]
    bootrom: Option<String>,

    /// Directory to which output files should be saved.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let Some(gapi) = &args.gapi else {
        let count = args
            .count
            .ok_or_else(|| Error::InvalidConfiguration("no tile count given".to_string()))?;
        let request = GenerateRequest {
            variant: args.variant,
            count,
            bootrom: args.bootrom,
            output_dir: args.output_dir,
        };
        let mut files: Vec<GeneratedFile> = Vec::new();
        generate(&request, &VerilogEmitter::default(), &mut files)?;
        for file in files {
            info!("Generated {} ({:?})", file.name, file.file_type);
        }
        return Ok(());
    };

    let mut input = GeneratorInput::from_file(gapi)?;
    override_parameters(&mut input, args.count, args.bootrom.as_deref());
    let request = GenerateRequest::from_generator_input(args.variant, &input, &args.output_dir)?;

    let mut generator = Generator::new(input);
    generate(&request, &VerilogEmitter::default(), &mut generator)?;
    generator.write(&args.output_dir)?;

    Ok(())
}
