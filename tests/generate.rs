// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tilestitch::*;

fn request(variant: Variant, count: i64, dir: &Path) -> GenerateRequest {
    GenerateRequest {
        variant,
        count,
        bootrom: None,
        output_dir: dir.to_path_buf(),
    }
}

#[test]
fn test_generate_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut files: Vec<GeneratedFile> = Vec::new();

    let path = generate(
        &request(Variant::Array, 3, dir.path()),
        &VerilogEmitter::default(),
        &mut files,
    )
    .unwrap();

    assert_eq!(path, dir.path().join("veerwolf_array.v"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("module veerwolf_array #("));
    assert!(text.contains(") tile2 (\n"));
    assert!(!text.contains("tile3"));

    assert_eq!(
        files,
        vec![GeneratedFile {
            name: "veerwolf_array.v".to_string(),
            file_type: FileType::VerilogSource,
        }]
    );

    // Only the Verilog file is written.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_generate_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(Variant::Pack, 4, dir.path());

    let emitter = VerilogEmitter::default();
    let mut files: Vec<GeneratedFile> = Vec::new();

    let path = generate(&req, &emitter, &mut files).unwrap();
    let first = fs::read(&path).unwrap();
    generate(&req, &emitter, &mut files).unwrap();
    assert_eq!(fs::read(&path).unwrap(), first);
    assert_eq!(files.len(), 2);
}

#[test]
fn test_negative_count_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut files: Vec<GeneratedFile> = Vec::new();

    let err = generate(
        &request(Variant::Array, -2, dir.path()),
        &VerilogEmitter::default(),
        &mut files,
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)), "{err}");
    assert!(files.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Renders normally but refuses to write.
struct ReadOnlyEmitter {
    renders: Cell<usize>,
}

impl NetlistEmitter for ReadOnlyEmitter {
    fn render(&self, mod_def: &ModDef) -> Result<String> {
        self.renders.set(self.renders.get() + 1);
        mod_def.emit(true)
    }

    fn persist(&self, path: &Path, _text: &str) -> Result<()> {
        Err(Error::Emission {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn test_emission_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let emitter = ReadOnlyEmitter {
        renders: Cell::new(0),
    };
    let mut files: Vec<GeneratedFile> = Vec::new();

    let err =
        generate(&request(Variant::Pack, 1, dir.path()), &emitter, &mut files).unwrap_err();

    match err {
        Error::Emission { path, source } => {
            assert_eq!(path, dir.path().join("veerwolf_pack.v"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(emitter.renders.get(), 1);
    assert!(files.is_empty());
}

#[test]
fn test_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = generate(
        &request(Variant::Array, 1, &missing),
        &VerilogEmitter::default(),
        &mut Vec::<GeneratedFile>::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Emission { .. }), "{err}");
    assert!(!missing.exists());
}

#[test]
fn test_fusesoc_generator() {
    let dir = tempfile::tempdir().unwrap();
    let gapi = dir.path().join("veerwolf_pack_gen_input.yml");
    fs::write(
        &gapi,
        "\
gapi: '1.0'
files_root: /work/veerwolf
parameters:
  count: 2
  bootrom: blinky.vh
vlnv: '::veerwolf_pack_0:0'
",
    )
    .unwrap();

    let input = GeneratorInput::from_file(&gapi).unwrap();
    let req = GenerateRequest::from_generator_input(Variant::Pack, &input, dir.path()).unwrap();
    let mut generator = Generator::new(input);

    let verilog = generate(&req, &VerilogEmitter::default(), &mut generator).unwrap();
    let core = generator.write(dir.path()).unwrap();

    assert_eq!(core, dir.path().join("veerwolf_pack_0.core"));
    assert!(fs::read_to_string(verilog).unwrap().contains("\"blinky.vh\""));

    let text = fs::read_to_string(&core).unwrap();
    assert!(text.starts_with("CAPI=2:\n"));
    let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(
        parsed["filesets"]["rtl"]["files"][0]["veerwolf_pack.v"]["file_type"],
        serde_yaml::Value::String("verilogSource".to_string())
    );
}

#[test]
fn test_command_line_overrides() {
    let gapi = "\
parameters:
  count: 2
  bootrom: blinky.vh
vlnv: '::veerwolf_array_0:0'
";

    // Values given on the command line win over the generator input.
    let mut input = GeneratorInput::parse(gapi).unwrap();
    override_parameters(&mut input, Some(5), Some("zephyr.vh"));
    let req = GenerateRequest::from_generator_input(Variant::Array, &input, ".").unwrap();
    assert_eq!(req.count, 5);
    assert_eq!(req.bootrom.as_deref(), Some("zephyr.vh"));

    // Absent overrides leave the generator input alone.
    let mut input = GeneratorInput::parse(gapi).unwrap();
    override_parameters(&mut input, None, None);
    let req = GenerateRequest::from_generator_input(Variant::Array, &input, ".").unwrap();
    assert_eq!(req.count, 2);
    assert_eq!(req.bootrom.as_deref(), Some("blinky.vh"));

    // A count may be supplied only on the command line.
    let mut input = GeneratorInput::parse("vlnv: '::veerwolf_array_0:0'\n").unwrap();
    override_parameters(&mut input, Some(0), None);
    let req = GenerateRequest::from_generator_input(Variant::Array, &input, ".").unwrap();
    assert_eq!(req.count, 0);
    assert_eq!(req.bootrom, None);
}

#[test]
fn test_generator_rejects_fractional_count() {
    let input = GeneratorInput::parse("vlnv: '::gen:0'\nparameters:\n  count: 1.5\n").unwrap();
    let err = GenerateRequest::from_generator_input(Variant::Array, &input, PathBuf::from("."))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)), "{err}");
}
