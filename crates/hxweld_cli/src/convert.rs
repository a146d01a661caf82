//! Conversion command for the hxweld CLI
//!
//! Reads declaration trees serialized as JSON and writes Haxe externs,
//! either for a single file or for every `*.json` file below a directory.

use anyhow::{bail, Context, Result};
use hxweld::{Module, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Run the conversion with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = ConvertCommand::parse(args)?;

    let options = match cmd.config {
        Some(ref path) => RenderOptions::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderOptions::default(),
    };

    if cmd.input.is_dir() {
        let Some(ref output) = cmd.output else {
            bail!("--output is required when the input is a directory");
        };
        let count = convert_dir(&cmd.input, output, &options)?;
        info!(count, output = %output.display(), "hxweld.convert_dir");
        return Ok(());
    }

    let haxe = convert_file(&cmd.input, &options)?;
    match cmd.output {
        Some(ref output) => write_output(output, &haxe)?,
        None => print!("{}", haxe),
    }

    Ok(())
}

/// Conversion command configuration
#[derive(Debug, PartialEq, Eq)]
struct ConvertCommand {
    /// JSON file or directory of JSON files
    input: PathBuf,
    /// Output file (single input) or directory (directory input)
    output: Option<PathBuf>,
    /// TOML render options
    config: Option<PathBuf>,
}

impl ConvertCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut input = None;
        let mut output = None;
        let mut config = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        output = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--output requires a value");
                    }
                }
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        config = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--config requires a value (path to a TOML file)");
                    }
                }
                arg if !arg.starts_with('-') => {
                    if input.is_some() {
                        bail!("Unexpected extra input: {}", arg);
                    }
                    input = Some(PathBuf::from(arg));
                    i += 1;
                }
                _ => {
                    bail!("Unknown flag: {}", args[i]);
                }
            }
        }

        let Some(input) = input else {
            bail!("Missing input (a .json file or a directory)");
        };

        Ok(ConvertCommand {
            input,
            output,
            config,
        })
    }
}

/// Read, validate and render one JSON declaration tree
fn convert_file(path: &Path, options: &RenderOptions) -> Result<String> {
    debug!(path = %path.display(), "hxweld.convert_file");

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let module: Module = serde_json::from_str(&source)
        .with_context(|| format!("Invalid declaration tree in {}", path.display()))?;
    module
        .validate()
        .with_context(|| format!("Invalid declaration tree in {}", path.display()))?;

    Ok(hxweld::render_with(&module, options))
}

/// Render every `*.json` below `input` into a `.hx` file under `output`
fn convert_dir(input: &Path, output: &Path, options: &RenderOptions) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        let relative = path.strip_prefix(input).unwrap_or(path);
        let target = output.join(relative).with_extension("hx");

        let haxe = convert_file(path, options)?;
        write_output(&target, &haxe)?;
        count += 1;
    }

    Ok(count)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn usage() {
    println!(
        "Usage: hxweld <input> [options]

Renders declaration trees (JSON) into Haxe extern declarations.

Arguments:
  <input>                  A .json tree, or a directory of .json trees

Options:
  -o, --output <path>      Output file, or output directory for directory input
                           (single file input prints to stdout when omitted)
  -c, --config <file>      TOML render options (varargs_arity, indent, emit_packages)
  -h, --help               Show this help

Environment:
  HXWELD_LOG               Log filter (default: info)"
    );
}
