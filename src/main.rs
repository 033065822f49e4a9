//! genwrap CLI
//!
//! Generates Z3 wrapper methods from `//wrap:expr` directives.

use std::path::PathBuf;
use std::process::ExitCode;

use z3_genwrap::{GenConfig, GenError, Generator};

const USAGE: &str = "\
Usage: genwrap -t TYPE [-o OUTPUT] FILE.rs [FILE2.rs ...]

Options:
  -t TYPE      Default type for results and untyped arguments (required)
  -o OUTPUT    Output file (default: FILE.wrap.rs next to the first input)
  -h, --help   Print this message";

/// Parsed command line.
struct Options {
    default_type: String,
    output: Option<PathBuf>,
    inputs: Vec<PathBuf>,
}

enum Command {
    Help,
    Generate(Options),
}

fn main() -> ExitCode {
    z3_genwrap::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Generate(options)) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match generate(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(raw) = err.raw_output() {
                eprintln!("{raw}");
            }
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(options: &Options) -> Result<(), GenError> {
    let generator = Generator::new(GenConfig::new(&options.default_type));
    match &options.output {
        Some(output) => generator.run_to(&options.inputs, output),
        None => generator.run(&options.inputs).map(|_| ()),
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut default_type = None;
    let mut output = None;
    let mut inputs = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-t" => {
                let value = iter.next().ok_or("-t needs a type")?;
                default_type = Some(value.clone());
            }
            "-o" => {
                let value = iter.next().ok_or("-o needs a path")?;
                output = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown flag {flag}"));
            }
            input => inputs.push(PathBuf::from(input)),
        }
    }

    let default_type = default_type.ok_or("missing -t TYPE")?;
    if inputs.is_empty() {
        return Err("no input files".to_string());
    }

    Ok(Command::Generate(Options {
        default_type,
        output,
        inputs,
    }))
}
