use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use structopt::clap::ErrorKind;
use structopt::StructOpt;
use thiserror::Error;

use lang_asm::{translate, Program, Schema, TranslateError};

const EXIT_PARAMS: i32 = 10;
const EXIT_INPUT: i32 = 11;
const EXIT_OUTPUT: i32 = 12;
const EXIT_INTERNAL: i32 = lang_asm::error::EXIT_INTERNAL;

/// Reads LANGUAGE source and writes its XML program representation.
#[derive(StructOpt)]
struct Options {
    /// Source file. Reads stdin when omitted.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Write the document here instead of stdout.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Output format.
    #[structopt(long, default_value = "xml", possible_values = &["xml", "json"])]
    emit: Emit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Xml,
    Json,
}

impl FromStr for Emit {
    type Err = String;

    fn from_str(s: &str) -> Result<Emit, String> {
        match s {
            "xml" => Ok(Emit::Xml),
            "json" => Ok(Emit::Json),
            other => Err(format!("unknown output format {}", other)),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("cannot write output: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("cannot render output: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => EXIT_INPUT,
            CliError::Output(_) => EXIT_OUTPUT,
            CliError::Translate(e) => e.exit_code(),
            CliError::Render(_) => EXIT_INTERNAL,
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let options = match Options::from_args_safe() {
        Ok(options) => options,
        Err(e) if matches!(e.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e.message);
            std::process::exit(EXIT_PARAMS);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(options: &Options) -> Result<(), CliError> {
    let source = read_input(options.input.as_deref())?;
    let schema = Schema::standard();
    let program = translate(&source, &schema)?;
    let document = render(&program, options.emit)?;
    write_output(options.output.as_deref(), &document)
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(CliError::Input),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::Input(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no input file given and stdin is a terminal",
                )));
            }
            let mut source = String::new();
            stdin
                .lock()
                .read_to_string(&mut source)
                .map_err(CliError::Input)?;
            Ok(source)
        }
    }
}

fn render(program: &Program, emit: Emit) -> Result<String, CliError> {
    match emit {
        Emit::Xml => program.to_xml().map_err(|e| CliError::Render(e.into())),
        Emit::Json => program.to_json().map_err(|e| CliError::Render(e.into())),
    }
}

fn write_output(path: Option<&Path>, document: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, document).map_err(CliError::Output),
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(document.as_bytes())
                .and_then(|_| out.flush())
                .map_err(CliError::Output)
        }
    }
}
