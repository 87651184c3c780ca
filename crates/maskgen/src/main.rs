//! CLI entry point for the `sfr-masks` binary.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use mask_core as _;
use maskgen::{
    builtin, compile, load_tables, logging, MaskgenError, MaskgenErrorKind, MaskgenResult,
    Settings,
};
#[cfg(test)]
use rstest as _;
use serde as _;
#[cfg(test)]
use tempfile as _;
use thiserror as _;
use toml as _;
use tracing::debug;
use tracing_subscriber as _;

const USAGE_TEXT: &str = "\
Usage: sfr-masks [options]

Compiles a register reset table into initial/unimplemented/unknown bitmask
literals, one line per register.

Options:
  -r, --registers <file>  Register reset table (default: built-in PIC16F88)
  -a, --addresses <file>  Address table matching --registers
  -c, --config <file>     TOML settings file
      --column <n>        Reset column to derive masks from (default: 0, power-up)
  -o, --output <file>     Write the report to a file instead of stdout
  -h, --help              Show this help message

Examples:
  sfr-masks
  sfr-masks -r registers.txt -a addresses.txt -o masks.txt
  RUST_LOG=debug sfr-masks --config masks.toml
";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    registers: Option<PathBuf>,
    addresses: Option<PathBuf>,
    config: Option<PathBuf>,
    column: Option<usize>,
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum ParseResult {
    Run(CliArgs),
    Help,
}

fn next_value(
    args: &mut impl Iterator<Item = OsString>,
    flag: &str,
) -> Result<OsString, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

#[allow(clippy::while_let_on_iterator)]
fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        let flag = arg.to_string_lossy().to_string();
        match flag.as_str() {
            "-h" | "--help" => return Ok(ParseResult::Help),
            "-r" | "--registers" => {
                parsed.registers = Some(PathBuf::from(next_value(&mut args, &flag)?));
            }
            "-a" | "--addresses" => {
                parsed.addresses = Some(PathBuf::from(next_value(&mut args, &flag)?));
            }
            "-c" | "--config" => {
                parsed.config = Some(PathBuf::from(next_value(&mut args, &flag)?));
            }
            "-o" | "--output" => {
                parsed.output = Some(PathBuf::from(next_value(&mut args, &flag)?));
            }
            "--column" => {
                let value = next_value(&mut args, &flag)?;
                let value = value.to_string_lossy();
                let column = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid column: {value}"))?;
                parsed.column = Some(column);
            }
            other if other.starts_with('-') => return Err(format!("unknown option: {other}")),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    if parsed.registers.is_some() != parsed.addresses.is_some() {
        return Err("--registers and --addresses must be given together".to_string());
    }

    Ok(ParseResult::Run(parsed))
}

fn io_error(context: &str, e: &io::Error) -> MaskgenError {
    MaskgenError::new(MaskgenErrorKind::Io(format!("{context}: {e}")))
}

fn run(args: CliArgs) -> MaskgenResult<()> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(column) = args.column {
        settings.table.reset_column = column;
    }

    let (registers, addresses) = match (&args.registers, &args.addresses) {
        (Some(registers), Some(addresses)) => load_tables(registers, addresses)?,
        _ => builtin::pic16f88()?,
    };
    debug!(
        registers = %registers.origin,
        addresses = %addresses.origin,
        column = settings.table.reset_column,
        "compiling tables"
    );

    let report = compile(&registers, &addresses, &settings)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| io_error(&path.display().to_string(), &e))?;
            report
                .write_to(BufWriter::new(file))
                .map_err(|e| io_error(&path.display().to_string(), &e))?;
        }
        None => report
            .write_to(io::stdout().lock())
            .map_err(|e| io_error("stdout", &e))?,
    }

    Ok(())
}

fn main() {
    logging::init();

    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(args)) => match run(args) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("{}", e.format_for_stderr());
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = OsString> {
        list.iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_arguments_uses_builtin_tables() {
        let result = parse_args(args(&[])).expect("empty args are valid");
        let ParseResult::Run(parsed) = result else {
            panic!("expected run");
        };
        assert_eq!(parsed, CliArgs::default());
    }

    #[test]
    fn parses_all_options() {
        let result = parse_args(args(&[
            "-r",
            "regs.txt",
            "--addresses",
            "addrs.txt",
            "-c",
            "masks.toml",
            "--column",
            "1",
            "-o",
            "out.txt",
        ]))
        .expect("valid args");
        let ParseResult::Run(parsed) = result else {
            panic!("expected run");
        };

        assert_eq!(
            parsed,
            CliArgs {
                registers: Some(PathBuf::from("regs.txt")),
                addresses: Some(PathBuf::from("addrs.txt")),
                config: Some(PathBuf::from("masks.toml")),
                column: Some(1),
                output: Some(PathBuf::from("out.txt")),
            }
        );
    }

    #[test]
    fn parses_help_flag() {
        let result = parse_args(args(&["--help"])).expect("help parses");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn registers_require_addresses() {
        let error = parse_args(args(&["--registers", "regs.txt"])).expect_err("half a pair");
        assert!(error.contains("must be given together"));
    }

    #[test]
    fn rejects_bad_column() {
        let error = parse_args(args(&["--column", "two"])).expect_err("not a number");
        assert_eq!(error, "invalid column: two");
    }

    #[test]
    fn rejects_missing_value() {
        let error = parse_args(args(&["-o"])).expect_err("value required");
        assert_eq!(error, "missing value for -o");
    }

    #[test]
    fn rejects_unknown_option_and_positional() {
        let error = parse_args(args(&["--verbose"])).expect_err("unknown option");
        assert!(error.contains("unknown option"));
        let error = parse_args(args(&["table.txt"])).expect_err("positional");
        assert!(error.contains("unexpected argument"));
    }
}
