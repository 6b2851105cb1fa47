//! CLI entry point for lsr

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use lsr::{FlagSet, ListError, Lister, ListingFormatter, ListingOutput};

/// Listed when no operand is given.
const DEFAULT_PATH: &str = "./";

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List directory contents as bare names or detailed attribute rows")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
struct Args {
    /// Files or directories to list (default: current directory)
    paths: Vec<PathBuf>,

    /// Long format: type, permissions, links, owner, group, size, time, name
    #[arg(short = 'l')]
    long: bool,

    /// Show entries whose names begin with '.'
    #[arg(short = 'a')]
    all: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    recursive: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    time: bool,

    /// Reverse whichever sort order applies
    #[arg(short = 'r')]
    reverse: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    fn flags(&self) -> FlagSet {
        FlagSet {
            long_format: self.long,
            show_hidden: self.all,
            recursive: self.recursive,
            time_sort: self.time,
            reverse_order: self.reverse,
        }
    }
}

/// Parse argv, turning clap's errors into usage errors. Help and version
/// requests print and exit here.
///
/// A lone `-` is a switch group with no switches and is dropped. `--` is a
/// switch group whose first switch is `-`, so it is invalid, but only once
/// everything before it has parsed.
fn parse_args() -> Result<Args, ListError> {
    let mut argv: Vec<OsString> = env::args_os().filter(|arg| arg.as_os_str() != "-").collect();
    let separator = argv.iter().position(|arg| arg.as_os_str() == "--");
    if let Some(at) = separator {
        argv.truncate(at);
    }

    let args = Args::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::UnknownArgument => {
            invalid_parameter(&err).unwrap_or_else(|| ListError::Usage(first_line(&err)))
        }
        _ => ListError::Usage(first_line(&err)),
    })?;

    match separator {
        Some(_) => Err(ListError::InvalidParameter('-')),
        None => Ok(args),
    }
}

/// The offending switch character of an unknown argument. Everything after
/// the first dash counts as switch characters, so `--foo` reports `-`.
fn invalid_parameter(err: &clap::Error) -> Option<ListError> {
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(arg) => arg
            .strip_prefix('-')?
            .chars()
            .next()
            .map(ListError::InvalidParameter),
        _ => None,
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}

fn fail(err: &ListError) -> ! {
    eprintln!("lsr: {}", err);
    if err.is_usage() {
        eprintln!("Try 'lsr --help' for more information.");
    }
    process::exit(1);
}

fn main() {
    let args = parse_args().unwrap_or_else(|e| fail(&e));
    let flags = args.flags();

    let operands = if args.paths.is_empty() {
        vec![PathBuf::from(DEFAULT_PATH)]
    } else {
        args.paths
    };

    let lister = Lister::new(flags);
    let mut formatter = ListingFormatter::stdout(lister.flags());

    let result = operands
        .iter()
        .try_for_each(|operand| lister.list_operand(operand, &mut formatter));

    // Flush what was listed before reporting, so the diagnostic comes last
    let flushed = formatter.finish().map_err(ListError::Output);

    if let Err(e) = result.and(flushed) {
        fail(&e);
    }
}
