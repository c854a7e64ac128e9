//! Command-line interface for swatch
//! This binary compiles design-token documents into a style sheet and a typed Flutter class.
//!
//! Usage:
//!   swatch build [SOURCES...] [--config `<file>`] [--css-out `<path>`] [--dart-out `<path>`]
//!   swatch watch [SOURCES...] [...same options]    - Build, then rebuild on every change
//!   swatch list-formats                            - List the available artifact formats
//!
//! Without `--config`, `swatch.toml` in the working directory is used when present.

mod pipeline;
mod watch;

use clap::{Arg, ArgAction, ArgMatches, Command};
use pipeline::BuildError;
use std::io::IsTerminal;
use swatch_config::{Loader, SwatchConfig};
use swatch_emit::FormatRegistry;
use tracing_subscriber::EnvFilter;

const PROJECT_CONFIG: &str = "swatch.toml";

fn build_args() -> Vec<Arg> {
    vec![
        Arg::new("sources")
            .help("Token documents, merged in order (default: configured sources)")
            .num_args(1..)
            .index(1),
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Configuration file layered over the built-in defaults"),
        Arg::new("css-out")
            .long("css-out")
            .help("Destination of the style-sheet artifact"),
        Arg::new("dart-out")
            .long("dart-out")
            .help("Destination of the typed Flutter class"),
    ]
}

fn main() {
    let matches = Command::new("swatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile design tokens into a style sheet and a typed Flutter class")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every pipeline stage")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Compile the token documents once")
                .args(build_args()),
        )
        .subcommand(
            Command::new("watch")
                .about("Compile, then recompile whenever a token document changes")
                .args(build_args()),
        )
        .subcommand(Command::new("list-formats").about("List available artifact formats"))
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("build", sub)) => {
            let config = load_config(sub).unwrap_or_else(|e| exit_with(e));
            if let Err(e) = pipeline::build(&config) {
                exit_with(e);
            }
        }
        Some(("watch", sub)) => {
            let config = load_config(sub).unwrap_or_else(|e| exit_with(e));
            if let Err(e) = watch::run(&config) {
                exit_with(e);
            }
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Logs go to stderr so artifacts piped from stdout stay clean
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Defaults, then the project file, then flags
fn load_config(matches: &ArgMatches) -> Result<SwatchConfig, BuildError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(PROJECT_CONFIG),
    };
    if let Some(sources) = matches.get_many::<String>("sources") {
        loader = loader.set_override("sources", sources.cloned().collect::<Vec<_>>())?;
    }
    if let Some(path) = matches.get_one::<String>("css-out") {
        loader = loader.set_override("output.css", path.as_str())?;
    }
    if let Some(path) = matches.get_one::<String>("dart-out") {
        loader = loader.set_override("output.dart", path.as_str())?;
    }
    Ok(loader.build()?)
}

fn exit_with(error: BuildError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {} (.{})", name, format.file_extension());
            println!("    {}", format.description());
            println!();
        }
    }
}
