//! Command-line interface for mdstrip.
//!
//! Usage:
//!   mdstrip [FILE] [-o `<output>`] [--keep-links] [--keep-code]   - Strip a file or stdin
//!   mdstrip version                                              - Show version information

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use mdstrip_config::Config;
use mdstrip_engine::{StripOptions, io, strip};
use std::path::{Path, PathBuf};
use std::process;

const REVISION: &str = match option_env!("MDSTRIP_REVISION") {
    Some(revision) => revision,
    None => "none",
};

fn cli() -> Command {
    Command::new("mdstrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip Markdown formatting from text")
        .long_about(
            "mdstrip removes Markdown formatting from text files or stdin.\n\
             It keeps the actual content while removing syntax like headers (#),\n\
             emphasis (**/__), code fences, links and HTML tags.",
        )
        // -V is taken by --verbose
        .disable_version_flag(true)
        .arg(
            Arg::new("file")
                .help("Markdown file to strip (default: stdin)")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file (default: stdout)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("keep-links")
                .long("keep-links")
                .short('l')
                .help("Keep link URLs in output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-code")
                .long("keep-code")
                .short('c')
                .help("Keep code block markers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file with default options (default: ~/.config/mdstrip/config.toml)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('V')
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('v')
                .help("Print version")
                .action(ArgAction::Version),
        )
        .subcommand(Command::new("version").about("Show version information"))
}

fn main() {
    let matches = cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("version", _)) => {
            handle_version();
            Ok(())
        }
        _ => handle_strip(&matches),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Handle the default strip command
fn handle_strip(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<PathBuf>("file").map(PathBuf::as_path);
    let output = matches.get_one::<PathBuf>("output").map(PathBuf::as_path);
    let options = resolve_options(matches)?;
    log::debug!("Strip options: {options:?}");

    match input {
        Some(path) => log::debug!("Reading from file {}", path.display()),
        None => log::debug!("Reading from stdin"),
    }
    let content = io::read_input(input).with_context(|| match input {
        Some(path) => format!("Failed to read input file {}", path.display()),
        None => "Failed to read input from stdin".to_string(),
    })?;

    let stripped = strip(&content, &options);
    log::debug!(
        "Stripped {} bytes down to {} bytes",
        content.len(),
        stripped.len()
    );

    io::write_output(output, &stripped).with_context(|| match output {
        Some(path) => format!("Failed to write output file {}", path.display()),
        None => "Failed to write to stdout".to_string(),
    })?;

    if let Some(path) = output {
        log::info!("Output written to file {}", path.display());
    }

    Ok(())
}

fn resolve_options(matches: &ArgMatches) -> Result<StripOptions> {
    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    Ok(merge_options(matches, &config))
}

/// Flags switch options on; a config file can switch them on by default.
fn merge_options(matches: &ArgMatches, config: &Config) -> StripOptions {
    StripOptions::default()
        .with_keep_links(matches.get_flag("keep-links") || config.keep_links)
        .with_keep_code(matches.get_flag("keep-code") || config.keep_code)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            Config::load_required(path).context("Failed to load config file")
        }
        None => {
            let config_path = Config::config_path();
            let config = Config::load().context("Failed to load config file")?;
            match config {
                Some(config) => {
                    log::debug!("Loaded config from {}", config_path.display());
                    Ok(config)
                }
                None => {
                    log::debug!("No config file at {}", config_path.display());
                    Ok(Config::default())
                }
            }
        }
    }
}

fn handle_version() {
    println!(
        "mdstrip version {} (revision: {REVISION})",
        env!("CARGO_PKG_VERSION")
    );
}
