//! Abstrakt CLI library
//!
//! This module contains the core CLI logic for the Abstrakt constellation tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::info;

use abstrakt::{AbstraktError, ConstellationBuilder};

/// Version reported by `abstrakt version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the Abstrakt CLI application
///
/// Whatever the command produces (DOT text or the version) is written to
/// `out`; logs go to the logger.
///
/// # Errors
///
/// Returns `AbstraktError` for:
/// - A constellation path that is missing or not a file
/// - File I/O errors
/// - Configuration loading errors
/// - Loading errors
/// - Duplicate or unresolved service identifiers
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), AbstraktError> {
    match &args.command {
        Command::Version => {
            writeln!(out, "{VERSION}")?;
            Ok(())
        }
        Command::Visualise {
            constellation_file_path,
            verbose,
        } => visualise(args, constellation_file_path, *verbose, out),
    }
}

fn visualise(
    args: &Args,
    path: &str,
    verbose: bool,
    out: &mut impl Write,
) -> Result<(), AbstraktError> {
    info!(constellation_file_path = path; "Visualising constellation");

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = if verbose {
        app_config.with_verbose(true)
    } else {
        app_config
    };

    let source = read_constellation(Path::new(path))?;

    let builder = ConstellationBuilder::new(app_config);
    let dot = builder.render(&source)?;

    out.write_all(dot.as_bytes())?;
    if !dot.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;

    info!("Constellation visualised successfully");
    Ok(())
}

fn read_constellation(path: &Path) -> Result<String, AbstraktError> {
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("constellation file not found: {}", path.display()),
        )
        .into());
    }
    Ok(fs::read_to_string(path)?)
}
