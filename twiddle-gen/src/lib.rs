use anyhow::{Context, Result};
use clap::Parser;
use mve_twiddle::output::{DEFAULT_HEADER_PATH, DEFAULT_SOURCE_PATH};
use mve_twiddle::{write_tables, GenerationReport, OutputPaths};
use std::ffi::OsString;
use std::path::PathBuf;

/// Generate the rearranged twiddle tables used by the CMSIS-DSP MVE FFTs.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the generated C source file
    #[arg(short = 'f', long = "c-file", default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Path of the generated C header file
    #[arg(long = "he", visible_alias = "h-file", default_value = DEFAULT_HEADER_PATH)]
    pub header: PathBuf,
}

impl Cli {
    /// Parse `args`, also accepting the single-dash `-he` spelling used by
    /// existing build scripts. Left alone, clap would read it as `-h -e`.
    pub fn parse_with_legacy_flags<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(rewrite_legacy_flags(args))
    }

    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths {
            definitions: self.source.clone(),
            declarations: self.header.clone(),
        }
    }
}

/// Map `-he PATH` and `-he=PATH` onto the `--he` long flag.
pub fn rewrite_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-he") => OsString::from("--he"),
                Some(s) if s.starts_with("-he=") => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

/// Initialise `env_logger`, defaulting to `info` unless `RUST_LOG` says
/// otherwise.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Ignore a second initialisation from tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Write both files for every supported transform size.
pub fn run(cli: &Cli) -> Result<GenerationReport> {
    let paths = cli.output_paths();
    log::debug!(
        "writing definitions to {} and declarations to {}",
        paths.definitions.display(),
        paths.declarations.display()
    );
    let report = write_tables(&paths).context("failed to generate MVE twiddle tables")?;
    let sizes: Vec<String> = report.sizes.iter().map(|s| s.to_string()).collect();
    log::info!("generated tables for n = {}", sizes.join(", "));
    Ok(report)
}
