//! Writing the rendered tables to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::error::TwiddleError;
use crate::generate::render;
use crate::size::TransformSize;

/// Default location of the definitions file, relative to the working
/// directory of a run from the library's `Scripts` folder.
pub const DEFAULT_SOURCE_PATH: &str = "../Source/CommonTables/arm_mve_tables.c";

/// Default location of the declarations file.
pub const DEFAULT_HEADER_PATH: &str = "../Include/arm_mve_tables.h";

/// Destinations of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub definitions: PathBuf,
    pub declarations: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            definitions: PathBuf::from(DEFAULT_SOURCE_PATH),
            declarations: PathBuf::from(DEFAULT_HEADER_PATH),
        }
    }
}

/// What was written to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub bytes: usize,
    /// Hex BLAKE3 digest of the file contents.
    pub digest: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub sizes: Vec<TransformSize>,
    pub definitions: FileReport,
    pub declarations: FileReport,
}

fn io_error(path: &Path, source: io::Error) -> TwiddleError {
    TwiddleError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create(path: &Path) -> Result<BufWriter<File>, TwiddleError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| io_error(path, e))
}

fn finish(mut file: BufWriter<File>, path: &Path, text: &str) -> Result<FileReport, TwiddleError> {
    file.write_all(text.as_bytes()).map_err(|e| io_error(path, e))?;
    file.flush().map_err(|e| io_error(path, e))?;
    let digest = blake3::hash(text.as_bytes()).to_hex().to_string();
    log::info!("wrote {} ({} bytes, blake3 {})", path.display(), text.len(), digest);
    Ok(FileReport {
        path: path.to_path_buf(),
        bytes: text.len(),
        digest,
    })
}

/// Generate the tables for `sizes` into the files named by `paths`.
///
/// Both files are created (truncating any previous contents) before anything
/// is written. A failure leaves whatever was already on disk in place.
pub fn write_tables_for(
    paths: &OutputPaths,
    sizes: &[TransformSize],
) -> Result<GenerationReport, TwiddleError> {
    let definitions = create(&paths.definitions)?;
    let declarations = create(&paths.declarations)?;

    let rendered = render(sizes)?;

    let definitions = finish(definitions, &paths.definitions, &rendered.definitions)?;
    let declarations = finish(declarations, &paths.declarations, &rendered.declarations)?;

    Ok(GenerationReport {
        sizes: sizes.to_vec(),
        definitions,
        declarations,
    })
}

/// Generate the shipped set of tables (every supported size).
pub fn write_tables(paths: &OutputPaths) -> Result<GenerationReport, TwiddleError> {
    write_tables_for(paths, &TransformSize::ALL)
}
