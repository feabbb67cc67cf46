//! Converting note files: read, parse, render, write.
//!
//! File access goes through [`NoteStore`] so the conversion loop can run
//! against something other than the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Config;
use crate::error::ConvertError;
use crate::parser::parse_document;
use crate::xhtml::to_xhtml;

/// Where notes are read from and rendered markup is written to.
pub trait NoteStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// A [`NoteStore`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl NoteStore for FsStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Outcome of converting one input.
#[derive(Debug)]
pub struct Conversion {
    pub input: PathBuf,
    pub result: Result<PathBuf, ConvertError>,
}

/// Output path for `input`: same name with the configured extension,
/// placed in the configured output directory if there is one.
pub fn output_path(input: &Path, config: &Config) -> PathBuf {
    let renamed = input.with_extension(&config.output.extension);
    match (&config.output.directory, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}

/// Convert a single note. Nothing is written unless parsing succeeds.
pub fn convert_note(
    input: &Path,
    store: &mut impl NoteStore,
    config: &Config,
) -> Result<PathBuf, ConvertError> {
    let text = store
        .read_to_string(input)
        .map_err(|source| ConvertError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    let json: Value = serde_json::from_str(&text).map_err(|source| ConvertError::Json {
        path: input.to_path_buf(),
        source,
    })?;

    let document = parse_document(&json).map_err(|source| ConvertError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let output = output_path(input, config);
    store
        .write(&output, &to_xhtml(&document))
        .map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;

    Ok(output)
}

/// Convert every input in order. A failing note is logged and skipped; the
/// rest of the batch still runs.
pub fn convert_notes<P: AsRef<Path>>(
    inputs: &[P],
    store: &mut impl NoteStore,
    config: &Config,
) -> Vec<Conversion> {
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            log::info!("input {}", input.display());
            let result = convert_note(input, store, config);
            if let Err(e) = &result {
                log::error!("{}", e);
            }
            Conversion {
                input: input.to_path_buf(),
                result,
            }
        })
        .collect()
}
