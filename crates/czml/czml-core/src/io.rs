//! Whole-file helpers. Writes are not atomic.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::document::Document;
use crate::error::CzmlError;
use crate::json::{parse_document_with, to_string};
use crate::report::Decoded;

fn io_error(path: &Path, source: std::io::Error) -> CzmlError {
    CzmlError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read and decode a CZML file.
pub fn read_document(path: impl AsRef<Path>, config: &Config) -> Result<Decoded<Document>, CzmlError> {
    let path = path.as_ref();
    log::debug!("reading CZML document from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    parse_document_with(&text, config)
}

/// Encode `document` and write it to `path`, replacing any existing file.
pub fn write_document(
    path: impl AsRef<Path>,
    document: &Document,
    config: &Config,
) -> Result<(), CzmlError> {
    let path = path.as_ref();
    log::debug!(
        "writing CZML document ({} packet(s)) to {}",
        document.len(),
        path.display()
    );
    let text = to_string(document, config)?;
    fs::write(path, text).map_err(|e| io_error(path, e))
}

/// Encode `document` into any writer.
pub fn write_document_to<W: Write>(
    mut writer: W,
    document: &Document,
    config: &Config,
) -> Result<(), CzmlError> {
    let text = to_string(document, config)?;
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| io_error(Path::new("<writer>"), e))
}
