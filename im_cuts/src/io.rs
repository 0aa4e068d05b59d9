//! Import and export of the input data of cuts ([`DirectlyFollowsGraph`], [`VariantLog`])
//!
//! Supported formats are `json` and gzipped JSON (`json.gz`).
use std::io::{BufReader, Read, Write};
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{de::DeserializeOwned, Serialize};

use crate::{dfg::DirectlyFollowsGraph, event_log::variant_log::VariantLog};

/// Error type for IO operations on cut input data
#[derive(Debug)]
pub enum CutDataIOError {
    /// IO Error
    Io(std::io::Error),
    /// JSON Parsing Error
    Json(serde_json::Error),
    /// Unsupported Format
    UnsupportedFormat(String),
}

impl std::fmt::Display for CutDataIOError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutDataIOError::Io(e) => write!(f, "IO Error: {}", e),
            CutDataIOError::Json(e) => write!(f, "JSON Error: {}", e),
            CutDataIOError::UnsupportedFormat(s) => write!(f, "Unsupported Format: {}", s),
        }
    }
}

impl std::error::Error for CutDataIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CutDataIOError::Io(e) => Some(e),
            CutDataIOError::Json(e) => Some(e),
            CutDataIOError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CutDataIOError {
    fn from(e: std::io::Error) -> Self {
        CutDataIOError::Io(e)
    }
}

impl From<serde_json::Error> for CutDataIOError {
    fn from(e: serde_json::Error) -> Self {
        CutDataIOError::Json(e)
    }
}

/// Infer format from path (e.g., `json` or `json.gz`)
fn infer_format(path: &Path) -> Option<String> {
    let path_str = path.to_string_lossy().to_lowercase();
    if path_str.ends_with(".json.gz") {
        return Some("json.gz".to_string());
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

fn unknown_format_error() -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        "Could not infer format from path",
    )
}

/// Trait for importing types from a file path or reader
pub trait Importable: Sized {
    /// Import from a reader, specifying the format.
    fn import_from_reader<R: Read>(reader: R, format: &str) -> Result<Self, CutDataIOError>;

    /// Import from a file path, inferring the format from the file extension.
    fn import_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CutDataIOError> {
        let path = path.as_ref();
        let format = infer_format(path).ok_or_else(unknown_format_error)?;
        let file = std::fs::File::open(path)?;
        Self::import_from_reader(BufReader::new(file), &format)
    }

    /// Import from a byte slice, specifying the format.
    fn import_from_bytes(bytes: &[u8], format: &str) -> Result<Self, CutDataIOError> {
        Self::import_from_reader(std::io::Cursor::new(bytes), format)
    }
}

/// Trait for exporting types to a file path or writer
pub trait Exportable {
    /// Export to a writer, specifying the format.
    fn export_to_writer<W: Write>(&self, writer: W, format: &str) -> Result<(), CutDataIOError>;

    /// Export to a file path, inferring the format from the file extension.
    fn export_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), CutDataIOError> {
        let path = path.as_ref();
        let format = infer_format(path).ok_or_else(unknown_format_error)?;
        let file = std::fs::File::create(path)?;
        self.export_to_writer(std::io::BufWriter::new(file), &format)
    }
}

fn import_json<T: DeserializeOwned, R: Read>(reader: R, format: &str) -> Result<T, CutDataIOError> {
    match format {
        "json.gz" | ".json.gz" => Ok(serde_json::from_reader(BufReader::new(GzDecoder::new(
            reader,
        )))?),
        _ if format.ends_with("json") => Ok(serde_json::from_reader(reader)?),
        _ => Err(CutDataIOError::UnsupportedFormat(format.to_string())),
    }
}

fn export_json<T: Serialize, W: Write>(
    value: &T,
    mut writer: W,
    format: &str,
) -> Result<(), CutDataIOError> {
    match format {
        "json.gz" | ".json.gz" => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            serde_json::to_writer(&mut encoder, value)?;
            encoder.finish()?.flush()?;
            Ok(())
        }
        _ if format.ends_with("json") => {
            serde_json::to_writer(&mut writer, value)?;
            writer.flush()?;
            Ok(())
        }
        _ => Err(CutDataIOError::UnsupportedFormat(format.to_string())),
    }
}

impl Importable for DirectlyFollowsGraph {
    fn import_from_reader<R: Read>(reader: R, format: &str) -> Result<Self, CutDataIOError> {
        import_json(reader, format)
    }
}

impl Exportable for DirectlyFollowsGraph {
    fn export_to_writer<W: Write>(&self, writer: W, format: &str) -> Result<(), CutDataIOError> {
        export_json(self, writer, format)
    }
}

impl Importable for VariantLog {
    fn import_from_reader<R: Read>(reader: R, format: &str) -> Result<Self, CutDataIOError> {
        import_json(reader, format)
    }
}

impl Exportable for VariantLog {
    fn export_to_writer<W: Write>(&self, writer: W, format: &str) -> Result<(), CutDataIOError> {
        export_json(self, writer, format)
    }
}
