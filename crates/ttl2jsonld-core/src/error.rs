//! Error types for file conversion.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// These codes appear in the JSON run summary. Variant names and their
/// serialized `snake_case` strings must not change across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// The source file could not be opened or read.
    IoError,
    /// The source is not valid Turtle.
    SyntaxError,
    /// The base IRI could not be built or parsed.
    InvalidBaseIri,
    /// The JSON-LD serializer failed.
    SerializationError,
    /// The target file could not be written.
    WriteError,
    /// The serialized document could not be re-formatted as JSON.
    JsonError,
}

/// A per-file conversion failure.
///
/// `Read` and `Syntax` messages leave out the source path, which callers
/// already report next to the error; it is available through [`ConvertError::path`].
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read source: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid Turtle: {message}")]
    Syntax { path: PathBuf, message: String },

    #[error("Invalid base IRI '{iri}': {message}")]
    InvalidBaseIri { iri: String, message: String },

    #[error("JSON-LD serialization failed: {0}")]
    Serialize(#[source] io::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON (de)serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ConvertError::Read { .. } => ErrorCode::IoError,
            ConvertError::Syntax { .. } => ErrorCode::SyntaxError,
            ConvertError::InvalidBaseIri { .. } => ErrorCode::InvalidBaseIri,
            ConvertError::Serialize(_) => ErrorCode::SerializationError,
            ConvertError::Write { .. } => ErrorCode::WriteError,
            ConvertError::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Returns the file the error refers to, if any.
    ///
    /// `Serialize`, `Json` and `InvalidBaseIri` happen on in-memory data and
    /// carry no path.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConvertError::Read { path, .. } => Some(path),
            ConvertError::Syntax { path, .. } => Some(path),
            ConvertError::Write { path, .. } => Some(path),
            ConvertError::InvalidBaseIri { .. }
            | ConvertError::Serialize(_)
            | ConvertError::Json(_) => None,
        }
    }

    /// Structured JSON form: `{"code": "...", "message": "...", "path": "..." | null}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "path": self.path().map(|p| p.display().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_value(ErrorCode::InvalidBaseIri).unwrap();
        assert_eq!(json, json!("invalid_base_iri"));

        let back: ErrorCode = serde_json::from_value(json).unwrap();
        assert_eq!(back, ErrorCode::InvalidBaseIri);
    }

    #[test]
    fn test_syntax_error_display_leaves_path_to_caller() {
        let err = ConvertError::Syntax {
            path: PathBuf::from("ontologies/bad.ttl"),
            message: "unexpected end of file".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid Turtle: unexpected end of file");
        assert_eq!(err.path(), Some(Path::new("ontologies/bad.ttl")));

        let json = err.to_json();
        assert_eq!(json["path"], json!("ontologies/bad.ttl"));
    }

    #[test]
    fn test_read_error_display_leaves_path_to_caller() {
        let err = ConvertError::Read {
            path: PathBuf::from("ontologies/gone.ttl"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(!err.to_string().contains("gone.ttl"));
        assert_eq!(err.path(), Some(Path::new("ontologies/gone.ttl")));
    }

    #[test]
    fn test_write_error_to_json() {
        let err = ConvertError::Write {
            path: PathBuf::from("out/a.jsonld"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        let json = err.to_json();
        assert_eq!(json["code"], json!("write_error"));
        assert_eq!(json["path"], json!("out/a.jsonld"));
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("permission denied"));
    }

    #[test]
    fn test_in_memory_errors_have_no_path() {
        let err = ConvertError::Serialize(io::Error::other("boom"));
        assert_eq!(err.error_code(), ErrorCode::SerializationError);
        assert!(err.path().is_none());
        assert_eq!(err.to_json()["path"], json!(null));
    }
}
