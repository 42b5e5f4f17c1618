//! Error types for unitsplit library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unitsplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while splitting a unit.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error without a more specific context.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A document in the input stream is not valid YAML.
    #[error("YAML parsing error in document {index}: {source}")]
    Parse {
        /// Zero-based document position
        index: usize,
        /// Underlying error
        source: serde_yaml::Error,
    },

    /// A record could not be serialized back to YAML.
    #[error("YAML serialization error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// The input stream holds no documents, so there is no unit.
    #[error("Input contains no YAML documents")]
    EmptyInput,

    /// A document is a scalar or sequence instead of a mapping.
    #[error("Document {index} is not a mapping")]
    NotAMapping {
        /// Zero-based document position
        index: usize,
    },

    /// The output directory is already present.
    #[error("Output directory already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// An output file could not be written.
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The operator aborted the naming prompts.
    #[error("Naming cancelled by operator")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Input contains no YAML documents");

        let err = Error::NotAMapping { index: 3 };
        assert_eq!(err.to_string(), "Document 3 is not a mapping");

        let err = Error::OutputExists(PathBuf::from("unit1"));
        assert_eq!(err.to_string(), "Output directory already exists: unit1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_error_carries_index() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err = Error::Parse { index: 2, source };
        assert!(err.to_string().starts_with("YAML parsing error in document 2:"));
    }
}
