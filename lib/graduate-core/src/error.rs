use std::path::PathBuf;

/// Errors that can occur while loading, diffing or writing documents.
///
/// Only [`GraduateError::BaselineFileUnreadable`] is recovered internally, when
/// reconstructing baseline paths: the offending file is skipped with a warning.
/// Every other variant aborts the run.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum GraduateError {
    /// The source could not be retrieved.
    ///
    /// Occurs when the HTTP request fails, returns a non-success status, or a
    /// local source file cannot be read.
    #[display("Source '{source_name}' is unavailable: {error}")]
    #[from(skip)]
    SourceUnavailable {
        /// The source that was requested.
        source_name: String,
        /// Description of the retrieval failure.
        error: String,
    },

    /// The retrieved bytes are neither a JSON nor a YAML mapping.
    #[display("Cannot parse '{source_name}': not JSON ({json}), not YAML ({yaml})")]
    #[from(skip)]
    ParseFailure {
        /// The source that was parsed.
        source_name: String,
        /// Why the JSON attempt failed.
        json: String,
        /// Why the YAML attempt failed.
        yaml: String,
    },

    /// A baseline file could not be read or parsed.
    #[display("Baseline file '{}' is unreadable: {error}", path.display())]
    #[from(skip)]
    BaselineFileUnreadable {
        /// The baseline file.
        path: PathBuf,
        /// Description of the failure.
        error: String,
    },

    /// The source is neither a supported URL nor a file path.
    #[display("Invalid source '{source_name}': {error}")]
    #[from(skip)]
    InvalidSource {
        /// The rejected source.
        source_name: String,
        /// Why it was rejected.
        error: String,
    },

    /// YAML serialization failed.
    #[display("YAML error: {error}")]
    #[from(skip)]
    YamlError {
        /// Description of the serialization failure.
        error: String,
    },

    /// I/O operation failed while creating the output directory or writing a file.
    #[display("I/O error: {_0}")]
    IoError(std::io::Error),
}
