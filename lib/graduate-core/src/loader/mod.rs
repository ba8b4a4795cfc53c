//! Loading documents from a source and reconstructing a split baseline.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};
use url::Url;

use crate::{Document, GraduateError};

mod baseline;
pub use self::baseline::*;

mod parse;
pub use self::parse::*;

/// Where a document comes from.
///
/// `http` and `https` URLs are fetched over the network, `file` URLs and
/// anything that is not a URL are read from the local filesystem.
///
/// ```rust
/// use graduate_core::Source;
///
/// let remote: Source = "https://api.example.com/openapi.json".parse()?;
/// assert!(matches!(remote, Source::Remote(_)));
///
/// let local: Source = "specs/openapi.yaml".parse()?;
/// assert!(matches!(local, Source::Local(_)));
/// # Ok::<(), graduate_core::GraduateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A document served over HTTP(S).
    Remote(Url),
    /// A document on the local filesystem.
    Local(PathBuf),
}

impl FromStr for Source {
    type Err = GraduateError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let invalid = |error: String| GraduateError::InvalidSource {
            source_name: source.to_string(),
            error,
        };

        let Ok(url) = Url::parse(source) else {
            return Ok(Self::Local(PathBuf::from(source)));
        };

        match url.scheme() {
            "http" | "https" => Ok(Self::Remote(url)),
            "file" => url
                .to_file_path()
                .map(Self::Local)
                .map_err(|()| invalid("not a local file URL".to_string())),
            // A drive letter, e.g. `C:\specs\openapi.json`
            scheme if scheme.len() == 1 => Ok(Self::Local(PathBuf::from(source))),
            scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Retrieves the raw bytes of the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraduateError::SourceUnavailable`] if the request fails, the
    /// server answers with an error status, or the file cannot be read.
    pub fn retrieve(&self) -> Result<Vec<u8>, GraduateError> {
        let unavailable = |error: String| GraduateError::SourceUnavailable {
            source_name: self.to_string(),
            error,
        };

        match self {
            Self::Remote(url) => {
                debug!(%url, "fetching remote document");
                let response = reqwest::blocking::get(url.clone())
                    .and_then(reqwest::blocking::Response::error_for_status)
                    .map_err(|err| unavailable(err.to_string()))?;
                let bytes = response.bytes().map_err(|err| unavailable(err.to_string()))?;
                Ok(bytes.to_vec())
            }
            Self::Local(path) => {
                debug!(path = %path.display(), "reading local document");
                fs::read(path).map_err(|err| unavailable(err.to_string()))
            }
        }
    }
}

/// Retrieves and parses a document, JSON first then YAML.
///
/// # Errors
///
/// Returns [`GraduateError::SourceUnavailable`] if retrieval fails and
/// [`GraduateError::ParseFailure`] if the bytes are neither a JSON nor a YAML
/// mapping.
pub fn fetch(source: &Source) -> Result<Document, GraduateError> {
    let bytes = source.retrieve()?;
    let parsed = parse_document(&source.to_string(), &bytes)?;
    info!(%source, format = parsed.format(), "document loaded");

    Ok(parsed.into_document())
}
