use std::result;

use thiserror::Error;

/// Error types for PubMed fetch, extraction and export operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed at the transport level (DNS, connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    ///
    /// `message` carries the response body so the caller can report what
    /// NCBI said.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body is not well-formed XML, or a required element is missing
    #[error("XML parsing error: {message}")]
    XmlParseError { message: String },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<quick_xml::DeError> for PubMedError {
    fn from(err: quick_xml::DeError) -> Self {
        PubMedError::XmlParseError {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PubMedError {
    fn from(err: std::io::Error) -> Self {
        PubMedError::IoError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = result::Result<T, PubMedError>;
