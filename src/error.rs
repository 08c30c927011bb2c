use std::result;

use thiserror::Error;

/// Error types for DBLP client operations
#[derive(Error, Debug)]
pub enum DblpError {
    /// HTTP request failed (network, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// A required attribute or element is absent from the document
    #[error("Missing required {field} in {record} record")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// The `<year>` element does not hold an integer
    #[error("Invalid publication year: {value:?}")]
    InvalidYear { value: String },

    /// The publication document holds no publication element
    #[error("Publication record not found: key {key}")]
    RecordNotFound { key: String },

    /// A field name outside the record's declared field set was requested
    #[error("Unknown attribute `{field}` for {record} record")]
    UnknownAttribute { record: &'static str, field: String },

    /// Configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Broad failure category of a [`DblpError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-success response from the remote service
    Transport,
    /// Malformed document, or a required value missing from it
    Parse,
    /// The publication document contained no publication record
    RecordNotFound,
    /// Programmer error: a field that the record does not declare
    UnknownAttribute,
    /// Client configuration error
    Config,
}

impl DblpError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DblpError::RequestError(_) | DblpError::ApiError { .. } => ErrorKind::Transport,
            DblpError::XmlError(_)
            | DblpError::MissingField { .. }
            | DblpError::InvalidYear { .. } => ErrorKind::Parse,
            DblpError::RecordNotFound { .. } => ErrorKind::RecordNotFound,
            DblpError::UnknownAttribute { .. } => ErrorKind::UnknownAttribute,
            DblpError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }
}

pub type Result<T> = result::Result<T, DblpError>;
