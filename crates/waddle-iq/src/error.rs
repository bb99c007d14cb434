//! Error types for stanza generation.

use thiserror::Error;

/// Errors surfaced by the generator.
///
/// Encoders themselves are total; these cover the seams around them
/// (serialization, configuration, converting untrusted packets).
#[derive(Debug, Error)]
pub enum IqError {
    /// A response was requested for a packet without an id
    #[error("cannot respond to a packet without an id")]
    MissingId,

    /// XML serialization failed
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Client identity configuration could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to serialize a certificate for publication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not encode certificate: {0}")]
pub struct CertificateError(pub String);

impl CertificateError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
