//! Error handling for SeatKit
//!
//! Provides error types for all layers of the engine:
//! - Validation errors (form-level, field-tagged)
//! - Document errors (lookups against the in-memory seat map)
//! - Persistence errors (load/save boundary)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Field-tagged errors produced by form-level validation (seat generator
/// config, zone name, renumbering scheme). These are returned as values and
/// shown next to the offending field; they are never panics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field is outside its accepted range
    #[error("{field}: {value} is outside {min}..={max}")]
    OutOfRange {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The lowest accepted value.
        min: f64,
        /// The highest accepted value.
        max: f64,
    },

    /// A required field is empty
    #[error("{field}: must not be empty")]
    Empty {
        /// The offending field name.
        field: &'static str,
    },

    /// A field does not match its expected format
    #[error("{field}: {reason}")]
    Invalid {
        /// The offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// The name of the field this error is attached to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::Empty { field } => field,
            ValidationError::Invalid { field, .. } => field,
        }
    }
}

/// Document error type
///
/// Represents failed lookups and structural violations against the
/// in-memory seat-map document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// No zone with the given id exists
    #[error("Unknown zone: {id}")]
    UnknownZone {
        /// The id that failed to resolve.
        id: String,
    },

    /// No seat with the given id exists
    #[error("Unknown seat: {id}")]
    UnknownSeat {
        /// The id that failed to resolve.
        id: String,
    },
}

/// Persistence error type
///
/// Represents failures at the load/save boundary. The engine performs no
/// retries; these surface as a single terminal error state and the operator
/// re-invokes the operation.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The document could not be read
    #[error("Failed to read document: {reason}")]
    Read {
        /// Why the read failed.
        reason: String,
    },

    /// The document could not be parsed
    #[error("Failed to parse document: {reason}")]
    Parse {
        /// Why the parse failed.
        reason: String,
    },

    /// The document could not be written
    #[error("Failed to write document: {reason}")]
    Write {
        /// Why the write failed.
        reason: String,
    },
}

/// Main error type for SeatKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a document error
    pub fn is_document(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
