//! Error types for registration and conversion.

use thiserror::Error;

/// Errors produced by the registry and the typed/untyped converter.
#[derive(Debug, Error)]
pub enum Error {
    /// `to_document` was called without a value.
    #[error("nil object")]
    NilValue,

    /// `from_document` was called without a document.
    #[error("nil unstructured")]
    NilDocument,

    /// `from_document` was called without a target object.
    #[error("nil target object")]
    NilTarget,

    /// The runtime type of a value was never registered.
    #[error("no kind is registered for the type {type_name}")]
    NotFound { type_name: &'static str },

    /// A registration conflicts with an existing entry.
    #[error("{type_name} cannot be registered as {requested}: already registered as {existing}")]
    DuplicateKind {
        type_name: &'static str,
        requested: String,
        existing: String,
    },

    /// A document value does not fit the declared shape of its target field.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A document names a kind that is not registered.
    #[error("no kind {kind:?} is registered for version {api_version:?}")]
    UnknownKind { api_version: String, kind: String },

    /// A parsed value is not a mapping and cannot be a document.
    #[error("document must be a mapping, found {0}")]
    NotAnObject(&'static str),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
