//! Common types for crash-round fairness verification.
//!
//! This crate holds the pure data layer: byte/hex utilities, the binary
//! event codec with its schema registry, and the data contracts shared
//! with the ledger RPC and backend collaborators. Nothing here performs
//! I/O or holds mutable state; every operation is a transformation over
//! immutable inputs.

pub mod api;
pub mod bytes;
pub mod events;

pub use api::{LedgerRecord, RoundMetadata};
use thiserror::Error;

/// Errors produced by the byte utilities and the event codec.
///
/// Malformed log lines encountered while scanning are deliberately NOT
/// represented here: a line that carries no payload, foreign base64, or
/// an unknown discriminator is skipped, not reported. This type covers
/// inputs the caller asserted to be well-formed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("hex string must have an even length")]
    OddHexLength,
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("unsupported field type")]
    UnsupportedFieldType,
    #[error("field value does not match its declared type")]
    ValueMismatch,
    #[error("expected a {expected}-byte array, got {got}")]
    ArrayLength { expected: usize, got: usize },
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("unknown event schema: {0}")]
    UnknownSchema(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
