//! Error types
//!
//! Crate-wide error taxonomy:
//! - [`RegistryError`]: invalid registration arguments, rejected before any
//!   table mutation
//! - [`DecodeError`]: failures from decoder instances (initialization,
//!   decoding, callback wiring)
//!
//! Absent payload types are reported as `bool`/`Option` returns rather than
//! errors, and construction failures collapse to "no decoder available" on
//! the frame path. None of these are fatal to the pipeline.

use crate::codec::CodecType;

/// Top-level error type for the crate
#[derive(Debug, Clone)]
pub enum Error {
    /// Registration was rejected
    Registry(RegistryError),
    /// A decoder instance failed
    Decode(DecodeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Registry(e) => Some(e),
            Error::Decode(e) => Some(e),
        }
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codec registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Core count was negative
    InvalidCoreCount(i32),
    /// Settings carried the unknown/sentinel codec type
    UnknownCodecType,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidCoreCount(n) => {
                write!(f, "Invalid core count: {}", n)
            }
            RegistryError::UnknownCodecType => {
                write!(f, "Cannot register the unknown codec type")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Error type for decoder instance operations
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// The factory has no decoder for this codec type
    UnsupportedCodec(CodecType),
    /// Decoder initialization failed
    InitFailed(String),
    /// The decode-complete callback could not be registered
    CallbackRegistration(String),
    /// The decoder rejected or failed on a frame
    DecodeFailed(String),
    /// Decode was attempted before initialization
    NotInitialized,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnsupportedCodec(codec) => {
                write!(f, "No decoder available for codec: {}", codec)
            }
            DecodeError::InitFailed(msg) => {
                write!(f, "Decoder initialization failed: {}", msg)
            }
            DecodeError::CallbackRegistration(msg) => {
                write!(f, "Decode callback registration failed: {}", msg)
            }
            DecodeError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            DecodeError::NotInitialized => write!(f, "Decoder not initialized"),
        }
    }
}

impl std::error::Error for DecodeError {}
