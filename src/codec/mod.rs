//! Codec model
//!
//! This module provides:
//! - Codec type enumeration and per-payload decode settings
//! - Encoded frame descriptors consumed by the decode path
//! - Decoded frame output handed to the receive sink

pub mod frame;
pub mod types;

pub use frame::{DecodedFrame, EncodedFrame};
pub use types::{CodecSettings, CodecType};
