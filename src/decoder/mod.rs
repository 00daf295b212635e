//! Decoder abstraction
//!
//! This module provides:
//! - The [`VideoDecoder`] contract implemented by concrete codecs
//! - The [`DecoderFactory`] capability used to build built-in decoders
//! - The [`DecodeSink`] receive-callback contract
//! - [`GenericDecoder`], the owned-or-borrowed wrapper the database caches
//!
//! No concrete codec lives here. Built-in implementations come from the
//! embedding application's factory; external implementations are injected
//! at runtime as shared [`ExternalDecoderHandle`]s.

pub mod generic;
pub mod traits;

pub use generic::{ExternalDecoderHandle, GenericDecoder};
pub use traits::{DecodeSink, DecoderFactory, VideoDecoder};
