//! Receive-side video decoder management for real-time media pipelines
//!
//! This crate manages decoding-capable codec instances for one receive
//! pipeline:
//! - A registration table of receivable codec configurations, keyed by the
//!   wire-carried payload type
//! - A registry of externally supplied decoder instances, referenced but
//!   never owned
//! - A single active decoder slot that lazily constructs, initializes and
//!   retires the live instance as the payload type on arriving frames
//!   changes
//!
//! Concrete codec implementations stay outside: built-in decoders come from
//! a [`DecoderFactory`] the embedding application injects, and external
//! decoders are bound at runtime per payload type. Decoded output flows
//! through the [`DecodeSink`] registered on every constructed instance.
//!
//! The database is synchronous and single-owner by design. Control-plane
//! registration calls and decode-plane lookups must be serialized by the
//! caller, typically by funneling both onto the decode thread.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bytes::Bytes;
//! use viddec_rs::{
//!     CodecSettings, CodecType, DecodeSink, DecoderDatabase, DecoderFactory, EncodedFrame,
//!     VideoDecoder,
//! };
//! # use viddec_rs::{DecodeError, DecodedFrame};
//! # struct NullDecoder;
//! # impl VideoDecoder for NullDecoder {
//! #     fn init_decode(&mut self, _s: &CodecSettings, _n: i32) -> Result<(), DecodeError> {
//! #         Ok(())
//! #     }
//! #     fn decode(&mut self, _f: &EncodedFrame) -> Result<(), DecodeError> { Ok(()) }
//! #     fn register_decode_complete_callback(
//! #         &mut self,
//! #         _sink: Arc<dyn DecodeSink>,
//! #     ) -> Result<(), DecodeError> { Ok(()) }
//! # }
//! # struct NullFactory;
//! # impl DecoderFactory for NullFactory {
//! #     fn create_decoder(
//! #         &self,
//! #         codec_type: CodecType,
//! #     ) -> Result<Box<dyn VideoDecoder>, DecodeError> {
//! #         match codec_type {
//! #             CodecType::Vp8 => Ok(Box::new(NullDecoder)),
//! #             other => Err(DecodeError::UnsupportedCodec(other)),
//! #         }
//! #     }
//! # }
//! # struct NullSink;
//! # impl DecodeSink for NullSink {
//! #     fn on_payload_type_changed(&self, _payload_type: u8) {}
//! #     fn on_frame_decoded(&self, _frame: DecodedFrame) {}
//! # }
//! let mut database = DecoderDatabase::new(Box::new(NullFactory));
//! database
//!     .register_receive_codec(96, &CodecSettings::new(CodecType::Vp8), 2, false)
//!     .unwrap();
//!
//! let sink: Arc<dyn DecodeSink> = Arc::new(NullSink);
//! let frame = EncodedFrame::new(96, 3000, Bytes::from_static(&[0x10]))
//!     .with_resolution(640, 480)
//!     .keyframe();
//!
//! if let Some(decoder) = database.decoder_for_frame(&frame, &sink) {
//!     decoder.decode(&frame).unwrap();
//! }
//! ```

pub mod codec;
pub mod database;
pub mod decoder;
pub mod error;

pub use codec::{CodecSettings, CodecType, DecodedFrame, EncodedFrame};
pub use database::{CodecRegistration, DatabaseStats, DecoderDatabase};
pub use decoder::{
    DecodeSink, DecoderFactory, ExternalDecoderHandle, GenericDecoder, VideoDecoder,
};
pub use error::{DecodeError, Error, RegistryError, Result};
