//! Generic decoder wrapper
//!
//! [`GenericDecoder`] unifies the two ways the database can hold a decoder:
//! an exclusively owned built-in instance, or a borrowed reference to an
//! instance the embedding application owns. Callers decode through one
//! interface and never learn which variant they hit.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::codec::{CodecSettings, EncodedFrame};
use crate::decoder::traits::{DecodeSink, VideoDecoder};
use crate::error::DecodeError;

/// Shared handle form in which external decoders are supplied
///
/// The database only ever clones and drops this handle; the embedding
/// application keeps its own clone, so dropping ours can never deallocate
/// the decoder.
pub type ExternalDecoderHandle = Arc<Mutex<dyn VideoDecoder>>;

/// Owned built-in instance or borrowed external instance
enum DecoderInstance {
    /// Factory-built decoder, exclusively owned
    Internal(Box<dyn VideoDecoder>),
    /// Externally supplied decoder, reference only
    External(ExternalDecoderHandle),
}

/// The decoder instance cached in the active slot
///
/// Dropping a `GenericDecoder` drops the built-in instance it owns, or
/// releases the external reference without touching the instance behind it.
pub struct GenericDecoder {
    instance: DecoderInstance,
}

impl GenericDecoder {
    /// Wrap an owned, factory-built decoder
    pub(crate) fn internal(decoder: Box<dyn VideoDecoder>) -> Self {
        Self {
            instance: DecoderInstance::Internal(decoder),
        }
    }

    /// Wrap a borrowed external decoder
    pub(crate) fn external(handle: ExternalDecoderHandle) -> Self {
        Self {
            instance: DecoderInstance::External(handle),
        }
    }

    /// Whether this wraps an externally supplied decoder
    pub fn is_external(&self) -> bool {
        matches!(self.instance, DecoderInstance::External(_))
    }

    /// Whether this decoder is backed by the given external handle
    ///
    /// Identity is an explicit capability here: the owned variant is never
    /// backed by a handle, and the external variant compares the underlying
    /// allocation, not the trait object.
    pub fn is_same_decoder(&self, handle: &ExternalDecoderHandle) -> bool {
        match &self.instance {
            DecoderInstance::Internal(_) => false,
            DecoderInstance::External(own) => Arc::ptr_eq(own, handle),
        }
    }

    /// Initialize the underlying decoder with the given settings
    pub(crate) fn init_decode(
        &mut self,
        settings: &CodecSettings,
        number_of_cores: i32,
    ) -> Result<(), DecodeError> {
        match &mut self.instance {
            DecoderInstance::Internal(decoder) => decoder.init_decode(settings, number_of_cores),
            DecoderInstance::External(handle) => {
                handle.lock().init_decode(settings, number_of_cores)
            }
        }
    }

    /// Register the decode-complete sink on the underlying decoder
    pub(crate) fn register_decode_complete_callback(
        &mut self,
        sink: Arc<dyn DecodeSink>,
    ) -> Result<(), DecodeError> {
        match &mut self.instance {
            DecoderInstance::Internal(decoder) => decoder.register_decode_complete_callback(sink),
            DecoderInstance::External(handle) => {
                handle.lock().register_decode_complete_callback(sink)
            }
        }
    }

    /// Decode one encoded frame
    pub fn decode(&mut self, frame: &EncodedFrame) -> Result<(), DecodeError> {
        tracing::trace!(
            payload_type = frame.payload_type,
            timestamp = frame.timestamp,
            "Decoding frame"
        );

        match &mut self.instance {
            DecoderInstance::Internal(decoder) => decoder.decode(frame),
            DecoderInstance::External(handle) => handle.lock().decode(frame),
        }
    }

    /// Whether the underlying decoder prefers late decoding
    pub fn prefers_late_decoding(&self) -> bool {
        match &self.instance {
            DecoderInstance::Internal(decoder) => decoder.prefers_late_decoding(),
            DecoderInstance::External(handle) => handle.lock().prefers_late_decoding(),
        }
    }

    /// Name of the underlying implementation, for logs
    pub fn implementation_name(&self) -> String {
        match &self.instance {
            DecoderInstance::Internal(decoder) => decoder.implementation_name().to_string(),
            DecoderInstance::External(handle) => handle.lock().implementation_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    /// Minimal decoder that counts calls
    #[derive(Default)]
    struct CountingDecoder {
        init_calls: u32,
        decode_calls: u32,
        late_decoding: bool,
    }

    impl VideoDecoder for CountingDecoder {
        fn init_decode(
            &mut self,
            _settings: &CodecSettings,
            _number_of_cores: i32,
        ) -> Result<(), DecodeError> {
            self.init_calls += 1;
            Ok(())
        }

        fn decode(&mut self, _frame: &EncodedFrame) -> Result<(), DecodeError> {
            self.decode_calls += 1;
            Ok(())
        }

        fn register_decode_complete_callback(
            &mut self,
            _sink: Arc<dyn DecodeSink>,
        ) -> Result<(), DecodeError> {
            Ok(())
        }

        fn prefers_late_decoding(&self) -> bool {
            self.late_decoding
        }

        fn implementation_name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_internal_is_not_backed_by_any_handle() {
        let decoder = GenericDecoder::internal(Box::new(CountingDecoder::default()));
        let handle: ExternalDecoderHandle = Arc::new(Mutex::new(CountingDecoder::default()));

        assert!(!decoder.is_external());
        assert!(!decoder.is_same_decoder(&handle));
    }

    #[test]
    fn test_external_identity_matches_its_own_handle_only() {
        let handle: ExternalDecoderHandle = Arc::new(Mutex::new(CountingDecoder::default()));
        let other: ExternalDecoderHandle = Arc::new(Mutex::new(CountingDecoder::default()));
        let decoder = GenericDecoder::external(Arc::clone(&handle));

        assert!(decoder.is_external());
        assert!(decoder.is_same_decoder(&handle));
        assert!(!decoder.is_same_decoder(&other));
    }

    #[test]
    fn test_dropping_external_wrapper_keeps_instance_alive() {
        let concrete = Arc::new(Mutex::new(CountingDecoder::default()));
        let handle: ExternalDecoderHandle = concrete.clone();
        let decoder = GenericDecoder::external(Arc::clone(&handle));

        assert_eq!(Arc::strong_count(&handle), 3);
        drop(decoder);
        drop(handle);

        // Instance is still usable by its owner
        concrete
            .lock()
            .init_decode(&CodecSettings::new(crate::codec::CodecType::Vp8), 1)
            .unwrap();
        assert_eq!(concrete.lock().init_calls, 1);
    }

    #[test]
    fn test_decode_forwards_to_external_instance() {
        let concrete = Arc::new(Mutex::new(CountingDecoder::default()));
        let handle: ExternalDecoderHandle = concrete.clone();
        let mut decoder = GenericDecoder::external(Arc::clone(&handle));

        let frame = EncodedFrame::new(96, 0, Bytes::from_static(&[0x00]));
        decoder.decode(&frame).unwrap();
        decoder.decode(&frame).unwrap();

        assert_eq!(concrete.lock().decode_calls, 2);
    }

    #[test]
    fn test_prefers_late_decoding_forwards() {
        let decoder = GenericDecoder::internal(Box::new(CountingDecoder {
            late_decoding: true,
            ..Default::default()
        }));
        assert!(decoder.prefers_late_decoding());

        let decoder = GenericDecoder::internal(Box::new(CountingDecoder::default()));
        assert!(!decoder.prefers_late_decoding());
    }

    #[test]
    fn test_implementation_name_forwards() {
        let decoder = GenericDecoder::internal(Box::new(CountingDecoder::default()));
        assert_eq!(decoder.implementation_name(), "counting");
    }
}
