//! Decoder, factory and sink contracts

use std::sync::Arc;

use crate::codec::{CodecSettings, CodecType, DecodedFrame, EncodedFrame};
use crate::error::DecodeError;

/// Contract implemented by concrete video decoders
///
/// Both built-in decoders (produced by a [`DecoderFactory`]) and external
/// decoders (supplied by the embedding application) implement this trait.
/// Implementations free their resources in `Drop`; there is no separate
/// release call.
pub trait VideoDecoder: Send {
    /// Prepare the decoder for the given settings
    ///
    /// Called once before the first [`decode`](Self::decode), and again
    /// whenever the decoder is recycled for a new payload type.
    fn init_decode(
        &mut self,
        settings: &CodecSettings,
        number_of_cores: i32,
    ) -> Result<(), DecodeError>;

    /// Decode one encoded frame
    ///
    /// Completed frames are delivered through the sink registered with
    /// [`register_decode_complete_callback`](Self::register_decode_complete_callback),
    /// not returned here; hardware decoders may complete asynchronously.
    fn decode(&mut self, frame: &EncodedFrame) -> Result<(), DecodeError>;

    /// Register the sink that receives completed frames
    ///
    /// Must be called after a successful init and before the first decode.
    fn register_decode_complete_callback(
        &mut self,
        sink: Arc<dyn DecodeSink>,
    ) -> Result<(), DecodeError>;

    /// Whether this decoder prefers frames to be held back until their
    /// render time (trades latency for ordering correctness)
    fn prefers_late_decoding(&self) -> bool {
        true
    }

    /// Human-readable implementation name for logs
    fn implementation_name(&self) -> &str {
        "unknown"
    }
}

/// Builds built-in decoder instances from a codec type
///
/// Must fail cleanly with [`DecodeError::UnsupportedCodec`] for codec types
/// that are unknown or compiled out, never panic.
pub trait DecoderFactory: Send {
    /// Create a new decoder for the codec type
    fn create_decoder(&self, codec_type: CodecType) -> Result<Box<dyn VideoDecoder>, DecodeError>;
}

/// Receive-callback sink for the decode path
///
/// One sink instance is shared by the pipeline: it is registered on every
/// freshly constructed decoder as the decode-complete handler, and notified
/// when the active payload type changes.
pub trait DecodeSink: Send + Sync {
    /// The active decoder changed to the given payload type
    ///
    /// Invoked exactly once per successful decoder construction, before the
    /// new instance produces any output.
    fn on_payload_type_changed(&self, payload_type: u8);

    /// A decoder finished decoding a frame
    fn on_frame_decoded(&self, frame: DecodedFrame);
}
