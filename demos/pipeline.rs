//! Decode pipeline walkthrough
//!
//! Run with: cargo run --example pipeline
//!
//! Wires a decoder database to a toy factory and sink, then plays through
//! the lifecycle a real receive pipeline would drive:
//!
//! - Lazy construction on the first frame of a registered payload type
//! - Pass-through on repeated frames (no reinitialization)
//! - Cutover when the payload type changes mid-stream
//! - An externally supplied decoder taking over a payload type, then being
//!   deregistered while in use
//!
//! Set RUST_LOG=viddec_rs=info to watch the database's own logging.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use viddec_rs::{
    CodecSettings, CodecType, DecodeError, DecodeSink, DecodedFrame, DecoderDatabase,
    DecoderFactory, EncodedFrame, ExternalDecoderHandle, VideoDecoder,
};

/// Software decoder stand-in that echoes frames back to the sink
struct LoopbackDecoder {
    name: &'static str,
    sink: Option<Arc<dyn DecodeSink>>,
}

impl LoopbackDecoder {
    fn new(name: &'static str) -> Self {
        Self { name, sink: None }
    }
}

impl VideoDecoder for LoopbackDecoder {
    fn init_decode(
        &mut self,
        settings: &CodecSettings,
        number_of_cores: i32,
    ) -> Result<(), DecodeError> {
        println!(
            "[{}] init {}x{} ({} cores)",
            self.name, settings.width, settings.height, number_of_cores
        );
        Ok(())
    }

    fn decode(&mut self, frame: &EncodedFrame) -> Result<(), DecodeError> {
        if let Some(sink) = &self.sink {
            sink.on_frame_decoded(DecodedFrame::new(
                frame.width,
                frame.height,
                frame.timestamp,
                frame.data.clone(),
            ));
        }
        Ok(())
    }

    fn register_decode_complete_callback(
        &mut self,
        sink: Arc<dyn DecodeSink>,
    ) -> Result<(), DecodeError> {
        self.sink = Some(sink);
        Ok(())
    }

    fn implementation_name(&self) -> &str {
        self.name
    }
}

/// Factory with software decoders for VP8 and VP9 only
struct SoftwareFactory;

impl DecoderFactory for SoftwareFactory {
    fn create_decoder(&self, codec_type: CodecType) -> Result<Box<dyn VideoDecoder>, DecodeError> {
        match codec_type {
            CodecType::Vp8 => Ok(Box::new(LoopbackDecoder::new("sw-vp8"))),
            CodecType::Vp9 => Ok(Box::new(LoopbackDecoder::new("sw-vp9"))),
            other => Err(DecodeError::UnsupportedCodec(other)),
        }
    }
}

/// Sink printing everything the decode path produces
struct PrintingSink;

impl DecodeSink for PrintingSink {
    fn on_payload_type_changed(&self, payload_type: u8) {
        println!("[sink] active payload type -> {}", payload_type);
    }

    fn on_frame_decoded(&self, frame: DecodedFrame) {
        println!(
            "[sink] decoded {}x{} @ ts={}",
            frame.width, frame.height, frame.timestamp
        );
    }
}

fn decode_one(database: &mut DecoderDatabase, sink: &Arc<dyn DecodeSink>, frame: &EncodedFrame) {
    match database.decoder_for_frame(frame, sink) {
        Some(decoder) => {
            if let Err(e) = decoder.decode(frame) {
                println!("[pipeline] decode failed: {}", e);
            }
        }
        None => println!(
            "[pipeline] no decoder for payload type {}, dropping frame",
            frame.payload_type
        ),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut database = DecoderDatabase::new(Box::new(SoftwareFactory));
    let sink: Arc<dyn DecodeSink> = Arc::new(PrintingSink);

    // Negotiated receive codecs: VP8 on 96, VP9 on 98
    database
        .register_receive_codec(96, &CodecSettings::new(CodecType::Vp8), 2, false)
        .expect("valid registration");
    database
        .register_receive_codec(98, &CodecSettings::new(CodecType::Vp9), 2, false)
        .expect("valid registration");

    // First frame constructs lazily; the parsed resolution patches the
    // registered settings before initialization.
    let keyframe = EncodedFrame::new(96, 3000, Bytes::from_static(b"kf"))
        .with_resolution(640, 480)
        .keyframe();
    decode_one(&mut database, &sink, &keyframe);

    // Same payload type: the bound instance is reused as-is
    decode_one(
        &mut database,
        &sink,
        &EncodedFrame::new(96, 6000, Bytes::from_static(b"p")),
    );

    // Payload type switch: teardown + fresh construction
    decode_one(
        &mut database,
        &sink,
        &EncodedFrame::new(98, 9000, Bytes::from_static(b"kf2")).with_resolution(1280, 720),
    );

    // An application-supplied decoder takes over payload type 96
    let external: ExternalDecoderHandle = Arc::new(Mutex::new(LoopbackDecoder::new("hw-vp8")));
    database.register_external_decoder(Arc::clone(&external), 96);
    database
        .register_receive_codec(96, &CodecSettings::new(CodecType::Vp8), 2, false)
        .expect("valid registration");
    decode_one(
        &mut database,
        &sink,
        &EncodedFrame::new(96, 12000, Bytes::from_static(b"kf3")).with_resolution(640, 480),
    );

    // Deregistering the external decoder while in use empties the slot and
    // removes the registration with it; the frame after that is dropped.
    database.deregister_external_decoder(96);
    decode_one(
        &mut database,
        &sink,
        &EncodedFrame::new(96, 15000, Bytes::from_static(b"p")),
    );

    let stats = database.stats();
    println!(
        "[pipeline] done: {} registered codecs, {} external bindings, active={}",
        stats.registered_codecs, stats.external_decoders, stats.active_payload_type
    );
}
