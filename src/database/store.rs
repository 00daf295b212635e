//! Decoder database implementation
//!
//! The central store that owns the registration tables and the active
//! decoder slot, and runs the construction pipeline on a slot miss.

use std::collections::HashMap;
use std::sync::Arc;

use crate::codec::{CodecSettings, CodecType, EncodedFrame};
use crate::decoder::{DecodeSink, DecoderFactory, ExternalDecoderHandle, GenericDecoder};
use crate::error::RegistryError;

use super::entry::{CodecRegistration, DatabaseStats};

/// Decoder database for one receive pipeline
///
/// Owns the registered codec configurations, the external decoder bindings
/// and at most one live decoder instance. Factory-built instances are owned
/// outright; external instances are only referenced, and tearing one down
/// releases the reference without touching the decoder behind it.
pub struct DecoderDatabase {
    /// Factory for built-in decoder instances
    factory: Box<dyn DecoderFactory>,

    /// Map of payload type to receive codec registration
    registrations: HashMap<u8, CodecRegistration>,

    /// Map of payload type to externally supplied decoder
    external_decoders: HashMap<u8, ExternalDecoderHandle>,

    /// Payload type the active decoder was built for (0 = none)
    active_payload_type: u8,

    /// Settings snapshot the active decoder was initialized with
    active_settings: Option<CodecSettings>,

    /// The live decoder instance
    active_decoder: Option<GenericDecoder>,
}

impl DecoderDatabase {
    /// Create an empty database using the given factory for built-in codecs
    pub fn new(factory: Box<dyn DecoderFactory>) -> Self {
        Self {
            factory,
            registrations: HashMap::new(),
            external_decoders: HashMap::new(),
            active_payload_type: 0,
            active_settings: None,
            active_decoder: None,
        }
    }

    /// Register a receive codec for a payload type
    ///
    /// Any prior registration for the payload type is replaced wholesale.
    /// Rejected registrations leave the table untouched.
    pub fn register_receive_codec(
        &mut self,
        payload_type: u8,
        settings: &CodecSettings,
        number_of_cores: i32,
        require_key_frame: bool,
    ) -> Result<(), RegistryError> {
        if number_of_cores < 0 {
            return Err(RegistryError::InvalidCoreCount(number_of_cores));
        }
        if settings.codec_type == CodecType::Unknown {
            return Err(RegistryError::UnknownCodecType);
        }

        // Run the removal path first: replacing the active payload type must
        // also invalidate its snapshot so the next frame rebuilds with the
        // new settings.
        self.deregister_receive_codec(payload_type);
        self.registrations.insert(
            payload_type,
            CodecRegistration::new(settings.clone(), number_of_cores, require_key_frame),
        );

        tracing::info!(
            payload_type,
            codec = %settings.codec_type,
            number_of_cores,
            require_key_frame,
            "Receive codec registered"
        );
        Ok(())
    }

    /// Remove the receive codec registered for a payload type
    ///
    /// Returns false if none was registered. If the payload type is the
    /// active one, the settings snapshot is reset; the live instance stays
    /// bound and is only torn down when a frame with a differing payload
    /// type arrives.
    pub fn deregister_receive_codec(&mut self, payload_type: u8) -> bool {
        if self.registrations.remove(&payload_type).is_none() {
            return false;
        }

        if self.active_payload_type == payload_type {
            self.reset_active_snapshot();
        }

        tracing::info!(payload_type, "Receive codec deregistered");
        true
    }

    /// Look up the registration for a payload type
    pub fn registration(&self, payload_type: u8) -> Option<&CodecRegistration> {
        self.registrations.get(&payload_type)
    }

    /// Whether any receive codec is registered
    pub fn has_registrations(&self) -> bool {
        !self.registrations.is_empty()
    }

    /// Bind an externally supplied decoder to a payload type
    ///
    /// Replacement goes through the full deregistration path, so a binding
    /// the active slot still references can never be silently overwritten.
    /// The payload type is not decodable until a receive codec is also
    /// registered for it.
    pub fn register_external_decoder(&mut self, decoder: ExternalDecoderHandle, payload_type: u8) {
        self.deregister_external_decoder(payload_type);
        self.external_decoders.insert(payload_type, decoder);
        tracing::info!(payload_type, "External decoder registered");
    }

    /// Remove the external decoder bound to a payload type
    ///
    /// Returns false if none was bound. Tears down the active slot when the
    /// live instance is backed by this binding, and removes the matching
    /// receive codec registration — a deregistered external decoder must
    /// not stay reachable through a stale registration.
    pub fn deregister_external_decoder(&mut self, payload_type: u8) -> bool {
        let Some(handle) = self.external_decoders.get(&payload_type) else {
            return false;
        };

        // The recorded payload type can be out of date between a
        // re-registration and the first frame decoded after it, so the
        // in-use check matches the live instance by identity instead.
        let backs_active = self
            .active_decoder
            .as_ref()
            .is_some_and(|decoder| decoder.is_same_decoder(handle));
        if backs_active {
            tracing::info!(
                payload_type,
                "Releasing active decoder backed by deregistered external instance"
            );
            self.active_decoder = None;
        }

        self.deregister_receive_codec(payload_type);
        self.external_decoders.remove(&payload_type);

        tracing::info!(payload_type, "External decoder deregistered");
        true
    }

    /// Get the decoder for an encoded frame, constructing one on demand
    ///
    /// A frame whose payload type matches the bound one — or carries the
    /// pass-through sentinel 0 — returns the bound instance unchanged.
    /// Anything else tears down the current instance and runs construction:
    /// registration lookup, external-or-factory instance, best-effort
    /// resolution patch, initialization, sink notification and callback
    /// registration. Every failure leaves the slot empty and returns `None`;
    /// the caller drops or defers the frame and the next one retries
    /// naturally.
    pub fn decoder_for_frame(
        &mut self,
        frame: &EncodedFrame,
        sink: &Arc<dyn DecodeSink>,
    ) -> Option<&mut GenericDecoder> {
        let payload_type = frame.payload_type;
        if payload_type == self.active_payload_type || payload_type == 0 {
            return self.active_decoder.as_mut();
        }

        if self.active_decoder.is_some() {
            self.active_decoder = None;
            self.reset_active_snapshot();
        }

        let (mut decoder, settings) = self.create_and_init_decoder(frame)?;

        self.active_payload_type = payload_type;
        self.active_settings = Some(settings);
        sink.on_payload_type_changed(payload_type);

        if let Err(e) = decoder.register_decode_complete_callback(Arc::clone(sink)) {
            tracing::error!(
                payload_type,
                error = %e,
                "Discarding decoder without a working decode-complete callback"
            );
            self.reset_active_snapshot();
            return None;
        }

        self.active_decoder = Some(decoder);
        self.active_decoder.as_mut()
    }

    /// The live decoder instance, if any
    ///
    /// No side effects; never triggers construction.
    pub fn current_decoder(&mut self) -> Option<&mut GenericDecoder> {
        self.active_decoder.as_mut()
    }

    /// Settings snapshot the active decoder was initialized with
    ///
    /// `None` when the slot is empty, and after the active payload type's
    /// registration was removed out from under the live instance.
    pub fn active_settings(&self) -> Option<&CodecSettings> {
        self.active_settings.as_ref()
    }

    /// Whether the active decoder prefers late decoding
    ///
    /// Defaults to true when no decoder is bound, favoring ordering
    /// correctness over latency.
    pub fn prefers_late_decoding(&self) -> bool {
        self.active_decoder
            .as_ref()
            .map_or(true, |decoder| decoder.prefers_late_decoding())
    }

    /// Snapshot of the database state
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            registered_codecs: self.registrations.len(),
            external_decoders: self.external_decoders.len(),
            active_payload_type: self.active_payload_type,
            has_active_decoder: self.active_decoder.is_some(),
        }
    }

    /// Reset the active snapshot to the empty sentinel
    fn reset_active_snapshot(&mut self) {
        self.active_payload_type = 0;
        self.active_settings = None;
    }

    /// Build and initialize a decoder for the frame's payload type
    ///
    /// Returns the instance together with the settings it was initialized
    /// with, or `None` with the cause logged.
    fn create_and_init_decoder(
        &mut self,
        frame: &EncodedFrame,
    ) -> Option<(GenericDecoder, CodecSettings)> {
        let payload_type = frame.payload_type;
        tracing::info!(payload_type, "Initializing decoder");

        let Some(registration) = self.registrations.get_mut(&payload_type) else {
            tracing::error!(payload_type, "No receive codec registered for payload type");
            return None;
        };

        let mut decoder = match self.external_decoders.get(&payload_type) {
            Some(handle) => GenericDecoder::external(Arc::clone(handle)),
            None => match self.factory.create_decoder(registration.settings.codec_type) {
                Ok(instance) => GenericDecoder::internal(instance),
                Err(e) => {
                    tracing::error!(
                        payload_type,
                        codec = %registration.settings.codec_type,
                        error = %e,
                        "Failed to create decoder"
                    );
                    return None;
                }
            },
        };

        // Carry the parsed resolution into the stored settings so the first
        // decoded frame does not force a reinitialization. Best effort: the
        // transport may not have recovered width/height yet.
        if frame.has_resolution() {
            registration.settings.width = frame.width;
            registration.settings.height = frame.height;
        }

        if let Err(e) = decoder.init_decode(&registration.settings, registration.number_of_cores) {
            tracing::error!(
                payload_type,
                implementation = %decoder.implementation_name(),
                error = %e,
                "Decoder initialization failed"
            );
            return None;
        }

        Some((decoder, registration.settings.clone()))
    }
}
