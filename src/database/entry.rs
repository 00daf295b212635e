//! Registration table entries and database statistics

use crate::codec::CodecSettings;

/// One receive codec registration
///
/// Stored per payload type. The settings are the database's own copy; the
/// stored width/height may be overwritten by the resolution parsed from the
/// frame that triggers decoder construction.
#[derive(Debug, Clone)]
pub struct CodecRegistration {
    /// Decode settings the decoder is initialized with
    pub settings: CodecSettings,

    /// Number of cores the decoder may use
    pub number_of_cores: i32,

    /// Whether decoding must start on a keyframe
    pub require_key_frame: bool,
}

impl CodecRegistration {
    /// Create a registration entry
    ///
    /// Argument validation happens in the database's register call; entries
    /// are only ever built from validated input.
    pub(crate) fn new(
        settings: CodecSettings,
        number_of_cores: i32,
        require_key_frame: bool,
    ) -> Self {
        Self {
            settings,
            number_of_cores,
            require_key_frame,
        }
    }
}

/// Point-in-time snapshot of the database for logs and introspection
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Number of registered receive codecs
    pub registered_codecs: usize,

    /// Number of external decoder bindings
    pub external_decoders: usize,

    /// Payload type of the active decoder (0 = none)
    pub active_payload_type: u8,

    /// Whether a live decoder instance is bound
    pub has_active_decoder: bool,
}
