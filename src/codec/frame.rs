//! Frame descriptors crossing the decode boundary
//!
//! [`EncodedFrame`] is what the transport/ordering subsystem hands to the
//! decode path; [`DecodedFrame`] is what a decoder hands back to the
//! decode-complete sink. Payloads are `bytes::Bytes`, so clones are
//! reference-counted rather than copied.

use bytes::Bytes;

/// An encoded video frame ready for decoding
///
/// The payload type selects the receive codec. Payload type 0 is reserved
/// as a pass-through sentinel meaning "keep the current decoder". Width and
/// height are the resolution parsed from the bitstream, 0 when the parser
/// has not (yet) recovered them.
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    /// Payload type identifying the negotiated codec configuration
    pub payload_type: u8,

    /// Parsed frame width in pixels (0 = unknown)
    pub width: u32,

    /// Parsed frame height in pixels (0 = unknown)
    pub height: u32,

    /// RTP-style media timestamp
    pub timestamp: u32,

    /// Wall-clock render time in milliseconds
    pub render_time_ms: i64,

    /// Whether this frame is a keyframe
    pub is_keyframe: bool,

    /// Encoded bitstream data
    pub data: Bytes,
}

impl EncodedFrame {
    /// Create a frame with unknown resolution
    pub fn new(payload_type: u8, timestamp: u32, data: Bytes) -> Self {
        Self {
            payload_type,
            width: 0,
            height: 0,
            timestamp,
            render_time_ms: 0,
            is_keyframe: false,
            data,
        }
    }

    /// Set the resolution parsed from the bitstream
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark the frame as a keyframe
    pub fn keyframe(mut self) -> Self {
        self.is_keyframe = true;
        self
    }

    /// Set the render time
    pub fn with_render_time_ms(mut self, render_time_ms: i64) -> Self {
        self.render_time_ms = render_time_ms;
        self
    }

    /// Whether the transport parsed a usable resolution out of this frame
    pub fn has_resolution(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A decoded video frame
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// RTP-style media timestamp copied from the encoded frame
    pub timestamp: u32,

    /// Wall-clock render time in milliseconds
    pub render_time_ms: i64,

    /// Raw pixel data
    pub data: Bytes,
}

impl DecodedFrame {
    /// Create a decoded frame
    pub fn new(width: u32, height: u32, timestamp: u32, data: Bytes) -> Self {
        Self {
            width,
            height,
            timestamp,
            render_time_ms: 0,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_has_unknown_resolution() {
        let frame = EncodedFrame::new(96, 9000, Bytes::from_static(&[0x01, 0x02]));

        assert_eq!(frame.payload_type, 96);
        assert!(!frame.has_resolution());
        assert!(!frame.is_keyframe);
    }

    #[test]
    fn test_with_resolution() {
        let frame = EncodedFrame::new(96, 0, Bytes::new()).with_resolution(640, 480);

        assert!(frame.has_resolution());
        assert_eq!(frame.width, 640);
        assert_eq!(frame.height, 480);
    }

    #[test]
    fn test_partial_resolution_is_not_usable() {
        // Height still unparsed
        let frame = EncodedFrame::new(96, 0, Bytes::new()).with_resolution(640, 0);

        assert!(!frame.has_resolution());
    }

    #[test]
    fn test_keyframe_builder() {
        let frame = EncodedFrame::new(96, 0, Bytes::new())
            .keyframe()
            .with_render_time_ms(1234);

        assert!(frame.is_keyframe);
        assert_eq!(frame.render_time_ms, 1234);
    }
}
