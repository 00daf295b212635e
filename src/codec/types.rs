//! Codec types and decode settings

/// Video codec type carried by a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// H.264/AVC
    H264,
    /// AV1
    Av1,
    /// Generic pass-through codec (application-defined bitstream)
    Generic,
    /// Unknown codec, sentinel value for unset settings
    Unknown,
}

impl CodecType {
    /// Short lowercase name (e.g. for log fields)
    pub fn name(&self) -> &'static str {
        match self {
            CodecType::Vp8 => "vp8",
            CodecType::Vp9 => "vp9",
            CodecType::H264 => "h264",
            CodecType::Av1 => "av1",
            CodecType::Generic => "generic",
            CodecType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CodecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode settings for one receive codec
///
/// Carries the negotiated parameters a decoder is initialized with. The
/// stored width/height are best-effort: the database overwrites them with
/// the resolution parsed from the triggering frame when available, so the
/// first decoded frame does not force a reinitialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecSettings {
    /// Codec type
    pub codec_type: CodecType,

    /// Frame width in pixels (0 = not yet known)
    pub width: u32,

    /// Frame height in pixels (0 = not yet known)
    pub height: u32,

    /// Maximum framerate in fps
    pub max_framerate: u32,

    /// Start bitrate in kbit/s
    pub start_bitrate_kbps: u32,

    /// Minimum bitrate in kbit/s
    pub min_bitrate_kbps: u32,

    /// Maximum bitrate in kbit/s
    pub max_bitrate_kbps: u32,

    /// Maximum quantizer the decoder should expect
    pub qp_max: u32,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            codec_type: CodecType::Unknown,
            width: 0,
            height: 0,
            max_framerate: 30,
            start_bitrate_kbps: 300,
            min_bitrate_kbps: 30,
            max_bitrate_kbps: 0, // Unlimited
            qp_max: 56,
        }
    }
}

impl CodecSettings {
    /// Create settings for a codec type with default parameters
    pub fn new(codec_type: CodecType) -> Self {
        Self {
            codec_type,
            ..Default::default()
        }
    }

    /// Set the frame resolution
    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum framerate
    pub fn max_framerate(mut self, fps: u32) -> Self {
        self.max_framerate = fps;
        self
    }

    /// Set the start bitrate
    pub fn start_bitrate_kbps(mut self, kbps: u32) -> Self {
        self.start_bitrate_kbps = kbps;
        self
    }

    /// Set the bitrate range
    pub fn bitrate_range_kbps(mut self, min: u32, max: u32) -> Self {
        self.min_bitrate_kbps = min;
        self.max_bitrate_kbps = max;
        self
    }

    /// Set the maximum quantizer
    pub fn qp_max(mut self, qp: u32) -> Self {
        self.qp_max = qp;
        self
    }
}
