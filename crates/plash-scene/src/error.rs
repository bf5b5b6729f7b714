//! Error types for wallpaper setup and rendering

/// Errors that can occur while setting up or running a wallpaper.
///
/// Frame-level problems (`SkipFrame`) are expected during resizes and are
/// not fatal; everything else halts the animation.
#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    /// No GPU adapter compatible with the canvas surface was found.
    #[error("failed to find suitable GPU adapter")]
    NoAdapter,

    /// The adapter refused to create a device.
    #[error("failed to create device: {0}")]
    RequestDevice(String),

    /// The canvas surface could not be created.
    #[error("failed to create surface: {0}")]
    Surface(String),

    /// The renderer is only available in the browser.
    #[error("renderer only supports WASM targets")]
    UnsupportedPlatform,

    /// The GPU ran out of memory.
    #[error("out of GPU memory")]
    OutOfMemory,

    /// The current frame could not be drawn and should be skipped.
    #[error("skipped frame: {0}")]
    SkipFrame(&'static str),

    /// A `speed.json` body could not be parsed.
    #[error("invalid speed payload: {0}")]
    InvalidSpeedPayload(#[from] serde_json::Error),

    /// A query value did not name a known variant.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// A query value did not name a known speed mode.
    #[error("unknown speed mode: {0}")]
    UnknownMode(String),

    /// A query parameter had a malformed value.
    #[error("invalid value for `{key}`: {value}")]
    InvalidParameter { key: &'static str, value: String },
}

impl WallpaperError {
    /// Whether the animation can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WallpaperError::SkipFrame(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_frame_is_recoverable() {
        assert!(WallpaperError::SkipFrame("surface reconfigured").is_recoverable());
        assert!(!WallpaperError::OutOfMemory.is_recoverable());
        assert!(!WallpaperError::NoAdapter.is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = WallpaperError::InvalidParameter {
            key: "poll_ms",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for `poll_ms`: abc");
        assert_eq!(
            WallpaperError::UnknownVariant("nebula".to_string()).to_string(),
            "unknown variant: nebula"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WallpaperError = parse.into();
        assert!(matches!(err, WallpaperError::InvalidSpeedPayload(_)));
    }
}
