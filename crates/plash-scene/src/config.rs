//! Wallpaper configuration from URL query parameters
//!
//! The wallpaper host loads the page with a query string such as
//! `?variant=starfield&mode=adaptive`. Unknown keys are ignored; malformed
//! values keep their defaults and are reported back as warnings so the
//! caller can log them.

use serde::Serialize;

use crate::error::WallpaperError;
use crate::speed::SpeedMode;
use crate::variant::Variant;

/// Default speed endpoint, relative to the page
pub const DEFAULT_SPEED_URL: &str = "speed.json";

/// Default poll period
pub const DEFAULT_POLL_MS: u32 = 1000;

/// Shortest poll period accepted from the query
pub const MIN_POLL_MS: u32 = 100;

/// Longest poll period; `setInterval` takes a signed 32-bit delay
pub const MAX_POLL_MS: u32 = i32::MAX as u32;

/// Overlay image used by variants that show one by default
pub const DEFAULT_OVERLAY: &str = "airlogo.svg";

/// Effective page configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperConfig {
    pub variant: Variant,
    pub mode: SpeedMode,
    pub speed_url: String,
    pub poll_interval_ms: u32,
    pub show_fps: bool,
    /// Image composited over the scene once loaded
    pub overlay: Option<String>,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            mode: SpeedMode::default(),
            speed_url: DEFAULT_SPEED_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_MS,
            show_fps: true,
            overlay: Some(DEFAULT_OVERLAY.to_string()),
        }
    }
}

impl WallpaperConfig {
    /// Build from decoded query pairs.
    ///
    /// Returns the configuration plus one warning per rejected value.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> (Self, Vec<WallpaperError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();
        let mut overlay: Option<Option<String>> = None;

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "variant" => match Variant::from_id(value) {
                    Some(v) => config.variant = v,
                    None => warnings.push(WallpaperError::UnknownVariant(value.to_string())),
                },
                "mode" => match SpeedMode::from_id(value) {
                    Ok(m) => config.mode = m,
                    Err(e) => warnings.push(e),
                },
                "speed_url" if !value.is_empty() => config.speed_url = value.to_string(),
                "poll_ms" => match value.parse::<u32>() {
                    Ok(ms) => config.poll_interval_ms = ms.clamp(MIN_POLL_MS, MAX_POLL_MS),
                    Err(_) => warnings.push(WallpaperError::InvalidParameter {
                        key: "poll_ms",
                        value: value.to_string(),
                    }),
                },
                "fps" => match parse_flag(value) {
                    Some(show) => config.show_fps = show,
                    None => warnings.push(WallpaperError::InvalidParameter {
                        key: "fps",
                        value: value.to_string(),
                    }),
                },
                "overlay" => {
                    overlay = Some(match value {
                        "" | "none" => None,
                        url => Some(url.to_string()),
                    })
                }
                _ => {}
            }
        }

        config.overlay = match overlay {
            Some(explicit) => explicit,
            None if config.variant.has_default_overlay() => Some(DEFAULT_OVERLAY.to_string()),
            None => None,
        };

        (config, warnings)
    }

    /// Whether the speed endpoint should be polled
    pub fn polls_speed(&self) -> bool {
        self.mode.polls()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
