//! Capability inspection settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CapsError, Result};
use crate::extensions::PlatformFilter;
use crate::version::GLES_VERSION_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsSettings {
    /// Extension token filter
    pub platform: PlatformFilter,
    /// Text stripped from the front of the driver's version string
    pub version_prefix: String,
}

impl Default for CapsSettings {
    fn default() -> Self {
        Self {
            platform: PlatformFilter::Standard,
            version_prefix: GLES_VERSION_PREFIX.to_string(),
        }
    }
}

impl CapsSettings {
    /// Defaults for the target being compiled for.
    pub fn for_target() -> Self {
        let platform = if cfg!(any(target_arch = "wasm32", target_os = "emscripten")) {
            PlatformFilter::WebEmbedded
        } else {
            PlatformFilter::Standard
        };
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(CapsError::Settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CapsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = CapsSettings::default();
        assert_eq!(settings.platform, PlatformFilter::Standard);
        assert_eq!(settings.version_prefix, "OpenGL ES ");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = CapsSettings::from_json(r#"{ "platform": "web-embedded" }"#).unwrap();
        assert_eq!(settings.platform, PlatformFilter::WebEmbedded);
        assert_eq!(settings.version_prefix, GLES_VERSION_PREFIX);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = CapsSettings::from_json(r#"{ "platform": "desktop" }"#).unwrap_err();
        assert!(matches!(err, CapsError::Settings(_)));
    }

    #[cfg(not(any(target_arch = "wasm32", target_os = "emscripten")))]
    #[test]
    fn native_targets_use_standard_filter() {
        assert_eq!(CapsSettings::for_target().platform, PlatformFilter::Standard);
    }
}
