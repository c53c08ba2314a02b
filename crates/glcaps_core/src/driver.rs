//! Driver query seam
//!
//! The native layer hands back raw strings for four queries. A `None`
//! answer means the driver returned nothing at all, which is distinct from
//! an empty string.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CapsError, Result};

/// The string queries made against the driver during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverString {
    Version,
    Vendor,
    Renderer,
    Extensions,
}

impl DriverString {
    /// Label used in diagnostic lines and error messages.
    pub fn label(self) -> &'static str {
        match self {
            DriverString::Version => "GL_VERSION",
            DriverString::Vendor => "GL_VENDOR",
            DriverString::Renderer => "GL_RENDERER",
            DriverString::Extensions => "GL_EXTENSIONS",
        }
    }
}

impl fmt::Display for DriverString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of raw driver strings.
pub trait DriverQuery {
    fn string(&self, which: DriverString) -> Option<String>;
}

/// Snapshot of a driver's answers, replayable without a live context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedDriver {
    pub version: Option<String>,
    pub vendor: Option<String>,
    pub renderer: Option<String>,
    pub extensions: Option<String>,
    /// Extensions the windowing layer reports on its own.
    pub native_extensions: Vec<String>,
}

impl RecordedDriver {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(CapsError::Report)
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

impl DriverQuery for RecordedDriver {
    fn string(&self, which: DriverString) -> Option<String> {
        match which {
            DriverString::Version => self.version.clone(),
            DriverString::Vendor => self.vendor.clone(),
            DriverString::Renderer => self.renderer.clone(),
            DriverString::Extensions => self.extensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_gl_names() {
        assert_eq!(DriverString::Version.label(), "GL_VERSION");
        assert_eq!(DriverString::Extensions.to_string(), "GL_EXTENSIONS");
    }

    #[test]
    fn recorded_driver_distinguishes_absent_from_empty() {
        let driver = RecordedDriver::from_json(r#"{ "version": "", "vendor": null }"#).unwrap();
        assert_eq!(driver.string(DriverString::Version), Some(String::new()));
        assert_eq!(driver.string(DriverString::Vendor), None);
        assert_eq!(driver.string(DriverString::Extensions), None);
        assert!(driver.native_extensions.is_empty());
    }

    #[test]
    fn malformed_report_is_an_error() {
        let err = RecordedDriver::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CapsError::Report(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RecordedDriver::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
