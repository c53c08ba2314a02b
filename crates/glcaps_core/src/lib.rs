//! GL Capability Support
//!
//! Inspects a native GL driver once per context initialization and answers
//! capability queries afterwards:
//! - Driver version parsing (fail-soft)
//! - Extension collection with platform filtering
//! - Version-floor and extension-presence queries, with a native fallback

pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod extensions;
pub mod provider;
pub mod settings;
pub mod support;
pub mod version;

pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use driver::{DriverQuery, DriverString, RecordedDriver};
pub use error::{CapsError, Result};
pub use extensions::{ExtensionSet, PlatformFilter};
pub use provider::{CapabilityProvider, ExtensionCheck, NativeExtensions};
pub use settings::CapsSettings;
pub use support::CapabilitySupport;
pub use version::DriverVersion;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
