//! Capability support for one GL context
//!
//! Built once when a context is initialized, then queried read-only by
//! rendering code deciding which paths are safe to use. Rebuild it when
//! the context is recreated.

use std::rc::Weak;

use tracing::{instrument, warn};

use crate::diagnostics::{emit, DiagnosticSink};
use crate::driver::{DriverQuery, DriverString};
use crate::error::{CapsError, Result};
use crate::extensions::ExtensionSet;
use crate::provider::CapabilityProvider;
use crate::settings::CapsSettings;
use crate::version::DriverVersion;

#[derive(Debug)]
pub struct CapabilitySupport {
    version: DriverVersion,
    vendor: String,
    renderer: String,
    extensions: ExtensionSet,
    native: Weak<dyn CapabilityProvider>,
}

impl CapabilitySupport {
    /// Query the driver and build the capability tables.
    ///
    /// Fails if the driver returns no version or extension string at all.
    /// A version string that is present but unreadable yields 0.0.
    /// `native` is consulted for extensions the driver itself does not list.
    #[instrument(skip_all, level = "debug", err)]
    pub fn initialise(
        driver: &dyn DriverQuery,
        native: Weak<dyn CapabilityProvider>,
        settings: &CapsSettings,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self> {
        let version = Self::read_version(driver, &settings.version_prefix)?;
        emit(sink, DriverString::Version, &version.to_string());

        let vendor_string = Self::read_optional(driver, DriverString::Vendor);
        emit(sink, DriverString::Vendor, &vendor_string);
        let vendor = vendor_string
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();

        let renderer = Self::read_optional(driver, DriverString::Renderer);
        emit(sink, DriverString::Renderer, &renderer);

        let raw_extensions = driver
            .string(DriverString::Extensions)
            .ok_or(CapsError::MissingDriverString(DriverString::Extensions))?;
        let mut accepted = String::with_capacity(raw_extensions.len());
        let extensions =
            ExtensionSet::collect_filtered(&raw_extensions, settings.platform, |name| {
                if !accepted.is_empty() {
                    accepted.push(' ');
                }
                accepted.push_str(name);
            });
        emit(sink, DriverString::Extensions, &accepted);

        Ok(Self {
            version,
            vendor,
            renderer,
            extensions,
            native,
        })
    }

    fn read_version(driver: &dyn DriverQuery, prefix: &str) -> Result<DriverVersion> {
        let raw = driver
            .string(DriverString::Version)
            .ok_or(CapsError::MissingDriverString(DriverString::Version))?;
        let version = DriverVersion::from_driver_string(&raw, prefix);
        if !version.is_set() {
            warn!(raw = %raw, prefix, "unrecognised driver version string, assuming 0.0");
        }
        Ok(version)
    }

    fn read_optional(driver: &dyn DriverQuery, which: DriverString) -> String {
        driver.string(which).unwrap_or_else(|| {
            warn!("driver returned no {} string", which.label());
            String::new()
        })
    }

    /// True iff the driver version is at least `major.minor`.
    pub fn has_min_version(&self, major: u32, minor: u32) -> bool {
        self.version.at_least(major, minor)
    }

    /// True if the driver lists `name`, or failing that, the native layer
    /// supports it.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.check_extension(name) || self.native.check_extension(name)
    }

    pub fn version(&self) -> DriverVersion {
        self.version
    }

    /// First word of the vendor string.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }
}

impl CapabilityProvider for CapabilitySupport {
    fn check_extension(&self, name: &str) -> bool {
        self.has_extension(name)
    }
}
