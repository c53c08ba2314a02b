//! Capability providers
//!
//! Anything that can answer "is extension X available?". The local
//! [`ExtensionSet`] is one provider; the windowing layer's native support
//! object is another, held through a non-owning [`Weak`].

use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::extensions::ExtensionSet;

pub trait CapabilityProvider {
    fn check_extension(&self, name: &str) -> bool;
}

impl CapabilityProvider for ExtensionSet {
    fn check_extension(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for &P {
    fn check_extension(&self, name: &str) -> bool {
        (**self).check_extension(name)
    }
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for Rc<P> {
    fn check_extension(&self, name: &str) -> bool {
        (**self).check_extension(name)
    }
}

/// A provider that has been dropped supports nothing.
impl<P: CapabilityProvider + ?Sized> CapabilityProvider for Weak<P> {
    fn check_extension(&self, name: &str) -> bool {
        self.upgrade().is_some_and(|p| p.check_extension(name))
    }
}

/// Fixed list of names reported by the windowing layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeExtensions {
    names: BTreeSet<String>,
}

impl NativeExtensions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CapabilityProvider for NativeExtensions {
    fn check_extension(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Adapts a closure into a provider.
pub struct ExtensionCheck<F>(pub F);

impl<F: Fn(&str) -> bool> CapabilityProvider for ExtensionCheck<F> {
    fn check_extension(&self, name: &str) -> bool {
        (self.0)(name)
    }
}
