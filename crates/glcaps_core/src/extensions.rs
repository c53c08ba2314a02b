//! Extension collection
//!
//! The driver reports its extensions as one space-separated string. Tokens
//! pass through a [`PlatformFilter`] before landing in an [`ExtensionSet`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CapsError;

const GL_PREFIX: &str = "GL_";
const WEBGL_PREFIX: &str = "WEBGL_";
const GL_WEBGL_PREFIX: &str = "GL_WEBGL_";

/// Named token filtering strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformFilter {
    /// Accept every token
    #[default]
    Standard,
    /// Browser-hosted GL, where both `GL_EXT_foo` and `EXT_foo` get advertised.
    /// Keeps `GL_*` and `WEBGL_*` names only; `GL_WEBGL_*` always passes.
    WebEmbedded,
}

impl PlatformFilter {
    pub fn accepts(self, token: &str) -> bool {
        match self {
            PlatformFilter::Standard => true,
            PlatformFilter::WebEmbedded => {
                // GL_WEBGL_* is also covered by GL_*; listed so the combined form stays accepted
                token.starts_with(GL_WEBGL_PREFIX)
                    || token.starts_with(GL_PREFIX)
                    || token.starts_with(WEBGL_PREFIX)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlatformFilter::Standard => "standard",
            PlatformFilter::WebEmbedded => "web-embedded",
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformFilter {
    type Err = CapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PlatformFilter::Standard),
            "web-embedded" | "web_embedded" | "web" => Ok(PlatformFilter::WebEmbedded),
            _ => Err(CapsError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Set of extension names, enumerated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    names: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `raw` on whitespace, keep what `filter` accepts.
    ///
    /// `on_accept` sees every accepted token in driver order, duplicates
    /// included.
    pub fn collect_filtered<F>(raw: &str, filter: PlatformFilter, mut on_accept: F) -> Self
    where
        F: FnMut(&str),
    {
        let mut set = Self::new();
        let mut rejected = 0usize;
        for token in raw.split_whitespace() {
            if !filter.accepts(token) {
                rejected += 1;
                continue;
            }
            on_accept(token);
            set.insert(token);
        }
        if rejected > 0 {
            tracing::debug!(rejected, %filter, "filtered out extension tokens");
        }
        set
    }

    /// Returns false if the name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
