//! Driver version parsing
//!
//! GL ES drivers report `"OpenGL ES <major>.<minor> <vendor text>"`. Parsing
//! is fail-soft: anything unexpected leaves the version at 0.0, which makes
//! every version-floor query answer "unsupported".

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix GL ES drivers put in front of the version number.
pub const GLES_VERSION_PREFIX: &str = "OpenGL ES ";

/// Driver API version, compared on (major, minor) only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverVersion {
    pub major: u32,
    pub minor: u32,
}

impl DriverVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a raw driver version string that starts with `prefix`.
    ///
    /// Returns 0.0 if the prefix is missing or nothing follows it.
    pub fn from_driver_string(raw: &str, prefix: &str) -> Self {
        match raw.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => {
                let token = rest.split_whitespace().next().unwrap_or("");
                Self::from_dotted(token)
            }
            _ => Self::default(),
        }
    }

    /// Parse `"major.minor[.more]"`. Unreadable or missing components are 0.
    pub fn from_dotted(text: &str) -> Self {
        let mut parts = text.split('.');
        let major = parts.next().map(leading_number).unwrap_or(0);
        let minor = parts.next().map(leading_number).unwrap_or(0);
        Self { major, minor }
    }

    /// True unless parsing fell back to 0.0.
    pub fn is_set(&self) -> bool {
        *self != Self::default()
    }

    /// True iff this version is at least `major.minor`.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        if self.major == major {
            return self.minor >= minor;
        }
        self.major > major
    }
}

// Drivers glue vendor text onto numbers ("1V@415.0"), so only the leading
// digits count.
fn leading_number(component: &str) -> u32 {
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..end].parse().unwrap_or(0)
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for DriverVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_dotted(s.trim()))
    }
}
