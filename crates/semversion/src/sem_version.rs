//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Conversion into a pre-release or build metadata string.
///
/// Implemented for borrowed and owned strings as well as `Option<&str>`,
/// where `None` stands for "not present" and becomes an empty string.
/// `Option<&str>` is the only optional form so that a bare `None` needs no
/// type annotation; pass an `Option<String>` with `.as_deref()`.
pub trait Metadata {
    fn into_metadata(self) -> String;
}

impl Metadata for &str {
    fn into_metadata(self) -> String {
        self.to_string()
    }
}

impl Metadata for String {
    fn into_metadata(self) -> String {
        self
    }
}

impl Metadata for &String {
    fn into_metadata(self) -> String {
        self.clone()
    }
}

impl Metadata for Option<&str> {
    fn into_metadata(self) -> String {
        self.map(str::to_string).unwrap_or_default()
    }
}

/// A semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// The all-zero triple is the invalid sentinel, produced by [`Default`],
/// [`SemVersion::clear`] and a failed [`SemVersion::parse`].
///
/// Equality and ordering only look at `major`, `minor` and `patch`. Use
/// [`SemVersion::compare`] to also require matching metadata.
///
/// ```
/// use semversion::SemVersion;
///
/// let version = SemVersion::parse("1.2.3-beta.1+exp.sha");
/// assert!(version.is_valid());
/// assert_eq!(version.to_string(), "1.2.3");
/// assert_eq!(format!("{:#}", version), "1.2.3-beta.1+exp.sha");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Pre-release identifiers without the leading `-`, empty if not present
    pub pre_release: String,
    /// Build metadata without the leading `+`, empty if not present
    pub build: String,
}

impl SemVersion {
    /// Create a version from the numeric triple with no metadata
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemVersion {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Create a version with pre-release and build metadata.
    ///
    /// The metadata is taken as is, it is not checked against the grammar.
    pub fn with_metadata(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: impl Metadata,
        build: impl Metadata,
    ) -> Self {
        SemVersion {
            major,
            minor,
            patch,
            pre_release: pre_release.into_metadata(),
            build: build.into_metadata(),
        }
    }

    /// Set the numeric triple. Pre-release and build are cleared.
    pub fn set(&mut self, major: u32, minor: u32, patch: u32) {
        self.major = major;
        self.minor = minor;
        self.patch = patch;
        self.pre_release.clear();
        self.build.clear();
    }

    /// Set the numeric triple together with new metadata
    pub fn set_with_metadata(
        &mut self,
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: impl Metadata,
        build: impl Metadata,
    ) {
        self.set(major, minor, patch);
        self.pre_release = pre_release.into_metadata();
        self.build = build.into_metadata();
    }

    /// Reset to the invalid sentinel
    pub fn clear(&mut self) {
        self.set(0, 0, 0);
    }

    /// A version is valid when any of major, minor or patch is non-zero.
    ///
    /// Pre-release and build are not consulted. This is the way to detect a
    /// failed [`SemVersion::parse`].
    pub fn is_valid(&self) -> bool {
        self.major != 0 || self.minor != 0 || self.patch != 0
    }

    /// Compare for equality, optionally including pre-release and build.
    ///
    /// The core triple must always match. Metadata is only inspected when
    /// the triple is equal and the corresponding flag is set.
    pub fn compare(
        &self,
        other: &SemVersion,
        compare_pre_release: bool,
        compare_build: bool,
    ) -> bool {
        if self != other {
            return false;
        }
        if compare_pre_release && self.pre_release != other.pre_release {
            return false;
        }
        if compare_build && self.build != other.build {
            return false;
        }
        true
    }

    /// Format the version, appending non-empty metadata only when requested
    pub fn to_string_with(&self, include_pre_release: bool, include_build: bool) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if include_pre_release && !self.pre_release.is_empty() {
            out.push('-');
            out.push_str(&self.pre_release);
        }
        if include_build && !self.build.is_empty() {
            out.push('+');
            out.push_str(&self.build);
        }
        out
    }

    fn core(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl From<&SemVersion> for bool {
    fn from(version: &SemVersion) -> bool {
        version.is_valid()
    }
}

/// `{}` writes the core version only, `{:#}` includes pre-release and build.
impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if f.alternate() {
            if !self.pre_release.is_empty() {
                write!(f, "-{}", self.pre_release)?;
            }
            if !self.build.is_empty() {
                write!(f, "+{}", self.build)?;
            }
        }
        Ok(())
    }
}

impl PartialEq for SemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.core() == other.core()
    }
}

impl Eq for SemVersion {}

impl PartialOrd for SemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core().cmp(&other.core())
    }
}

impl Hash for SemVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core().hash(state);
    }
}
