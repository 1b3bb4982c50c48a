//! Version string parsing

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::SemVersion;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No version string given")]
    Absent,
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Version {component} component \"{value}\" is out of range")]
    NumberOverflow { component: &'static str, value: String },
}

/// Input accepted by [`SemVersion::parse`] and [`SemVersion::try_parse`].
///
/// Implemented for `&str`, `&String` and `Option<&str>`, where `None` stands
/// for an absent version string.
pub trait VersionText<'a> {
    fn into_version_text(self) -> Option<&'a str>;
}

impl<'a> VersionText<'a> for &'a str {
    fn into_version_text(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a> VersionText<'a> for &'a String {
    fn into_version_text(self) -> Option<&'a str> {
        Some(self.as_str())
    }
}

impl<'a> VersionText<'a> for Option<&'a str> {
    fn into_version_text(self) -> Option<&'a str> {
        self
    }
}

lazy_static! {
    // MAJOR.MINOR.PATCH without leading zeros, then optional dot separated
    // pre-release and build identifiers. The whole input has to match.
    static ref VERSION_RE: Regex = Regex::new(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

impl SemVersion {
    /// Parse a version string.
    ///
    /// Never fails: any rejected input, including `None`, yields the invalid
    /// sentinel. Check the result with [`SemVersion::is_valid`].
    ///
    /// ```
    /// use semversion::SemVersion;
    ///
    /// let version = SemVersion::parse("1.2.3-test1+test2");
    /// if version.is_valid() {
    ///     assert_eq!(version.pre_release, "test1");
    /// }
    /// assert!(!SemVersion::parse("01.2.3").is_valid());
    /// ```
    pub fn parse<'a>(version: impl VersionText<'a>) -> SemVersion {
        Self::try_parse(version).unwrap_or_default()
    }

    /// Parse a version string, reporting why it was rejected.
    ///
    /// A grammatically correct `0.0.0` is returned as `Ok` even though it
    /// equals the invalid sentinel.
    pub fn try_parse<'a>(version: impl VersionText<'a>) -> Result<SemVersion, ParseError> {
        let version = version.into_version_text().ok_or(ParseError::Absent)?;

        let captures = match VERSION_RE.captures(version) {
            Some(captures) => captures,
            None => {
                log::trace!("Rejected version string {:?}: does not match the grammar", version);
                return Err(ParseError::InvalidVersion(version.to_string()));
            }
        };

        let major = parse_component(&captures, 1, "major")?;
        let minor = parse_component(&captures, 2, "minor")?;
        let patch = parse_component(&captures, 3, "patch")?;

        Ok(SemVersion::with_metadata(
            major,
            minor,
            patch,
            captures.get(4).map(|m| m.as_str()),
            captures.get(5).map(|m| m.as_str()),
        ))
    }
}

fn parse_component(
    captures: &Captures<'_>,
    index: usize,
    component: &'static str,
) -> Result<u32, ParseError> {
    let value = &captures[index];
    value.parse::<u32>().map_err(|_| {
        log::trace!("Rejected {} component {:?}: does not fit in u32", component, value);
        ParseError::NumberOverflow {
            component,
            value: value.to_string(),
        }
    })
}

impl FromStr for SemVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemVersion::try_parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sentinel(v: &SemVersion) {
        assert!(!v.is_valid());
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));
        assert!(v.pre_release.is_empty());
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_parse_absent() {
        assert_sentinel(&SemVersion::parse(None));
        assert_eq!(SemVersion::try_parse(None), Err(ParseError::Absent));
    }

    #[test]
    fn test_parse_full() {
        let v = SemVersion::parse("1.2.3-test1+test2");
        assert!(v.is_valid());
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.pre_release, "test1");
        assert_eq!(v.build, "test2");
    }

    #[test]
    fn test_parse_pre_release_only() {
        let v = SemVersion::parse("1.2.3-test1");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.pre_release, "test1");
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_parse_build_only() {
        let v = SemVersion::parse("1.2.3+build.5");
        assert!(v.pre_release.is_empty());
        assert_eq!(v.build, "build.5");
    }

    #[test]
    fn test_parse_core_only() {
        let v = SemVersion::parse("1.2.3");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(v.pre_release.is_empty());
        assert!(v.build.is_empty());

        let v = SemVersion::parse("0.0.1");
        assert!(v.is_valid());
    }

    #[test]
    fn test_parse_dotted_identifiers() {
        let v = SemVersion::parse("1.2.3-test1.test1+test2.test2");
        assert_eq!(v.pre_release, "test1.test1");
        assert_eq!(v.build, "test2.test2");

        let v = SemVersion::parse("1.0.0-x-y-z.--+Build-ID.0A");
        assert_eq!(v.pre_release, "x-y-z.--");
        assert_eq!(v.build, "Build-ID.0A");
    }

    #[test]
    fn test_parse_rejects_empty_identifiers() {
        assert_sentinel(&SemVersion::parse("1.2.3-+"));
        assert_sentinel(&SemVersion::parse("1.2.3-"));
        assert_sentinel(&SemVersion::parse("1.2.3+"));
        assert_sentinel(&SemVersion::parse("1.2.3-alpha..1"));
        assert_sentinel(&SemVersion::parse("1.2.3-alpha."));
        assert_sentinel(&SemVersion::parse("1.2.3+.build"));
    }

    #[test]
    fn test_parse_rejects_disallowed_characters() {
        assert_sentinel(&SemVersion::parse("1.2.3-[test1]+[test2]"));
        assert_sentinel(&SemVersion::parse("1.2.3-[ test1 ]+[ test2 ]"));
        assert_sentinel(&SemVersion::parse("1.2.3-test_1"));
        assert_sentinel(&SemVersion::parse("1.2.3-bêta"));
    }

    #[test]
    fn test_parse_rejects_leading_zeros() {
        assert_sentinel(&SemVersion::parse("01.2.3"));
        assert_sentinel(&SemVersion::parse("1.02.3"));
        assert_sentinel(&SemVersion::parse("1.2.03"));
        assert!(SemVersion::parse("0.2.3").is_valid());
        assert!(SemVersion::parse("1.0.0").is_valid());
    }

    #[test]
    fn test_parse_rejects_incomplete() {
        assert_sentinel(&SemVersion::parse(""));
        assert_sentinel(&SemVersion::parse("1"));
        assert_sentinel(&SemVersion::parse("1.2"));
        assert_sentinel(&SemVersion::parse("1.2."));
        assert_sentinel(&SemVersion::parse("v1.2.3"));
        assert_sentinel(&SemVersion::parse("1.2.3.4"));
        assert_sentinel(&SemVersion::parse("-1.2.3"));
    }

    #[test]
    fn test_parse_requires_full_match() {
        assert_sentinel(&SemVersion::parse("1.2.3abc"));
        assert_sentinel(&SemVersion::parse("1.2.3 "));
        assert_sentinel(&SemVersion::parse(" 1.2.3"));
        assert_sentinel(&SemVersion::parse("1.2.3-rc1 trailing"));
        assert_sentinel(&SemVersion::parse("1.2.3\n"));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(SemVersion::parse("4294967295.0.0").is_valid());
        assert_sentinel(&SemVersion::parse("4294967296.0.0"));
        assert_eq!(
            SemVersion::try_parse("1.99999999999.0"),
            Err(ParseError::NumberOverflow {
                component: "minor",
                value: "99999999999".to_string()
            })
        );
    }

    #[test]
    fn test_try_parse_errors() {
        assert_eq!(
            SemVersion::try_parse("1.2"),
            Err(ParseError::InvalidVersion("1.2".to_string()))
        );
        let err = SemVersion::try_parse("1.2.3-+").unwrap_err();
        assert_eq!(err.to_string(), "Invalid version string \"1.2.3-+\"");
    }

    #[test]
    fn test_try_parse_zero_version() {
        let v = SemVersion::try_parse("0.0.0-alpha").unwrap();
        assert!(!v.is_valid());
        assert_eq!(v.pre_release, "alpha");
        assert!(!SemVersion::parse("0.0.0").is_valid());
    }

    #[test]
    fn test_parse_owned_string() {
        let text = String::from("3.1.4-rc.2+build.9");
        let v = SemVersion::parse(&text);
        assert_eq!(v, SemVersion::new(3, 1, 4));
        assert_eq!(v.build, "build.9");
        assert!(SemVersion::try_parse(&String::from("3.1")).is_err());

        let maybe: Option<&str> = Some("1.0.0");
        assert!(SemVersion::parse(maybe).is_valid());
    }

    #[test]
    fn test_from_str() {
        let v: SemVersion = "2.0.0-rc.1".parse().unwrap();
        assert_eq!(v, SemVersion::new(2, 0, 0));
        assert_eq!(v.pre_release, "rc.1");
        assert!("2.0".parse::<SemVersion>().is_err());
    }
}
