//! Serde support, enabled with the `serde` feature.
//!
//! Versions are (de)serialized as strings in full form, pre-release and build included.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

use crate::SemVersion;

impl Serialize for SemVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_with(true, true))
    }
}

struct SemVersionVisitor;

impl<'de> Visitor<'de> for SemVersionVisitor {
    type Value = SemVersion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a semantic version string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SemVersion, E> {
        SemVersion::try_parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for SemVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SemVersionVisitor)
    }
}
