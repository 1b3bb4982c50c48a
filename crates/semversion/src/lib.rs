//! Semantic version value type
//!
//! This crate provides a `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version type with
//! parsing, formatting and ordering over the core version triple.

mod comparator;
mod operator;
mod sem_version;
mod semver;
#[cfg(feature = "serde")]
mod serde_impl;
mod version_parser;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use sem_version::{Metadata, SemVersion};
pub use semver::Semver;
pub use version_parser::{ParseError, VersionText};
