//! Version string comparison utilities

use crate::{Operator, SemVersion};

/// Comparator for comparing version strings
///
/// Both sides go through [`SemVersion::parse`] and are then ordered by their
/// core triple, exactly like the relational operators on [`SemVersion`]. A
/// rejected string therefore compares as the `0.0.0` sentinel.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Unknown operators never match.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        match operator.parse::<Operator>() {
            Ok(operator) => Self::compare_with(version1, operator, version2),
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    /// Compare version1 to version2 using an already parsed operator
    pub fn compare_with(version1: &str, operator: Operator, version2: &str) -> bool {
        let v1 = SemVersion::parse(version1);
        let v2 = SemVersion::parse(version2);
        operator.holds(v1.cmp(&v2))
    }
}
