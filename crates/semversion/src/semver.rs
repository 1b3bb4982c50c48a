//! Semver facade providing high-level operations on version strings

use crate::SemVersion;

/// Main facade for working with lists of version strings
pub struct Semver;

impl Semver {
    /// Check if a string parses to a valid version
    pub fn is_valid(version: &str) -> bool {
        SemVersion::parse(version).is_valid()
    }

    /// Sort versions in ascending order, dropping invalid ones
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort), dropping invalid ones
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Highest valid version, the first one wins on ties
    pub fn max(versions: &[&str]) -> Option<String> {
        Self::pick(versions, |candidate, best| candidate > best)
    }

    /// Lowest valid version, the first one wins on ties
    pub fn min(versions: &[&str]) -> Option<String> {
        Self::pick(versions, |candidate, best| candidate < best)
    }

    fn parsed(versions: &[&str]) -> Vec<(SemVersion, usize)> {
        versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                let parsed = SemVersion::parse(*v);
                if parsed.is_valid() {
                    Some((parsed, i))
                } else {
                    log::debug!("Skipping invalid version {:?}", v);
                    None
                }
            })
            .collect()
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parsed(versions);

        // Stable sort, equal core versions keep their input order
        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    fn pick(
        versions: &[&str],
        replaces: impl Fn(&SemVersion, &SemVersion) -> bool,
    ) -> Option<String> {
        Self::parsed(versions)
            .into_iter()
            .reduce(|best, candidate| {
                if replaces(&candidate.0, &best.0) {
                    candidate
                } else {
                    best
                }
            })
            .map(|(_, i)| versions[i].to_string())
    }
}
