//! The k-anonymity gate.

use fairshare_types::DisclosurePolicy;

/// Whether a peer group is large enough to show an exact value.
///
/// A group of zero is a valid input — it simply fails the threshold and
/// routes the value down the fuzzy-range path.
#[must_use]
pub fn meets_disclosure_threshold(group_count: u32, policy: &DisclosurePolicy) -> bool {
    group_count >= policy.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        let policy = DisclosurePolicy::default();
        assert!(!meets_disclosure_threshold(4, &policy));
        assert!(meets_disclosure_threshold(5, &policy));
        assert!(meets_disclosure_threshold(120, &policy));
    }

    #[test]
    fn empty_peer_group_fails_quietly() {
        let policy = DisclosurePolicy::default();
        assert!(!meets_disclosure_threshold(0, &policy));
    }

    #[test]
    fn custom_threshold_respected() {
        let policy = DisclosurePolicy::new(10, 0.10).unwrap();
        assert!(!meets_disclosure_threshold(9, &policy));
        assert!(meets_disclosure_threshold(10, &policy));
    }
}
