use crate::core::challenge::ChallengeRequest;

/// Where a challenge TXT record lives: the label relative to the zone apex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    pub label: String,
    pub apex: String,
}

impl ChallengeRecord {
    pub fn from_challenge(ch: &ChallengeRequest) -> Self {
        Self::split(&ch.resolved_fqdn, &ch.resolved_zone)
    }

    /// Both inputs end with a dot. A zone that is not a suffix of the fqdn
    /// leaves the fqdn untouched apart from its trailing dot.
    pub fn split(resolved_fqdn: &str, resolved_zone: &str) -> Self {
        let label = resolved_fqdn
            .strip_suffix(resolved_zone)
            .unwrap_or(resolved_fqdn);
        let label = label.strip_suffix('.').unwrap_or(label);
        let apex = resolved_zone.strip_suffix('.').unwrap_or(resolved_zone);
        Self {
            label: label.to_string(),
            apex: apex.to_string(),
        }
    }
}
