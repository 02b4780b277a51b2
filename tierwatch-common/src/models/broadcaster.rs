// File: tierwatch-common/src/models/broadcaster.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Account tier reported by Helix in the `broadcaster_type` field.
///
/// Helix sends `"partner"`, `"affiliate"` or an empty string for regular
/// accounts. Anything else is kept verbatim in `Other`.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BroadcasterType {
    Partner,
    Affiliate,
    Normal,
    Other(String),
}

impl BroadcasterType {
    /// Partners and affiliates are the tiers worth a notification.
    pub fn is_notify_worthy(&self) -> bool {
        matches!(self, BroadcasterType::Partner | BroadcasterType::Affiliate)
    }

    /// Human-readable label used in notification text.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            BroadcasterType::Partner => Some("Partner"),
            BroadcasterType::Affiliate => Some("Affiliate"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BroadcasterType::Partner => "partner",
            BroadcasterType::Affiliate => "affiliate",
            BroadcasterType::Normal => "",
            BroadcasterType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for BroadcasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcasterType::Normal => write!(f, "normal"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for BroadcasterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "partner" => BroadcasterType::Partner,
            "affiliate" => BroadcasterType::Affiliate,
            "" => BroadcasterType::Normal,
            _ => BroadcasterType::Other(s.to_string()),
        })
    }
}

impl From<String> for BroadcasterType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<BroadcasterType> for String {
    fn from(kind: BroadcasterType) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_helix_values() {
        assert_eq!(BroadcasterType::from("partner".to_string()), BroadcasterType::Partner);
        assert_eq!(BroadcasterType::from("Affiliate".to_string()), BroadcasterType::Affiliate);
        assert_eq!(BroadcasterType::from(String::new()), BroadcasterType::Normal);
        assert_eq!(
            BroadcasterType::from("staff".to_string()),
            BroadcasterType::Other("staff".into())
        );
    }

    #[test]
    fn only_partner_and_affiliate_notify() {
        assert!(BroadcasterType::Partner.is_notify_worthy());
        assert!(BroadcasterType::Affiliate.is_notify_worthy());
        assert!(!BroadcasterType::Normal.is_notify_worthy());
        assert!(!BroadcasterType::Other("staff".into()).is_notify_worthy());
    }

    #[test]
    fn deserializes_from_json_string() {
        let kind: BroadcasterType = serde_json::from_str("\"\"").unwrap();
        assert_eq!(kind, BroadcasterType::Normal);
        let kind: BroadcasterType = serde_json::from_str("\"partner\"").unwrap();
        assert_eq!(kind.label(), Some("Partner"));
    }
}
