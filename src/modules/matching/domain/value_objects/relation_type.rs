use serde::{Deserialize, Serialize};

/// Kind of link between two catalog records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    Prequel,
    Sequel,
    Parent,
    SideStory,
    #[serde(alias = "ALTERNATIVE")]
    AlternativeVersion,
    Compilation,
    Summary,
    Adaptation,
    Source,
    SpinOff,
    Character,
    Contains,
    FullStory,
    Other,
    #[serde(other)]
    Unknown,
}

impl RelationType {
    /// Relation kinds that belong in a chronological chain
    pub const CHAIN_KINDS: [RelationType; 7] = [
        RelationType::Prequel,
        RelationType::Sequel,
        RelationType::Parent,
        RelationType::SideStory,
        RelationType::AlternativeVersion,
        RelationType::Compilation,
        RelationType::Summary,
    ];

    pub fn is_chain_kind(&self) -> bool {
        Self::CHAIN_KINDS.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_kinds() {
        assert!(RelationType::Prequel.is_chain_kind());
        assert!(RelationType::Summary.is_chain_kind());
        assert!(!RelationType::Character.is_chain_kind());
        assert!(!RelationType::Adaptation.is_chain_kind());
        assert!(!RelationType::Unknown.is_chain_kind());
    }

    #[test]
    fn test_deserialize_wire_names() {
        let kind: RelationType = serde_json::from_str("\"SIDE_STORY\"").unwrap();
        assert_eq!(kind, RelationType::SideStory);

        let alias: RelationType = serde_json::from_str("\"ALTERNATIVE\"").unwrap();
        assert_eq!(alias, RelationType::AlternativeVersion);

        let unknown: RelationType = serde_json::from_str("\"TIE_IN\"").unwrap();
        assert_eq!(unknown, RelationType::Unknown);
    }
}
