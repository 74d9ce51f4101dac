use serde::{Deserialize, Serialize};

use crate::modules::matching::domain::value_objects::{
    MediaCategory, MediaFormat, PartialDate, RelationType,
};

/// Title variants reported by the relation graph catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

impl Title {
    pub fn new(english: Option<&str>, romaji: Option<&str>) -> Self {
        Self {
            english: english.map(str::to_string),
            romaji: romaji.map(str::to_string),
        }
    }

    /// Best title for display, preferring the english variant
    pub fn preferred(&self) -> Option<&str> {
        self.english.as_deref().or(self.romaji.as_deref())
    }
}

/// Candidate-side record from the relation graph catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Title,
    #[serde(default)]
    pub start_date: PartialDate,
    pub format: Option<MediaFormat>,
    #[serde(default)]
    pub relations: Vec<RelationEdge>,
}

impl CatalogRecord {
    pub fn new(id: i64, title: Title, start_date: PartialDate, format: Option<MediaFormat>) -> Self {
        Self {
            id,
            title,
            start_date,
            format,
            relations: Vec::new(),
        }
    }

    pub fn with_relation(mut self, edge: RelationEdge) -> Self {
        self.relations.push(edge);
        self
    }

    pub fn display_title(&self) -> String {
        self.title
            .preferred()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown Title (ID: {})", self.id))
    }
}

/// Typed link from one record to another work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationEdge {
    pub relation_type: RelationType,
    pub node: Option<CatalogRecord>,
    #[serde(default)]
    pub node_category: MediaCategory,
}

impl RelationEdge {
    pub fn new(relation_type: RelationType, node: CatalogRecord, node_category: MediaCategory) -> Self {
        Self {
            relation_type,
            node: Some(node),
            node_category,
        }
    }

    /// The linked record, if it belongs in a chronological chain
    pub fn chain_node(&self) -> Option<&CatalogRecord> {
        let node = self.node.as_ref()?;
        let admissible = self.node_category == MediaCategory::Anime
            && node.format.is_some_and(|format| format.is_admissible())
            && self.relation_type.is_chain_kind();
        admissible.then_some(node)
    }
}
