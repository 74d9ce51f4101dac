//! Wire models for the two catalogs

use serde::{Deserialize, Serialize};

use crate::modules::matching::domain::{CatalogRecord, MediaKind, TargetRecord};

/// Entry of the general media catalog. Movies report `title` and
/// `release_date`; TV entries report `name` and `first_air_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MediaSummary {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

impl MediaSummary {
    /// Canonical record for reconciliation, when title and date are usable
    pub fn to_target(&self) -> Option<TargetRecord> {
        let title = self
            .title
            .as_deref()
            .or(self.name.as_deref())
            .filter(|t| !t.trim().is_empty())?;
        let date = self
            .release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .filter(|d| !d.is_empty())?;

        match TargetRecord::new(title, date) {
            Ok(target) => Some(target),
            Err(e) => {
                log::debug!("Skipping media entry {}: {}", self.id, e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MediaLookupResponse {
    #[serde(default)]
    pub results: Vec<MediaSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphSearchResponse {
    #[serde(default)]
    pub results: Vec<CatalogRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub server_name: String,
    pub server_link: String,
}

impl ServerDescriptor {
    pub fn new(server_name: impl Into<String>, server_link: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            server_link: server_link.into(),
        }
    }
}

/// Parameters of a server listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerQuery {
    pub id: i64,
    pub kind: MediaKind,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl ServerQuery {
    pub fn movie(id: i64) -> Self {
        Self {
            id,
            kind: MediaKind::Movie,
            season: None,
            episode: None,
        }
    }

    pub fn episode(id: i64, season: u32, episode: u32) -> Self {
        Self {
            id,
            kind: MediaKind::Tv,
            season: Some(season),
            episode: Some(episode),
        }
    }
}
