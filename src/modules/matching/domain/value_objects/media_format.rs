use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    #[serde(other)]
    Unknown,
}

impl MediaFormat {
    /// Formats that can appear in a relation chain
    pub fn is_admissible(&self) -> bool {
        matches!(
            self,
            MediaFormat::Tv
                | MediaFormat::Movie
                | MediaFormat::Ova
                | MediaFormat::Ona
                | MediaFormat::Special
        )
    }
}

/// Category of the work a relation edge points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaCategory {
    Anime,
    Manga,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaCategory {
    /// Lowercase path segment used by catalog search endpoints
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaCategory::Anime => "anime",
            MediaCategory::Manga => "manga",
            MediaCategory::Unknown => "unknown",
        }
    }
}

/// Kind of entry in the general media catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}
