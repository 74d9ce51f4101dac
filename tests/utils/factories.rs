/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible defaults
use reelchain_lib::modules::matching::domain::{
    CatalogRecord, MediaCategory, MediaFormat, PartialDate, RelationEdge, RelationType, Title,
    TargetRecord,
};

pub struct RecordFactory {
    id: i64,
    english: Option<String>,
    romaji: Option<String>,
    start_date: PartialDate,
    format: Option<MediaFormat>,
    relations: Vec<RelationEdge>,
}

impl Default for RecordFactory {
    fn default() -> Self {
        Self {
            id: 1,
            english: Some("Test Anime".to_string()),
            romaji: None,
            start_date: PartialDate::unknown(),
            format: Some(MediaFormat::Tv),
            relations: Vec::new(),
        }
    }
}

impl RecordFactory {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_english(mut self, title: &str) -> Self {
        self.english = Some(title.to_string());
        self
    }

    pub fn with_romaji(mut self, title: &str) -> Self {
        self.romaji = Some(title.to_string());
        self
    }

    pub fn without_titles(mut self) -> Self {
        self.english = None;
        self.romaji = None;
        self
    }

    pub fn started(mut self, year: i32, month: u32, day: u32) -> Self {
        self.start_date = PartialDate::ymd(year, month, day);
        self
    }

    pub fn with_start_date(mut self, date: PartialDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn with_format(mut self, format: MediaFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn related(self, relation_type: RelationType, node: CatalogRecord) -> Self {
        self.related_in(relation_type, node, MediaCategory::Anime)
    }

    pub fn related_in(
        mut self,
        relation_type: RelationType,
        node: CatalogRecord,
        category: MediaCategory,
    ) -> Self {
        self.relations
            .push(RelationEdge::new(relation_type, node, category));
        self
    }

    pub fn build(self) -> CatalogRecord {
        let title = Title::new(self.english.as_deref(), self.romaji.as_deref());
        self.relations.into_iter().fold(
            CatalogRecord::new(self.id, title, self.start_date, self.format),
            CatalogRecord::with_relation,
        )
    }
}

pub fn target(title: &str, release_date: &str) -> TargetRecord {
    TargetRecord::new(title, release_date).expect("valid target record")
}
