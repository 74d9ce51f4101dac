//! Chronological chain of a work and its admissible related entries

use std::cmp::Ordering;

use crate::modules::matching::domain::entities::CatalogRecord;
use crate::shared::utils::LogContext;

pub struct RelationChainBuilder;

impl RelationChainBuilder {
    /// The matched record plus its admissible related records, oldest first.
    ///
    /// Records with an incomplete start date sort after every dated record and
    /// keep their relative input order.
    pub fn build_chain(matched: Option<&CatalogRecord>) -> Vec<&CatalogRecord> {
        let Some(matched) = matched else {
            return Vec::new();
        };

        let mut chain: Vec<&CatalogRecord> = std::iter::once(matched)
            .chain(matched.relations.iter().filter_map(|edge| edge.chain_node()))
            .collect();
        let related = chain.len() - 1;

        chain.sort_by(|a, b| Self::compare_start(a, b));

        LogContext::chain_built(matched.id, related, chain.len());
        chain
    }

    /// Owned variant of [`build_chain`](Self::build_chain)
    pub fn build_owned_chain(matched: Option<&CatalogRecord>) -> Vec<CatalogRecord> {
        Self::build_chain(matched).into_iter().cloned().collect()
    }

    fn compare_start(a: &CatalogRecord, b: &CatalogRecord) -> Ordering {
        match (a.start_date.normalize(), b.start_date.normalize()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::matching::domain::entities::{RelationEdge, Title};
    use crate::modules::matching::domain::value_objects::{
        MediaCategory, MediaFormat, PartialDate, RelationType,
    };

    fn record(id: i64, date: PartialDate, format: MediaFormat) -> CatalogRecord {
        CatalogRecord::new(id, Title::new(Some("Entry"), None), date, Some(format))
    }

    fn ids(chain: &[&CatalogRecord]) -> Vec<i64> {
        chain.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_absent_record_gives_empty_chain() {
        assert!(RelationChainBuilder::build_chain(None).is_empty());
    }

    #[test]
    fn test_record_without_relations() {
        let solo = record(1, PartialDate::ymd(2015, 1, 10), MediaFormat::Tv);
        assert_eq!(ids(&RelationChainBuilder::build_chain(Some(&solo))), vec![1]);
    }

    #[test]
    fn test_unknown_dates_sort_last() {
        let matched = record(2, PartialDate::ymd(2015, 1, 10), MediaFormat::Tv)
            .with_relation(RelationEdge::new(
                RelationType::Sequel,
                record(3, PartialDate::new(Some(2018), None, None), MediaFormat::Tv),
                MediaCategory::Anime,
            ))
            .with_relation(RelationEdge::new(
                RelationType::Prequel,
                record(1, PartialDate::ymd(2010, 1, 5), MediaFormat::Tv),
                MediaCategory::Anime,
            ));

        assert_eq!(ids(&RelationChainBuilder::build_chain(Some(&matched))), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_dates_keep_input_order() {
        let matched = record(1, PartialDate::unknown(), MediaFormat::Movie)
            .with_relation(RelationEdge::new(
                RelationType::SideStory,
                record(2, PartialDate::unknown(), MediaFormat::Ova),
                MediaCategory::Anime,
            ))
            .with_relation(RelationEdge::new(
                RelationType::Summary,
                record(3, PartialDate::ymd(2001, 1, 1), MediaFormat::Special),
                MediaCategory::Anime,
            ));

        assert_eq!(ids(&RelationChainBuilder::build_chain(Some(&matched))), vec![3, 1, 2]);
    }

    #[test]
    fn test_filters_inadmissible_edges() {
        let matched = record(1, PartialDate::ymd(2012, 4, 1), MediaFormat::Tv)
            .with_relation(RelationEdge::new(
                RelationType::Character,
                record(2, PartialDate::ymd(2011, 1, 1), MediaFormat::Tv),
                MediaCategory::Anime,
            ))
            .with_relation(RelationEdge::new(
                RelationType::Sequel,
                record(3, PartialDate::ymd(2013, 1, 1), MediaFormat::Music),
                MediaCategory::Anime,
            ))
            .with_relation(RelationEdge::new(
                RelationType::Adaptation,
                record(4, PartialDate::ymd(2010, 1, 1), MediaFormat::Tv),
                MediaCategory::Manga,
            ))
            .with_relation(RelationEdge::new(
                RelationType::AlternativeVersion,
                record(5, PartialDate::ymd(2014, 1, 1), MediaFormat::Ona),
                MediaCategory::Anime,
            ));

        assert_eq!(ids(&RelationChainBuilder::build_chain(Some(&matched))), vec![1, 5]);
    }

    #[test]
    fn test_owned_chain_is_stable_across_calls() {
        let matched = record(1, PartialDate::ymd(2012, 4, 1), MediaFormat::Tv).with_relation(
            RelationEdge::new(
                RelationType::Parent,
                record(2, PartialDate::ymd(2009, 1, 1), MediaFormat::Tv),
                MediaCategory::Anime,
            ),
        );

        let first = RelationChainBuilder::build_owned_chain(Some(&matched));
        let second = RelationChainBuilder::build_owned_chain(Some(&matched));
        assert_eq!(first, second);
        assert_eq!(first[0].id, 2);
    }
}
