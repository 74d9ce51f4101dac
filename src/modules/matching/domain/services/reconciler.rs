use serde::{Deserialize, Serialize};

use super::{date_matcher::DateMatcher, title_matcher::TitleMatcher};
use crate::modules::matching::domain::entities::{CatalogRecord, TargetRecord};
use crate::shared::utils::LogContext;

/// Which pass of the reconciler produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPass {
    Strict,
    Loose,
}

impl MatchPass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPass::Strict => "strict",
            MatchPass::Loose => "loose",
        }
    }
}

/// Pairs a canonical record with the most plausible catalog candidate.
///
/// Candidates are scanned in input order and the first one satisfying a pass
/// wins; scores are never compared across candidates. The strict pass runs
/// over the whole list before the loose pass is attempted.
pub struct Reconciler;

impl Reconciler {
    pub fn find_match<'a>(
        target: &TargetRecord,
        candidates: &'a [CatalogRecord],
    ) -> Option<&'a CatalogRecord> {
        Self::match_with_pass(target, candidates).map(|(record, _)| record)
    }

    pub fn match_with_pass<'a>(
        target: &TargetRecord,
        candidates: &'a [CatalogRecord],
    ) -> Option<(&'a CatalogRecord, MatchPass)> {
        let result = [MatchPass::Strict, MatchPass::Loose]
            .into_iter()
            .find_map(|pass| {
                candidates
                    .iter()
                    .find(|candidate| Self::accepts(pass, target, candidate))
                    .map(|candidate| (candidate, pass))
            });

        LogContext::match_result(
            &target.title,
            candidates.len(),
            result.map(|(record, pass)| (record.id, pass.as_str())),
        );
        result
    }

    fn accepts(pass: MatchPass, target: &TargetRecord, candidate: &CatalogRecord) -> bool {
        if !DateMatcher::matches_month_bucket(&target.release_date, &candidate.start_date) {
            return false;
        }

        let english = candidate.title.english.as_deref();
        let romaji = candidate.title.romaji.as_deref();
        match pass {
            MatchPass::Strict => TitleMatcher::strict_match(&target.title, english, romaji),
            MatchPass::Loose => TitleMatcher::loose_match(&target.title, english, romaji),
        }
    }
}
