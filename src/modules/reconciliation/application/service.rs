use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::matching::domain::{
    CatalogRecord, MatchPass, MediaCategory, MediaKind, Reconciler, RelationChainBuilder,
    TargetRecord,
};
use crate::modules::retrieval::infrastructure::CatalogClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::state::{KeyPath, StateStore};
use crate::shared::utils::TimedOperation;

/// Matched record and its chronological chain for one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChain {
    pub target: TargetRecord,
    pub matched: Option<CatalogRecord>,
    pub match_pass: Option<MatchPass>,
    pub chain: Vec<CatalogRecord>,
}

impl ResolvedChain {
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Application service tying retrieval, reconciliation and chain building together
#[derive(Clone)]
pub struct ReconciliationService {
    client: Arc<CatalogClient>,
    /// Session store receiving resolved chains, if the caller provides one
    store: Option<Arc<StateStore>>,
}

impl ReconciliationService {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn chain_key(title: &str) -> KeyPath {
        KeyPath::new(["chains", title])
    }

    /// Look up the media entry and search the graph catalog concurrently,
    /// then reconcile and build the chain. Both requests run to completion
    /// before either result is inspected.
    pub async fn resolve(
        &self,
        kind: MediaKind,
        provider_id: &str,
        query: &str,
    ) -> AppResult<ResolvedChain> {
        let timer =
            TimedOperation::new(&format!("resolve {} '{}'", kind.as_path(), provider_id));

        let (entries, candidates) = tokio::join!(
            self.client.find_by_provider(kind, provider_id),
            self.client.search(MediaCategory::Anime, query)
        );

        let resolved = entries
            .and_then(|entries| {
                entries
                    .iter()
                    .find_map(|entry| entry.to_target())
                    .ok_or_else(|| {
                        AppError::NotFound(format!(
                            "No usable {} entry for provider id '{}'",
                            kind.as_path(),
                            provider_id
                        ))
                    })
            })
            .and_then(|target| {
                candidates.map(|candidates| self.resolve_against(target, &candidates))
            });

        match &resolved {
            Ok(chain) if chain.is_matched() => timer.finish_with_info("matched"),
            Ok(_) => timer.finish_with_info("no match"),
            Err(e) => timer.finish_with_info(&format!("failed: {}", e)),
        };
        resolved
    }

    /// Search the graph catalog by the target's own title and reconcile
    pub async fn resolve_target(&self, target: TargetRecord) -> AppResult<ResolvedChain> {
        let timer = TimedOperation::new(&format!("resolve '{}'", target.title));
        match self.client.search(MediaCategory::Anime, &target.title).await {
            Ok(candidates) => {
                let resolved = self.resolve_against(target, &candidates);
                timer.finish_with_info(if resolved.is_matched() { "matched" } else { "no match" });
                Ok(resolved)
            }
            Err(e) => {
                timer.finish_with_info(&format!("failed: {}", e));
                Err(e)
            }
        }
    }

    /// Reconcile `target` against already fetched candidates
    pub fn resolve_against(
        &self,
        target: TargetRecord,
        candidates: &[CatalogRecord],
    ) -> ResolvedChain {
        let found = Reconciler::match_with_pass(&target, candidates);
        let matched = found.map(|(record, _)| record);

        let resolved = ResolvedChain {
            chain: RelationChainBuilder::build_owned_chain(matched),
            matched: matched.cloned(),
            match_pass: found.map(|(_, pass)| pass),
            target,
        };

        self.remember(&resolved);
        resolved
    }

    /// Previously resolved chain for `title` held in the session store
    pub fn cached(&self, title: &str) -> Option<ResolvedChain> {
        let store = self.store.as_ref()?;
        match store.get_as(&Self::chain_key(title)) {
            Ok(cached) => cached,
            Err(e) => {
                log::warn!("Discarding unreadable cached chain for '{}': {}", title, e);
                None
            }
        }
    }

    fn remember(&self, resolved: &ResolvedChain) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.set_as(&Self::chain_key(&resolved.target.title), resolved) {
            log::warn!("Failed to store chain for '{}': {}", resolved.target.title, e);
        }
    }
}
