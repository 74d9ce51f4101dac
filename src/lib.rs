pub mod modules;
pub mod shared;

use std::sync::Arc;

pub use modules::matching::domain::{
    CatalogRecord, MatchPass, MediaCategory, MediaFormat, MediaKind, PartialDate, Reconciler,
    RelationChainBuilder, RelationEdge, RelationType, TargetRecord, Title,
};
pub use modules::reconciliation::{ReconciliationService, ResolvedChain};
pub use modules::retrieval::{
    CatalogClient, FetchErrorKind, FetchOutcome, HttpRequest, HttpResponse, OutcomeError,
    RequestTransport, ResilientFetcher, RetryPolicy,
};
pub use shared::{AppError, AppResult, CatalogConfig, KeyPath, StateStore};

/// Load configuration from the environment, set up logging and wire the
/// reconciliation service with a fresh session store.
pub fn bootstrap() -> AppResult<ReconciliationService> {
    shared::utils::init_logger();

    let config = CatalogConfig::from_env()?;
    log::info!(
        "Catalogs: media={} graph={} attempts={}",
        config.media_base_url,
        config.graph_base_url,
        config.max_attempts
    );

    let client = Arc::new(CatalogClient::new(&config)?);
    Ok(ReconciliationService::new(client).with_store(Arc::new(StateStore::new())))
}
