use std::sync::Arc;
use std::time::{Duration, Instant};

use super::models::*;
use crate::modules::matching::domain::{CatalogRecord, MediaCategory, MediaKind};
use crate::modules::retrieval::domain::HttpRequest;
use crate::modules::retrieval::infrastructure::http_client::{
    probe_all, RequestTransport, ReqwestTransport, ResilientFetcher, RetryPolicy,
};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

const MEDIA_CATALOG: &str = "MediaCatalog";
const GRAPH_CATALOG: &str = "GraphCatalog";

/// Typed access to the media catalog and the relation graph catalog.
/// Every catalog request goes through the resilient fetcher; server liveness
/// checks use their own transport so they never wait on the catalog quota.
pub struct CatalogClient {
    fetcher: ResilientFetcher,
    probe_transport: Arc<dyn RequestTransport>,
    media_base_url: String,
    graph_base_url: String,
    api_key: Option<String>,
    probe_timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new(config)?);
        let probe_transport = Arc::new(ReqwestTransport::unthrottled(config)?);
        Ok(Self::with_transport(transport, config).with_probe_transport(probe_transport))
    }

    /// Create client with a custom transport (for testing).
    /// The same transport serves probes until `with_probe_transport` replaces it.
    pub fn with_transport(transport: Arc<dyn RequestTransport>, config: &CatalogConfig) -> Self {
        Self {
            probe_transport: Arc::clone(&transport),
            fetcher: ResilientFetcher::new(transport, RetryPolicy::from_config(config)),
            media_base_url: config.media_base_url.clone(),
            graph_base_url: config.graph_base_url.clone(),
            api_key: config.api_key.clone(),
            probe_timeout: config.probe_timeout,
        }
    }

    pub fn with_probe_transport(mut self, transport: Arc<dyn RequestTransport>) -> Self {
        self.probe_transport = transport;
        self
    }

    pub fn fetcher(&self) -> &ResilientFetcher {
        &self.fetcher
    }

    /// Build URL with query parameters, appending the API key when configured
    fn build_url(&self, base_url: &str, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", base_url, endpoint);
        let api_key = self.api_key.iter().map(|key| ("api_key", key.clone()));

        for (index, (key, value)) in params.iter().cloned().chain(api_key).enumerate() {
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(&format!("{}={}", key, urlencoding::encode(&value)));
        }
        url
    }

    /// Look up general catalog entries by their id at an external provider
    pub async fn find_by_provider(
        &self,
        kind: MediaKind,
        provider_id: &str,
    ) -> AppResult<Vec<MediaSummary>> {
        let endpoint = format!("/media/{}/by-provider", kind.as_path());
        let url = self.build_url(
            &self.media_base_url,
            &endpoint,
            &[("provider", provider_id.to_string())],
        );

        log::info!("{}: Looking up {} for provider id '{}'", MEDIA_CATALOG, kind.as_path(), provider_id);
        let started = Instant::now();
        let response: MediaLookupResponse = self.fetcher.fetch_json(&HttpRequest::get(url)).await?;
        LogContext::api_call(
            MEDIA_CATALOG,
            &endpoint,
            &format!("{} results", response.results.len()),
            Some(started.elapsed().as_millis() as u64),
        );

        Ok(response.results)
    }

    /// Search the relation graph catalog
    pub async fn search(
        &self,
        category: MediaCategory,
        query: &str,
    ) -> AppResult<Vec<CatalogRecord>> {
        let endpoint = format!("/search/{}", category.as_path());
        let url = self.build_url(&self.graph_base_url, &endpoint, &[("query", query.to_string())]);

        log::info!("{}: Searching for '{}'", GRAPH_CATALOG, query);
        let started = Instant::now();
        let response: GraphSearchResponse = self.fetcher.fetch_json(&HttpRequest::get(url)).await?;
        LogContext::api_call(
            GRAPH_CATALOG,
            &endpoint,
            &format!("{} results", response.results.len()),
            Some(started.elapsed().as_millis() as u64),
        );

        Ok(response.results)
    }

    /// Streaming servers for a movie or an episode
    pub async fn servers(&self, query: &ServerQuery) -> AppResult<Vec<ServerDescriptor>> {
        let mut params = vec![
            ("id", query.id.to_string()),
            ("type", query.kind.as_path().to_string()),
        ];
        if let Some(season) = query.season {
            params.push(("season", season.to_string()));
        }
        if let Some(episode) = query.episode {
            params.push(("episode", episode.to_string()));
        }
        let url = self.build_url(&self.media_base_url, "/servers", &params);

        log::info!("{}: Listing servers for id {}", MEDIA_CATALOG, query.id);
        self.fetcher.fetch_json(&HttpRequest::get(url)).await
    }

    /// Servers that answer a reachability probe, in listing order
    pub async fn reachable_servers(&self, query: &ServerQuery) -> AppResult<Vec<ServerDescriptor>> {
        let servers = self.servers(query).await?;
        let reachable = probe_all(self.probe_transport.as_ref(), &servers, self.probe_timeout)
            .await
            .into_iter()
            .filter(|(_, up)| *up)
            .map(|(server, _)| server.clone())
            .collect::<Vec<_>>();

        log::info!(
            "{}: {}/{} servers reachable for id {}",
            MEDIA_CATALOG,
            reachable.len(),
            servers.len(),
            query.id
        );
        Ok(reachable)
    }
}
