//! Fire-and-forget reachability checks for streaming servers

use futures::future::join_all;
use std::time::Duration;

use super::transport::RequestTransport;
use crate::modules::retrieval::domain::HttpRequest;
use crate::modules::retrieval::infrastructure::catalog::models::ServerDescriptor;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

/// HEAD `link` and report whether anything answered before `timeout`.
/// Any response counts as reachable, whatever its status.
pub async fn probe_server(transport: &dyn RequestTransport, link: &str, timeout: Duration) -> bool {
    let request = HttpRequest::head(link);
    let reachable = matches!(
        tokio::time::timeout(timeout, transport.send(&request)).await,
        Ok(Ok(_))
    );
    log::debug!("Probe: {} reachable={}", link, reachable);
    reachable
}

/// Probe every server concurrently, pairing each descriptor with its result
pub async fn probe_all<'a>(
    transport: &dyn RequestTransport,
    servers: &'a [ServerDescriptor],
    timeout: Duration,
) -> Vec<(&'a ServerDescriptor, bool)> {
    let checks = servers
        .iter()
        .map(|server| probe_server(transport, &server.server_link, timeout));
    servers.iter().zip(join_all(checks).await).collect()
}
