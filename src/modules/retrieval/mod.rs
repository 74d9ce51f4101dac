pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{FetchErrorKind, FetchOutcome, HttpRequest, HttpResponse, OutcomeError};
pub use infrastructure::catalog::{MediaSummary, ServerDescriptor, ServerQuery};
pub use infrastructure::http_client::{probe_all, probe_server, DEFAULT_PROBE_TIMEOUT};
pub use infrastructure::{CatalogClient, RequestTransport, ReqwestTransport, ResilientFetcher, RetryPolicy};
