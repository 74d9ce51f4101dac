pub mod probe;
pub mod resilient_fetcher;
pub mod retry_policy;
pub mod transport;

pub use probe::{probe_all, probe_server, DEFAULT_PROBE_TIMEOUT};
pub use resilient_fetcher::ResilientFetcher;
pub use retry_policy::RetryPolicy;
pub use transport::{RequestTransport, ReqwestTransport};
