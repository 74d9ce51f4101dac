pub mod catalog;
pub mod http_client;

pub use catalog::CatalogClient;
pub use http_client::{RequestTransport, ReqwestTransport, ResilientFetcher, RetryPolicy};
