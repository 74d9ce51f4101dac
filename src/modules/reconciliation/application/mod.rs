pub mod service;

pub use service::{ReconciliationService, ResolvedChain};
