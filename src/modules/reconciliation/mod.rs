pub mod application;

pub use application::{ReconciliationService, ResolvedChain};
