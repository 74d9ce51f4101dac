pub mod matching;
pub mod reconciliation;
pub mod retrieval;
