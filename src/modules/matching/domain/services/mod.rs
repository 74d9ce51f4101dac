pub mod date_matcher;
pub mod reconciler;
pub mod relation_chain;
pub mod title_matcher;
pub mod tokenizer;

pub use date_matcher::DateMatcher;
pub use reconciler::{MatchPass, Reconciler};
pub use relation_chain::RelationChainBuilder;
pub use title_matcher::TitleMatcher;
pub use tokenizer::Tokenizer;
