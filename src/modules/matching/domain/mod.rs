pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{CatalogRecord, RelationEdge, TargetRecord, Title};
pub use services::{
    DateMatcher, MatchPass, Reconciler, RelationChainBuilder, TitleMatcher, Tokenizer,
};
pub use value_objects::{MediaCategory, MediaFormat, MediaKind, PartialDate, RelationType};
