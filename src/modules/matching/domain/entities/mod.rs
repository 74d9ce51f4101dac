pub mod catalog_record;
pub mod target_record;

pub use catalog_record::{CatalogRecord, RelationEdge, Title};
pub use target_record::TargetRecord;
