//! Matching value objects

pub mod media_format;
pub mod partial_date;
pub mod relation_type;

pub use media_format::{MediaCategory, MediaFormat, MediaKind};
pub use partial_date::PartialDate;
pub use relation_type::RelationType;
