//! sarafu-ingest: document-kind detection and family-specific ledger
//! segmenters over decoded statement text.

pub mod types;
pub mod classifier;
pub mod parsers;

pub use types::{RawTransaction, DocumentKind};
pub use classifier::classify_document;
pub use parsers::segment_ledger;
