//! # geneweb-gedcom
//!
//! A reader for GeneWeb/Geneanet indexed binary bases (`pb_base_*` files)
//! and an exporter to GEDCOM 5.5.5.
//!
//! Record payloads use an external message schema; plug a decoder in through
//! [`RecordDecoder`] and this crate handles the store format, note
//! segmentation, document assembly and serialization.
pub mod gedcom;
pub mod gwdb;

// Re-export the main types for convenience
pub use gedcom::{write_gedcom, Document, EventName, ExportOptions, HeaderInfo};
pub use gwdb::{
    BaseInfo, Database, Family, GwdbError, Person, RecordDecoder, Result, Store,
};
