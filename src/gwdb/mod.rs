//! Core GeneWeb base reader module
//!
//! A base is a directory of indexed binary stores (persons, families and
//! their notes) plus a small metadata file. Record payloads are handed to an
//! external [`RecordDecoder`]; this module only deals with the container
//! format around them.

pub mod database;
pub mod format;
pub mod notes;
pub mod types;
mod utils;

pub use database::{Database, EntityStore};
pub use format::base_info::read_base_info;
pub use format::store::{read_data, read_index, read_note_data, read_note_index, Store, StorePaths};
pub use notes::{segment_note, segment_note_with_limit, NOTE_MAX_LEN};
pub use types::error::{BoxError, GwdbError, Result};
pub use types::kinds::{FamilyKind, PersonKind, RecordDecoder, StoreKind};
pub use types::models::*;
