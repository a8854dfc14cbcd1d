//! File format parsing layer for GeneWeb bases.
//!
//! # Module Organization
//!
//! - [`base_info`]: Parses the singleton `pb_base_info.dat` metadata file
//! - [`store`]: Reads index/data/note file quadruples into raw records
//!
//! # Architecture
//!
//! ```text
//! Base directory:
//! ┌──────────────────────────┐
//! │ pb_base_info.dat         │ ← base_info::read_base_info()
//! ├──────────────────────────┤
//! │ pb_base_person.{inx,dat} │ ← store::Store::open()
//! │ pb_base_person_note.*    │
//! ├──────────────────────────┤
//! │ pb_base_family.{inx,dat} │ ← store::Store::open()
//! │ pb_base_family_note.*    │
//! └──────────────────────────┘
//! ```

pub mod base_info;
pub mod store;
