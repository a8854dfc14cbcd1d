//! GEDCOM 5.5.5 output: document graph, field encoding and serialization.

pub mod assemble;
pub mod export;
pub mod fields;
pub mod node;
pub mod tags;
pub mod writer;

pub use assemble::{collect_referenced_families, DocumentAssembler};
pub use export::{build_document, header_node, write_gedcom, ExportOptions, HeaderInfo};
pub use node::{Document, Node, Value};
pub use tags::{event_tag, marriage_tag, EventName, EventTag};
pub use writer::GedcomWriter;
