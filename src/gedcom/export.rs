//! One-call export of a decoded base to a GEDCOM file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use chrono::{Local, NaiveDateTime};
use log::info;

use crate::gwdb::database::Database;
use crate::gwdb::types::error::{GwdbError, Result};

use super::assemble::DocumentAssembler;
use super::node::{Document, Node};
use super::tags::tag;
use super::writer::GedcomWriter;

pub const GEDCOM_VERSION: &str = "5.5.5";

/// Metadata written to the `HEAD` record.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Approved system id of the generating source (`HEAD.SOUR`).
    pub source_id: String,
    pub source_name: String,
    pub source_version: String,
    pub corporation: String,
    pub website: Option<String>,
    /// Generation time; the current local time when `None`.
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for HeaderInfo {
    fn default() -> Self {
        Self {
            source_id: "Geneanet".to_string(),
            source_name: "GEDCOM computed file from a Geneanet Tree".to_string(),
            source_version: env!("CARGO_PKG_VERSION").to_string(),
            corporation: env!("CARGO_PKG_NAME").to_string(),
            website: None,
            generated_at: None,
        }
    }
}

/// Where and how to write the exported file.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// File stem of the output; the file is `<name>.ged`.
    pub name: String,
    pub output_dir: PathBuf,
    pub header: HeaderInfo,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            name: "export".to_string(),
            output_dir: PathBuf::from("output"),
            header: HeaderInfo::default(),
        }
    }
}

impl ExportOptions {
    pub fn file_name(&self) -> String {
        format!("{}.ged", self.name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.file_name())
    }
}

/// Builds the `HEAD` record.
pub fn header_node(info: &HeaderInfo, file_name: &str) -> Node {
    let generated_at = info.generated_at.unwrap_or_else(|| Local::now().naive_local());

    let mut source = Node::text(tag::SOUR, info.source_id.clone())
        .with_child(Node::text(tag::NAME, info.source_name.clone()))
        .with_child(Node::text(tag::VERS, info.source_version.clone()));
    let mut corporation = Node::text(tag::CORP, info.corporation.clone());
    if let Some(website) = &info.website {
        corporation.push(Node::text(tag::WWW, website.clone()));
    }
    source.push(corporation);

    Node::new(tag::HEAD)
        .with_child(
            Node::new(tag::GEDC)
                .with_child(Node::text(tag::VERS, GEDCOM_VERSION))
                .with_child(
                    Node::text(tag::FORM, "LINEAGE-LINKED")
                        .with_child(Node::text(tag::VERS, GEDCOM_VERSION)),
                ),
        )
        .with_child(Node::text(tag::CHAR, "UTF-8"))
        .with_child(source)
        .with_child(
            Node::text(tag::DATE, generated_at.format("%d %b %Y").to_string().to_uppercase())
                .with_child(Node::text(tag::TIME, generated_at.format("%H:%M:%S").to_string())),
        )
        .with_child(Node::text(tag::FILE, file_name))
}

/// Assembles the document for `database` without writing it.
pub fn build_document(database: &Database, options: &ExportOptions) -> Result<Document> {
    let header = header_node(&options.header, &options.file_name());
    DocumentAssembler::new(database).assemble(header)
}

/// Assembles and writes `<output_dir>/<name>.ged`. Returns the written path.
pub fn write_gedcom(database: &Database, options: &ExportOptions) -> Result<PathBuf> {
    let document = build_document(database, options)?;

    fs::create_dir_all(&options.output_dir)
        .map_err(|e| GwdbError::io(&options.output_dir, "creating the output directory", e))?;

    let path = options.output_path();
    let file = File::create(&path).map_err(|e| GwdbError::io(&path, "creating the GEDCOM file", e))?;
    let mut writer = GedcomWriter::new(BufWriter::new(file));
    writer
        .write_document(&document)
        .map_err(|e| GwdbError::io(&path, "writing the GEDCOM file", e))?;

    info!("GEDCOM written to {}", path.display());
    Ok(path)
}
