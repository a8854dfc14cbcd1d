//! GEDCOM line serialization.
//!
//! Each node becomes one line `level [@xref@ ]TAG[ value]`, followed by its
//! children at `level + 1`. The file ends with `0 TRLR`.

use std::io::{self, Write};

use super::node::{Document, Node, Value};
use super::tags::tag;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes a [`Document`] to any byte sink.
pub struct GedcomWriter<W: Write> {
    inner: W,
    bom: bool,
}

impl<W: Write> GedcomWriter<W> {
    /// A writer that starts the output with a UTF-8 byte order mark.
    pub fn new(inner: W) -> Self {
        Self { inner, bom: true }
    }

    pub fn without_bom(inner: W) -> Self {
        Self { inner, bom: false }
    }

    pub fn write_document(&mut self, document: &Document) -> io::Result<()> {
        if self.bom {
            self.inner.write_all(UTF8_BOM)?;
        }
        self.write_node(&document.header, 0)?;
        for node in document.individuals() {
            self.write_node(node, 0)?;
        }
        for node in document.families() {
            self.write_node(node, 0)?;
        }
        self.write_node(&Node::new(tag::TRLR), 0)?;
        self.inner.flush()
    }

    fn write_node(&mut self, node: &Node, level: usize) -> io::Result<()> {
        write!(self.inner, "{}", level)?;
        if let Some(xref) = &node.xref {
            write!(self.inner, " @{}@", xref)?;
        }
        write!(self.inner, " {}", node.tag)?;
        match &node.value {
            Value::Text(text) if !text.is_empty() => write!(self.inner, " {}", escape_text(text))?,
            Value::Text(_) | Value::None => {}
            Value::Pointer(pointer) => write!(self.inner, " @{}@", pointer)?,
        }
        self.inner.write_all(b"\n")?;

        for child in &node.children {
            self.write_node(child, level + 1)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Escapes a text value: `@` is doubled and line breaks become spaces so a
/// value never spans lines.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '@' => escaped.push_str("@@"),
            '\r' | '\n' => escaped.push(' '),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders a document to a string, without byte order mark.
pub fn to_string(document: &Document) -> String {
    let mut writer = GedcomWriter::without_bom(Vec::new());
    // writing into a Vec cannot fail
    let _ = writer.write_document(document);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}
