//! Document assembly: decoded persons and families to a GEDCOM graph.
//!
//! Families are built in two phases. First every family index referenced by a
//! person (as parent family or spouse family) is collected once, in order of
//! first reference. Then, after all individuals exist, each collected family
//! is filled from its canonical record and linked to the individuals.

use std::collections::HashSet;
use log::{debug, info, warn};

use crate::gwdb::database::Database;
use crate::gwdb::types::error::{GwdbError, Result};
use crate::gwdb::types::models::{Family, NoteKind, Person, SegmentedNote, Sex};

use super::fields::{event_node, marriage_nodes, title_node};
use super::node::{Document, Node};
use super::tags::{tag, FAMILY_EVENT_THRESHOLD};

const INDIVIDUAL_PREFIX: char = 'I';
const FAMILY_PREFIX: char = 'F';

/// Pointer of the individual for person `index`. Individual pointers are 1-based.
pub fn individual_pointer(index: u32) -> String {
    format!("{}{}", INDIVIDUAL_PREFIX, index as u64 + 1)
}

/// Pointer of the family for family `index`.
pub fn family_pointer(index: u32) -> String {
    format!("{}{}", FAMILY_PREFIX, index)
}

/// Parses the numeric index back out of a pointer such as `F12`.
pub fn parse_pointer_index(pointer: &str, prefix: char) -> Result<u32> {
    pointer
        .strip_prefix(prefix)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| GwdbError::InvalidPointer {
            pointer: pointer.to_string(),
            prefix,
        })
}

/// Family indices referenced by `persons`, deduplicated, in order of first
/// reference (parent family before spouse families, person by person).
pub fn collect_referenced_families(persons: &[Person]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for person in persons {
        for index in person.parents.iter().chain(person.families.iter()) {
            if seen.insert(*index) {
                order.push(*index);
            }
        }
    }
    order
}

/// Builds a [`Document`] from decoded entities and their note chains.
///
/// Person notes are looked up by person position, family notes by family
/// index.
pub struct DocumentAssembler<'a> {
    persons: &'a [Person],
    person_notes: &'a [Option<SegmentedNote>],
    families: &'a [Family],
    family_notes: &'a [Option<SegmentedNote>],
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(database: &'a Database) -> Self {
        Self {
            persons: &database.persons.entities,
            person_notes: &database.persons.notes,
            families: &database.families.entities,
            family_notes: &database.families.notes,
        }
    }

    pub fn from_parts(
        persons: &'a [Person],
        person_notes: &'a [Option<SegmentedNote>],
        families: &'a [Family],
        family_notes: &'a [Option<SegmentedNote>],
    ) -> Self {
        Self {
            persons,
            person_notes,
            families,
            family_notes,
        }
    }

    /// Assembles the document under the given header.
    ///
    /// # Errors
    /// Returns `InvalidPointer` if a family pointer cannot be parsed back to
    /// an index.
    pub fn assemble(&self, header: Node) -> Result<Document> {
        let mut document = Document::new(header);

        let referenced = collect_referenced_families(self.persons);
        debug!("{} families referenced by persons", referenced.len());

        for (position, person) in self.persons.iter().enumerate() {
            let node = self.individual_node(person, self.person_notes.get(position).and_then(Option::as_ref));
            if !document.add_individual(node) {
                warn!("Duplicate individual {} skipped", individual_pointer(person.index));
            }
        }

        for index in referenced {
            document.add_family(&family_pointer(index));
        }

        self.fill_families(&mut document)?;

        info!(
            "Document assembled: {} individuals, {} families",
            document.individuals().len(),
            document.families().len()
        );
        Ok(document)
    }

    fn individual_node(&self, person: &Person, note: Option<&SegmentedNote>) -> Node {
        let mut node = Node::record(tag::INDI, individual_pointer(person.index));
        node.push(Node::text(tag::NAME, display_name(person)));

        match person.sex {
            Some(Sex::Male) => node.push(Node::text(tag::SEX, "M")),
            Some(Sex::Female) => node.push(Node::text(tag::SEX, "F")),
            Some(Sex::Unknown) | None => {}
        }

        if !person.aliases.is_empty() {
            node.push(Node::text(tag::NAME, person.aliases.join(",")));
        }
        if !person.qualifiers.is_empty() {
            node.push(Node::text(tag::NICK, person.qualifiers.join(",")));
        }
        if !person.surname_aliases.is_empty() {
            node.push(Node::text(tag::SURN, person.surname_aliases.join(",")));
        }
        if let Some(occupation) = &person.occupation {
            node.push(Node::text(tag::OCCU, occupation.clone()));
        }
        if let Some(source) = &person.source {
            node.push(Node::text(tag::SOUR, source.clone()));
        }
        for title in &person.titles {
            node.push(title_node(title));
        }

        if let Some(parents) = person.parents {
            node.push(Node::pointer(tag::FAMC, family_pointer(parents)));
        }
        for &family in &person.families {
            node.push(Node::pointer(tag::FAMS, family_pointer(family)));
        }

        // family-scoped events are rendered on the family record
        for event in person.events.iter().filter(|e| e.code < FAMILY_EVENT_THRESHOLD) {
            if let Some(event) = event_node(event) {
                node.push(event);
            }
        }

        if let Some(note) = note.and_then(note_node) {
            node.push(note);
        }

        node
    }

    fn fill_families(&self, document: &mut Document) -> Result<()> {
        for pointer in document.family_pointers() {
            let index = parse_pointer_index(&pointer, FAMILY_PREFIX)?;
            let Some(family) = self.families.get(index as usize) else {
                warn!("Family {} is referenced but has no record; left empty", pointer);
                continue;
            };

            let mut children = marriage_nodes(family);
            if let Some(source) = &family.source {
                children.push(Node::text(tag::SOUR, source.clone()));
            }
            if let Some(father) = family.father {
                children.extend(link(document, tag::HUSB, father, &pointer));
            }
            if let Some(mother) = family.mother {
                children.extend(link(document, tag::WIFE, mother, &pointer));
            }
            for &child in &family.children {
                children.extend(link(document, tag::CHIL, child, &pointer));
            }
            if let Some(note) = self
                .family_notes
                .get(index as usize)
                .and_then(Option::as_ref)
                .and_then(note_node)
            {
                children.push(note);
            }

            if let Some(node) = document.family_mut(&pointer) {
                node.children.extend(children);
            }
        }
        Ok(())
    }
}

/// A link from a family to an individual, if that individual exists.
fn link(document: &Document, tag: &'static str, person: u32, family: &str) -> Option<Node> {
    let target = individual_pointer(person);
    if document.individual(&target).is_some() {
        Some(Node::pointer(tag, target))
    } else {
        debug!("{} {} of family {} does not resolve; link skipped", tag, target, family);
        None
    }
}

/// `"alias1,alias2" first /last/` when first-name aliases exist, else `first /last/`.
pub fn display_name(person: &Person) -> String {
    if person.first_name_aliases.is_empty() {
        format!("{} /{}/", person.first_name, person.last_name)
    } else {
        format!(
            "\"{}\" {} /{}/",
            person.first_name_aliases.join(","),
            person.first_name,
            person.last_name
        )
    }
}

/// Turns a continuation chain into a `NOTE` node with `CONT`/`CONC` children.
pub fn note_node(note: &SegmentedNote) -> Option<Node> {
    let (head, rest) = note.split_first()?;
    let mut node = Node::text(tag::NOTE, head.text.clone());
    for segment in rest {
        let tag = match segment.kind {
            NoteKind::Note => tag::NOTE,
            NoteKind::Continued => tag::CONT,
            NoteKind::Concatenated => tag::CONC,
        };
        node.push(Node::text(tag, segment.text.clone()));
    }
    Some(node)
}
