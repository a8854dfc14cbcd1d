//! Entity decoding: raw store records to persons and families.

use std::marker::PhantomData;
use std::path::Path;
use log::{debug, info};

use super::format::base_info::read_base_info;
use super::format::store::Store;
use super::notes::segment_note;
use super::types::error::{GwdbError, Result};
use super::types::kinds::{FamilyKind, PersonKind, RecordDecoder, StoreKind};
use super::types::models::{BaseInfo, Family, Person, SegmentedNote};
use super::utils;

/// Decoded entities of one store with their note chains.
///
/// `notes` is aligned with the note index of the store, which is itself
/// aligned with record positions.
#[derive(Debug, Clone)]
pub struct EntityStore<K: StoreKind> {
    pub entities: Vec<K::Entity>,
    pub notes: Vec<Option<SegmentedNote>>,
    _kind: PhantomData<K>,
}

impl<K: StoreKind> EntityStore<K> {
    /// Reads the store of kind `K` under `root` and decodes every record.
    ///
    /// # Errors
    /// Any store read error, or `Decode` with the record position if the
    /// decoder rejects a payload.
    pub fn load<D: RecordDecoder + ?Sized>(root: impl AsRef<Path>, decoder: &D) -> Result<Self> {
        let root = root.as_ref();
        let store = Store::open(root, K::FILE_PREFIX)?;
        let note_path = root.join(format!("{}_note.dat", K::FILE_PREFIX));
        Self::from_store(store, decoder, &note_path)
    }

    /// Decodes an already read store.
    pub fn from_store<D: RecordDecoder + ?Sized>(store: Store, decoder: &D, note_path: &Path) -> Result<Self> {
        let mut entities = Vec::with_capacity(store.records.len());
        for (index, bytes) in store.records.iter().enumerate() {
            let entity = K::decode(decoder, bytes).map_err(|source| GwdbError::Decode {
                kind: K::DEBUG_NAME,
                index,
                preview: utils::hex_preview(bytes),
                source,
            })?;
            entities.push(entity);
        }

        let notes = store
            .notes
            .iter()
            .enumerate()
            .map(|(position, slot)| {
                slot.as_ref()
                    .map(|bytes| segment_note(&utils::decode_text(bytes, note_path, position)))
            })
            .collect();

        debug!("Decoded {} {} records", entities.len(), K::DEBUG_NAME);

        Ok(Self {
            entities,
            notes,
            _kind: PhantomData,
        })
    }

    /// Returns the note chain of the entity at `position`, if any.
    pub fn note(&self, position: usize) -> Option<&SegmentedNote> {
        self.notes.get(position).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// A fully decoded base.
#[derive(Debug, Clone)]
pub struct Database {
    pub info: BaseInfo,
    pub persons: EntityStore<PersonKind>,
    pub families: EntityStore<FamilyKind>,
}

impl Database {
    /// Loads base info, then the person store, then the family store.
    pub fn load<D: RecordDecoder + ?Sized>(root: impl AsRef<Path>, decoder: &D) -> Result<Self> {
        let root = root.as_ref();
        info!("Loading base from {}", root.display());

        let info = read_base_info(root)?;
        let persons = EntityStore::<PersonKind>::load(root, decoder)?;
        let families = EntityStore::<FamilyKind>::load(root, decoder)?;

        if persons.len() != info.person_count as usize {
            debug!(
                "Base info announces {} persons, store holds {}",
                info.person_count,
                persons.len()
            );
        }

        info!("Base loaded: {} persons, {} families", persons.len(), families.len());
        Ok(Self { info, persons, families })
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons.entities
    }

    pub fn families(&self) -> &[Family] {
        &self.families.entities
    }
}
