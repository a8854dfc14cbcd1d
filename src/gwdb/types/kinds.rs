//! Specialization logic for the entity stores of a base (persons vs families).

use super::error::BoxError;
use super::models::{Family, Person};

/// The external record-schema decoder.
///
/// Record payloads are serialized with a fixed message schema that this crate
/// does not depend on. Implementations turn one payload into one entity and
/// must be pure: same bytes, same entity.
pub trait RecordDecoder {
    fn decode_person(&self, bytes: &[u8]) -> Result<Person, BoxError>;
    fn decode_family(&self, bytes: &[u8]) -> Result<Family, BoxError>;
}

/// A trait that defines one kind of entity store in a base.
pub trait StoreKind {
    /// A short name used for logging and error context.
    const DEBUG_NAME: &'static str;

    /// File name prefix of the four store files (`<prefix>.inx`, `<prefix>.dat`,
    /// `<prefix>_note.inx`, `<prefix>_note.dat`).
    const FILE_PREFIX: &'static str;

    /// The entity decoded from each record.
    type Entity: std::fmt::Debug + Clone;

    /// Dispatches one record payload to the matching decoder method.
    fn decode<D: RecordDecoder + ?Sized>(decoder: &D, bytes: &[u8]) -> Result<Self::Entity, BoxError>;
}

/// Zero-cost marker struct for the person store.
#[derive(Debug, Clone, Copy)]
pub struct PersonKind;

impl StoreKind for PersonKind {
    const DEBUG_NAME: &'static str = "person";
    const FILE_PREFIX: &'static str = "pb_base_person";
    type Entity = Person;

    fn decode<D: RecordDecoder + ?Sized>(decoder: &D, bytes: &[u8]) -> Result<Person, BoxError> {
        decoder.decode_person(bytes)
    }
}

/// Zero-cost marker struct for the family store.
#[derive(Debug, Clone, Copy)]
pub struct FamilyKind;

impl StoreKind for FamilyKind {
    const DEBUG_NAME: &'static str = "family";
    const FILE_PREFIX: &'static str = "pb_base_family";
    type Entity = Family;

    fn decode<D: RecordDecoder + ?Sized>(decoder: &D, bytes: &[u8]) -> Result<Family, BoxError> {
        decoder.decode_family(bytes)
    }
}
