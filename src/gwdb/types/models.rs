//! Core data structures for decoded GeneWeb bases.
//!
//! This module defines the values the rest of the library passes around:
//! - Base metadata read from `pb_base_info.dat`
//! - Persons and families as produced by the record-schema decoder
//! - Dates, titles and events attached to them
//! - Segmented notes ready for GEDCOM continuation encoding

use chrono::{DateTime, Utc};
use super::error::{GwdbError, Result};

/// Metadata stored in the singleton `pb_base_info.dat` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseInfo {
    pub person_count: u32,
    pub sosa: u32,
    /// Sosa id of the subject of the tree.
    pub root_sosa: u32,
    /// Generation time of the base, in Unix seconds.
    pub timestamp: i64,
}

impl BaseInfo {
    /// Returns the generation time, or `None` if the timestamp is out of range.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl TryFrom<u32> for Sex {
    type Error = GwdbError;
    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Male),
            1 => Ok(Self::Female),
            2 => Ok(Self::Unknown),
            _ => Err(GwdbError::UnknownCode { what: "sex", code: value }),
        }
    }
}

/// Certainty qualifier of a date.
///
/// The first five are single-point precisions; `OrYear` and `YearInterval`
/// combine the primary point with an optional second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Sure,
    About,
    Maybe,
    Before,
    After,
    OrYear,
    YearInterval,
}

impl TryFrom<u32> for Precision {
    type Error = GwdbError;
    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Sure),
            1 => Ok(Self::About),
            2 => Ok(Self::Maybe),
            3 => Ok(Self::Before),
            4 => Ok(Self::After),
            5 => Ok(Self::OrYear),
            6 => Ok(Self::YearInterval),
            _ => Err(GwdbError::UnknownCode { what: "date precision", code: value }),
        }
    }
}

/// A calendar point. Each part is independently optional; a day or month
/// of 0 is treated the same as an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dmy {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl Dmy {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Date {
    pub precision: Precision,
    pub dmy: Dmy,
    /// Second bound, only meaningful for `OrYear` and `YearInterval`.
    pub dmy2: Option<Dmy>,
}

impl Date {
    pub fn new(precision: Precision, dmy: Dmy) -> Self {
        Self {
            precision,
            dmy,
            dmy2: None,
        }
    }
}

/// A nobility or honorary title held by a person.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Title {
    pub name: String,
    pub fief: String,
    pub date_begin: Option<Date>,
    pub date_end: Option<Date>,
}

/// A life event. `code` is the schema's event-name code, see
/// [`EventName`](crate::EventName) for the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub code: u32,
    pub date: Option<Date>,
    pub place: Option<String>,
    pub source: Option<String>,
}

/// A person record as produced by the external schema decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub index: u32,
    pub first_name: String,
    pub last_name: String,
    pub first_name_aliases: Vec<String>,
    pub aliases: Vec<String>,
    pub qualifiers: Vec<String>,
    pub surname_aliases: Vec<String>,
    pub sex: Option<Sex>,
    pub occupation: Option<String>,
    pub source: Option<String>,
    pub titles: Vec<Title>,
    pub events: Vec<Event>,
    /// Index of the family this person is a child of.
    pub parents: Option<u32>,
    /// Indices of the families this person is a spouse in.
    pub families: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarriageType {
    #[default]
    Married,
    NotMarried,
    Engaged,
    NoSexesCheckNotMarried,
    NoMention,
    NoSexesCheckMarried,
    MarriageBann,
    MarriageContract,
    MarriageLicense,
    Pacs,
    Residence,
}

impl TryFrom<u32> for MarriageType {
    type Error = GwdbError;
    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Married),
            1 => Ok(Self::NotMarried),
            2 => Ok(Self::Engaged),
            3 => Ok(Self::NoSexesCheckNotMarried),
            4 => Ok(Self::NoMention),
            5 => Ok(Self::NoSexesCheckMarried),
            6 => Ok(Self::MarriageBann),
            7 => Ok(Self::MarriageContract),
            8 => Ok(Self::MarriageLicense),
            9 => Ok(Self::Pacs),
            10 => Ok(Self::Residence),
            _ => Err(GwdbError::UnknownCode { what: "marriage type", code: value }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivorceType {
    #[default]
    NotDivorced,
    Divorced,
    Separated,
}

impl TryFrom<u32> for DivorceType {
    type Error = GwdbError;
    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::NotDivorced),
            1 => Ok(Self::Divorced),
            2 => Ok(Self::Separated),
            _ => Err(GwdbError::UnknownCode { what: "divorce type", code: value }),
        }
    }
}

/// A family record as produced by the external schema decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Family {
    pub index: u32,
    pub father: Option<u32>,
    pub mother: Option<u32>,
    pub children: Vec<u32>,
    pub marriage_type: MarriageType,
    pub marriage_date: Option<Date>,
    pub marriage_place: Option<String>,
    pub marriage_source: Option<String>,
    pub divorce_type: DivorceType,
    pub divorce_date: Option<Date>,
    pub divorce_place: Option<String>,
    pub divorce_source: Option<String>,
    pub source: Option<String>,
}

/// Role of a note segment in a GEDCOM continuation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Head of the chain (`NOTE`).
    Note,
    /// Starts a new line after a hard break (`CONT`).
    Continued,
    /// Continues the previous line with no break (`CONC`).
    Concatenated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSegment {
    pub kind: NoteKind,
    pub text: String,
}

/// An ordered continuation chain. The first segment is always a `Note`.
pub type SegmentedNote = Vec<NoteSegment>;
