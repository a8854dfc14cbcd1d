//! # Indexed Store Parsing
//!
//! A store is four files sharing a prefix:
//!
//! ```text
//! <prefix>.inx       u32 entries until EOF, one per record
//! <prefix>.dat       u32 declared size, then per record: u32 length + payload
//! <prefix>_note.inx  u32 entries until EOF, one per note slot (0 = no note)
//! <prefix>_note.dat  u32 header (unused), then one record per non-zero slot
//! ```
//!
//! All integers are big-endian. Every function opens its file, reads it fully
//! and drops the handle before returning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use log::{debug, info, trace};

use crate::gwdb::types::error::{GwdbError, Result};
use crate::gwdb::utils;

/// Paths of the four files making up one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub index: PathBuf,
    pub data: PathBuf,
    pub note_index: PathBuf,
    pub note_data: PathBuf,
}

impl StorePaths {
    /// Builds the store paths for `prefix` under `root` and checks that all
    /// four files exist.
    ///
    /// # Errors
    /// Returns `MissingFile` naming the first absent file, checked in the
    /// order index, data, note index, note data.
    pub fn locate(root: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let root = root.as_ref();
        let paths = Self {
            index: root.join(format!("{}.inx", prefix)),
            data: root.join(format!("{}.dat", prefix)),
            note_index: root.join(format!("{}_note.inx", prefix)),
            note_data: root.join(format!("{}_note.dat", prefix)),
        };

        for path in [&paths.index, &paths.data, &paths.note_index, &paths.note_data] {
            if !path.is_file() {
                return Err(GwdbError::MissingFile { path: path.clone() });
            }
        }

        Ok(paths)
    }
}

/// Raw contents of one store, aligned by position.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub index: Vec<u32>,
    pub records: Vec<Vec<u8>>,
    pub note_index: Vec<u32>,
    /// One slot per note index entry; `None` where the entry is zero.
    pub notes: Vec<Option<Vec<u8>>>,
}

impl Store {
    /// Locates and reads all four files of the store `prefix` under `root`.
    pub fn open(root: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let root = root.as_ref();
        let paths = StorePaths::locate(root, prefix)?;
        info!("Opening store {} in {}", prefix, root.display());

        let index = read_index(&paths.index)?;
        let records = read_data(&paths.data, index.len())?;
        let note_index = read_note_index(&paths.note_index)?;
        let notes = read_note_data(&paths.note_data, &note_index)?;

        info!(
            "Store {} read: {} records, {} notes",
            prefix,
            records.len(),
            notes.iter().filter(|n| n.is_some()).count()
        );

        Ok(Self {
            index,
            records,
            note_index,
            notes,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn open(path: &Path, phase: &'static str) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| GwdbError::io(path, phase, e))
}

/// Reads an index file: one u32 per record until end of file.
///
/// # Errors
/// Returns `Malformed` if the file size is not a multiple of 4.
pub fn read_index(path: &Path) -> Result<Vec<u32>> {
    let mut reader = open(path, "opening index")?;
    let mut index = Vec::new();
    while let Some(entry) = utils::read_u32_or_eof(&mut reader, path)? {
        index.push(entry);
    }
    debug!("Index {}: {} entries", path.display(), index.len());
    Ok(index)
}

/// Reads `count` length-prefixed records from a data file.
///
/// The 4-byte header declares the total size of the records that follow
/// (prefixes included). The bytes actually consumed must match it exactly.
///
/// # Errors
/// - `Malformed` if a record is truncated or bytes remain after the last one.
/// - `SizeMismatch` if the consumed size differs from the declared size.
pub fn read_data(path: &Path, count: usize) -> Result<Vec<Vec<u8>>> {
    let mut reader = open(path, "opening data")?;
    let declared = utils::read_u32(&mut reader, path, "the declared size header")? as u64;

    let mut consumed: u64 = 0;
    let mut records = Vec::with_capacity(count);
    for position in 0..count {
        let (size, data) = utils::read_record(&mut reader, path, position)?;
        trace!("Record #{} in {}: {} bytes", position, path.display(), data.len());
        consumed += size;
        records.push(data);
    }

    if consumed != declared {
        return Err(GwdbError::SizeMismatch {
            path: path.to_path_buf(),
            expected: declared,
            found: consumed,
        });
    }

    if utils::has_trailing_bytes(&mut reader, path)? {
        return Err(GwdbError::malformed(
            path,
            format!("data continues after the {} records listed in the index", count),
        ));
    }

    debug!("Data {}: {} records, {} bytes", path.display(), records.len(), consumed);
    Ok(records)
}

/// Reads a note index file. Same layout as [`read_index`].
pub fn read_note_index(path: &Path) -> Result<Vec<u32>> {
    read_index(path)
}

/// Reads note records, one per non-zero entry of `note_index`.
///
/// Zero entries produce an empty slot and consume nothing from the file.
pub fn read_note_data(path: &Path, note_index: &[u32]) -> Result<Vec<Option<Vec<u8>>>> {
    let mut reader = open(path, "opening note data")?;
    let _header = utils::read_u32(&mut reader, path, "the note data header")?;

    let mut notes = Vec::with_capacity(note_index.len());
    for (position, &entry) in note_index.iter().enumerate() {
        if entry == 0 {
            notes.push(None);
            continue;
        }
        let (_, data) = utils::read_record(&mut reader, path, position)?;
        trace!("Note #{} in {}: {} bytes", position, path.display(), data.len());
        notes.push(Some(data));
    }

    Ok(notes)
}
