//! Shared helpers: hand-built base directories and a plain-text record decoder.

#![allow(dead_code)]

use geneweb_gedcom::gwdb::{BoxError, Family, MarriageType, Person, RecordDecoder, Sex};
use std::fs;
use std::path::Path;

pub fn be(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// Length-prefixed records preceded by the declared total size.
pub fn data_file(records: &[&[u8]]) -> Vec<u8> {
    let total: usize = records.iter().map(|r| 4 + r.len()).sum();
    data_file_declaring(total as u32, records)
}

pub fn data_file_declaring(declared: u32, records: &[&[u8]]) -> Vec<u8> {
    let mut out = declared.to_be_bytes().to_vec();
    for record in records {
        out.extend((record.len() as u32).to_be_bytes());
        out.extend_from_slice(record);
    }
    out
}

/// Note data: an unused header, then one record per note.
pub fn note_file(notes: &[&str]) -> Vec<u8> {
    let mut out = 0u32.to_be_bytes().to_vec();
    for note in notes {
        out.extend((note.len() as u32).to_be_bytes());
        out.extend_from_slice(note.as_bytes());
    }
    out
}

/// Writes the four files of a store. `notes` pairs a slot position with its text.
pub fn write_store(dir: &Path, prefix: &str, records: &[&str], notes: &[(usize, &str)]) {
    let index: Vec<u32> = (0..records.len() as u32).collect();
    let payloads: Vec<&[u8]> = records.iter().map(|r| r.as_bytes()).collect();

    let mut note_index = vec![0u32; records.len()];
    let mut note_texts = Vec::new();
    let mut offset = 4;
    for &(position, text) in notes {
        note_index[position] = offset;
        offset += 4 + text.len() as u32;
        note_texts.push(text);
    }

    fs::write(dir.join(format!("{}.inx", prefix)), be(&index)).unwrap();
    fs::write(dir.join(format!("{}.dat", prefix)), data_file(&payloads)).unwrap();
    fs::write(dir.join(format!("{}_note.inx", prefix)), be(&note_index)).unwrap();
    fs::write(dir.join(format!("{}_note.dat", prefix)), note_file(&note_texts)).unwrap();
}

pub fn base_info_file(person_count: u32, sosa: u32, root_sosa: u32, timestamp: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend(person_count.to_be_bytes());
    out.extend(sosa.to_be_bytes());
    out.push(0);
    out.extend(root_sosa.to_be_bytes());
    out.extend((timestamp.len() as u32).to_be_bytes());
    out.extend_from_slice(timestamp.as_bytes());
    out
}

pub fn write_base_info(dir: &Path, person_count: u32) {
    fs::write(
        dir.join("pb_base_info.dat"),
        base_info_file(person_count, 1, 1, "1700000000"),
    )
    .unwrap();
}

/// Decodes `;`-separated text records.
///
/// Person: `index;first;last;sex;parents;fam,fam` (sex is `M`, `F` or `?`).
/// Family: `index;father;mother;child,child;marriage_code`.
/// Empty fields are absent.
pub struct TextDecoder;

fn optional(field: &str) -> Result<Option<u32>, BoxError> {
    if field.is_empty() {
        Ok(None)
    } else {
        Ok(Some(field.parse()?))
    }
}

fn list(field: &str) -> Result<Vec<u32>, BoxError> {
    field
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().map_err(BoxError::from))
        .collect()
}

fn fields(bytes: &[u8], expected: usize) -> Result<Vec<String>, BoxError> {
    let text = std::str::from_utf8(bytes)?;
    let fields: Vec<String> = text.split(';').map(str::to_string).collect();
    if fields.len() != expected {
        return Err(format!("expected {} fields, found {}", expected, fields.len()).into());
    }
    Ok(fields)
}

impl RecordDecoder for TextDecoder {
    fn decode_person(&self, bytes: &[u8]) -> Result<Person, BoxError> {
        let f = fields(bytes, 6)?;
        let sex = match f[3].as_str() {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            "?" => Some(Sex::Unknown),
            _ => None,
        };
        Ok(Person {
            index: f[0].parse()?,
            first_name: f[1].clone(),
            last_name: f[2].clone(),
            sex,
            parents: optional(&f[4])?,
            families: list(&f[5])?,
            ..Person::default()
        })
    }

    fn decode_family(&self, bytes: &[u8]) -> Result<Family, BoxError> {
        let f = fields(bytes, 5)?;
        Ok(Family {
            index: f[0].parse()?,
            father: optional(&f[1])?,
            mother: optional(&f[2])?,
            children: list(&f[3])?,
            marriage_type: MarriageType::try_from(f[4].parse::<u32>()?)?,
            ..Family::default()
        })
    }
}
