//! Base metadata parsing (`pb_base_info.dat`).
//!
//! Structure:
//! - 4 bytes: Number of persons
//! - 4 bytes: Sosa id
//! - 1 byte:  Reserved
//! - 4 bytes: Root sosa id
//! - 4 bytes: Timestamp length
//! - N bytes: Timestamp as a decimal string (Unix seconds)

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use byteorder::ReadBytesExt;
use log::info;

use crate::gwdb::types::error::{GwdbError, Result};
use crate::gwdb::types::models::BaseInfo;
use crate::gwdb::utils;

pub const BASE_INFO_FILE: &str = "pb_base_info.dat";

/// Reads the base info file under `root`.
pub fn read_base_info(root: impl AsRef<Path>) -> Result<BaseInfo> {
    let path = root.as_ref().join(BASE_INFO_FILE);
    if !path.is_file() {
        return Err(GwdbError::MissingFile { path });
    }

    let file = File::open(&path).map_err(|e| GwdbError::io(&path, "opening base info", e))?;
    let mut reader = BufReader::new(file);

    let person_count = utils::read_u32(&mut reader, &path, "the person count")?;
    let sosa = utils::read_u32(&mut reader, &path, "the sosa id")?;
    let _reserved = reader.read_u8().map_err(|e| short_or_io(&path, e))?;
    let root_sosa = utils::read_u32(&mut reader, &path, "the root sosa id")?;
    let timestamp_len = utils::read_u32(&mut reader, &path, "the timestamp length")?;

    let raw = utils::read_bounded(&mut reader, timestamp_len)
        .map_err(|e| short_or_io(&path, e))?
        .ok_or_else(|| GwdbError::malformed(&path, "file ends before the timestamp"))?;

    let text = String::from_utf8_lossy(&raw);
    let timestamp = text.trim().parse::<i64>().map_err(|_| GwdbError::InvalidTimestamp {
        path: path.clone(),
        value: text.to_string(),
    })?;

    let base_info = BaseInfo {
        person_count,
        sosa,
        root_sosa,
        timestamp,
    };
    info!(
        "Base info: persons={}, sosa={}, root_sosa={}, generated={}",
        base_info.person_count,
        base_info.sosa,
        base_info.root_sosa,
        base_info
            .generated_at()
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| base_info.timestamp.to_string())
    );
    Ok(base_info)
}

fn short_or_io(path: &Path, e: std::io::Error) -> GwdbError {
    match e.kind() {
        ErrorKind::UnexpectedEof => GwdbError::malformed(path, "file ends before the timestamp"),
        _ => GwdbError::io(path, "reading base info", e),
    }
}
