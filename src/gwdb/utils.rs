//! Low-level byte reading utilities

use std::io::{ErrorKind, Read};
use std::path::Path;
use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use encoding_rs::UTF_8;
use log::warn;
use super::types::error::{GwdbError, Result};

/// Width of every integer field in the store files.
pub const U32_WIDTH: usize = 4;

/// Number of payload bytes shown in decode error messages.
const PREVIEW_LEN: usize = 16;

/// Read a 4-byte big-endian number.
///
/// A file that ends before the 4 bytes are available is malformed.
pub fn read_u32(reader: &mut impl Read, path: &Path, what: &str) -> Result<u32> {
    reader.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => GwdbError::malformed(path, format!("file ends inside {}", what)),
        _ => GwdbError::io(path, "reading", e),
    })
}

/// Read a 4-byte big-endian number, or `None` on a clean end of file.
///
/// Hitting end of file after 1 to 3 bytes is malformed: the file size is not
/// a multiple of the unit width.
pub fn read_u32_or_eof(reader: &mut impl Read, path: &Path) -> Result<Option<u32>> {
    let mut buf = [0u8; U32_WIDTH];
    let mut filled = 0;
    while filled < U32_WIDTH {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(GwdbError::io(path, "reading index", e)),
        }
    }

    match filled {
        0 => Ok(None),
        U32_WIDTH => Ok(Some(BigEndian::read_u32(&buf))),
        partial => Err(GwdbError::malformed(
            path,
            format!("trailing {} byte(s) do not form a full {}-byte index entry", partial, U32_WIDTH),
        )),
    }
}

/// Read one length-prefixed record.
///
/// Returns the number of bytes consumed (prefix included) with the payload.
pub fn read_record(reader: &mut impl Read, path: &Path, position: usize) -> Result<(u64, Vec<u8>)> {
    let len = read_u32(reader, path, "a record length prefix")?;
    let data = read_bounded(reader, len)
        .map_err(|e| GwdbError::io(path, "reading a record", e))?
        .ok_or_else(|| {
            GwdbError::malformed(
                path,
                format!("record #{} declares {} bytes but the file ends first", position, len),
            )
        })?;
    Ok((U32_WIDTH as u64 + len as u64, data))
}

/// Read exactly `len` bytes, or `None` if the input ends first.
///
/// The buffer grows with the bytes actually read, so a corrupt length never
/// drives the allocation.
pub fn read_bounded(reader: &mut impl Read, len: u32) -> std::io::Result<Option<Vec<u8>>> {
    let mut data = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut data)?;
    if data.len() < len as usize {
        Ok(None)
    } else {
        Ok(Some(data))
    }
}

/// Returns true if at least one more byte can be read.
pub fn has_trailing_bytes(reader: &mut impl Read, path: &Path) -> Result<bool> {
    let mut probe = [0u8; 1];
    loop {
        match reader.read(&mut probe) {
            Ok(n) => return Ok(n > 0),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(GwdbError::io(path, "checking for trailing data", e)),
        }
    }
}

/// Decode note bytes as UTF-8, replacing invalid sequences.
pub fn decode_text(bytes: &[u8], path: &Path, position: usize) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        warn!(
            "Note #{} in {} is not valid UTF-8; invalid sequences were replaced",
            position,
            path.display()
        );
    }
    text.into_owned()
}

/// Hex dump of the first bytes of a record, for error context.
pub fn hex_preview(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "<empty>".to_string();
    }
    let head = hex::encode(&bytes[..bytes.len().min(PREVIEW_LEN)]);
    if bytes.len() > PREVIEW_LEN {
        format!("{}… ({} bytes)", head, bytes.len())
    } else {
        head
    }
}
