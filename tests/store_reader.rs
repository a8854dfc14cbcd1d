mod common;

use common::{be, data_file, data_file_declaring, note_file, write_store};
use geneweb_gedcom::gwdb::{
    read_base_info, read_data, read_index, read_note_data, GwdbError, Store, StorePaths,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn index_has_one_entry_per_four_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.inx");
    fs::write(&path, be(&[0, 7, 0xDEAD_BEEF])).unwrap();

    assert_eq!(read_index(&path).unwrap(), vec![0, 7, 0xDEAD_BEEF]);
}

#[test]
fn empty_index_is_valid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.inx");
    fs::write(&path, b"").unwrap();

    assert!(read_index(&path).unwrap().is_empty());
}

#[test]
fn index_with_partial_entry_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.inx");
    let mut bytes = be(&[1, 2]);
    bytes.extend([0xAA, 0xBB]);
    fs::write(&path, bytes).unwrap();

    match read_index(&path) {
        Err(GwdbError::Malformed { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn data_records_are_read_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.dat");
    fs::write(&path, data_file(&[b"abc", b"", b"hello"])).unwrap();

    let records = read_data(&path, 3).unwrap();
    assert_eq!(records, vec![b"abc".to_vec(), Vec::new(), b"hello".to_vec()]);
}

#[test]
fn declared_size_must_match_consumed_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.dat");
    // two records consume (4 + 3) + (4 + 5) = 16 bytes
    for declared in [15u32, 17] {
        fs::write(&path, data_file_declaring(declared, &[b"abc", b"hello"])).unwrap();

        match read_data(&path, 2) {
            Err(GwdbError::SizeMismatch { expected, found, .. }) => {
                assert_eq!(expected, declared as u64);
                assert_eq!(found, 16);
            }
            other => panic!("expected SizeMismatch for {}, got {:?}", declared, other),
        }
    }

    fs::write(&path, data_file_declaring(16, &[b"abc", b"hello"])).unwrap();
    assert_eq!(read_data(&path, 2).unwrap().len(), 2);
}

#[test]
fn huge_length_prefix_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.dat");
    let mut bytes = be(&[8, 0xFFFF_FFF0]);
    bytes.extend(b"abcd");
    fs::write(&path, bytes).unwrap();

    match read_data(&path, 1) {
        Err(GwdbError::Malformed { reason, .. }) => assert!(reason.contains("record #0")),
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn truncated_record_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.dat");
    let mut bytes = data_file(&[b"abcdef"]);
    bytes.truncate(bytes.len() - 2);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(read_data(&path, 1), Err(GwdbError::Malformed { .. })));
}

#[test]
fn bytes_after_last_record_are_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.dat");
    let mut bytes = data_file(&[b"abc"]);
    bytes.push(0);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(read_data(&path, 1), Err(GwdbError::Malformed { .. })));
}

#[test]
fn zero_note_entries_leave_empty_slots() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p_note.dat");
    // exactly two records: any extra read would run past the end of the file
    fs::write(&path, note_file(&["first", "second"])).unwrap();

    let notes = read_note_data(&path, &[0, 5, 0, 7]).unwrap();
    assert_eq!(
        notes,
        vec![None, Some(b"first".to_vec()), None, Some(b"second".to_vec())]
    );
}

#[test]
fn note_data_shorter_than_index_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p_note.dat");
    fs::write(&path, note_file(&["only"])).unwrap();

    assert!(matches!(
        read_note_data(&path, &[4, 12]),
        Err(GwdbError::Malformed { .. })
    ));
}

#[test]
fn missing_store_file_is_named() {
    let dir = tempdir().unwrap();
    write_store(dir.path(), "pb_base_person", &["a"], &[]);
    fs::remove_file(dir.path().join("pb_base_person_note.inx")).unwrap();

    match StorePaths::locate(dir.path(), "pb_base_person") {
        Err(GwdbError::MissingFile { path }) => {
            assert_eq!(path, dir.path().join("pb_base_person_note.inx"));
        }
        other => panic!("expected MissingFile, got {:?}", other),
    }
}

#[test]
fn store_aligns_records_and_notes() {
    let dir = tempdir().unwrap();
    write_store(dir.path(), "pb_base_family", &["r0", "r1", "r2"], &[(1, "note one")]);

    let store = Store::open(dir.path(), "pb_base_family").unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.index, vec![0, 1, 2]);
    assert_eq!(store.records[2], b"r2".to_vec());
    assert_eq!(store.notes, vec![None, Some(b"note one".to_vec()), None]);
}

#[test]
fn base_info_is_decoded() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("pb_base_info.dat"),
        common::base_info_file(42, 3, 9, "1700000000"),
    )
    .unwrap();

    let info = read_base_info(dir.path()).unwrap();
    assert_eq!(info.person_count, 42);
    assert_eq!(info.sosa, 3);
    assert_eq!(info.root_sosa, 9);
    assert_eq!(info.timestamp, 1_700_000_000);
    assert_eq!(
        info.generated_at().unwrap().to_rfc3339(),
        "2023-11-14T22:13:20+00:00"
    );
}

#[test]
fn base_info_with_bad_timestamp_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("pb_base_info.dat"),
        common::base_info_file(1, 1, 1, "yesterday"),
    )
    .unwrap();

    match read_base_info(dir.path()) {
        Err(GwdbError::InvalidTimestamp { value, .. }) => assert_eq!(value, "yesterday"),
        other => panic!("expected InvalidTimestamp, got {:?}", other),
    }
}

#[test]
fn huge_timestamp_length_is_malformed() {
    let dir = tempdir().unwrap();
    let mut bytes = common::base_info_file(1, 1, 1, "1700000000");
    // overwrite the timestamp length: 4 + 4 + 1 + 4 bytes precede it
    bytes[13..17].copy_from_slice(&0xFFFF_FFF0u32.to_be_bytes());
    fs::write(dir.path().join("pb_base_info.dat"), bytes).unwrap();

    assert!(matches!(
        read_base_info(dir.path()),
        Err(GwdbError::Malformed { .. })
    ));
}

#[test]
fn truncated_base_info_is_malformed() {
    let dir = tempdir().unwrap();
    let mut bytes = common::base_info_file(1, 1, 1, "1700000000");
    bytes.truncate(bytes.len() - 3);
    fs::write(dir.path().join("pb_base_info.dat"), bytes).unwrap();

    assert!(matches!(
        read_base_info(dir.path()),
        Err(GwdbError::Malformed { .. })
    ));
}
