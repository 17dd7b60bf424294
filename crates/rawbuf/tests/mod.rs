use std::io::Cursor;

use rawbuf::{DEFAULT_SIZE, Error, Mode, Policy, Result, Store};
use tempfile::TempDir;

/// Helper to create a store with some bytes already written
fn setup_written_store(policy: Policy, size: usize, bytes: &[u8]) -> Result<Store> {
    let mut store = Store::new(policy, size);
    store.put_bytes(bytes)?;
    Ok(store)
}

#[test]
fn test_store_creation() {
    let store = Store::new(Policy::Growable, 16);

    assert_eq!(store.mode(), Mode::Write);
    assert_eq!(store.policy(), Policy::Growable);
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.len(), 16);
    assert!(store.as_bytes().is_empty());

    let store = Store::default();
    assert_eq!(store.len(), DEFAULT_SIZE);
    assert_eq!(store.policy(), Policy::Growable);
}

#[test]
fn test_growable_doubles() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 4, &[1, 2, 3, 4])?;
    assert_eq!(store.len(), 4);

    store.put_byte(5)?;
    assert_eq!(store.len(), 8);
    assert_eq!(store.cursor(), 5);
    assert_eq!(store.as_bytes(), &[1, 2, 3, 4, 5]);

    Ok(())
}

#[test]
fn test_growable_fits_large_write() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 4, &[1, 2])?;

    // Doubling to 8 isn't enough, grow exactly to fit
    store.put_bytes(&[0xAA; 20])?;
    assert_eq!(store.len(), 22);
    assert_eq!(store.remaining(), 0);

    Ok(())
}

#[test]
fn test_growable_from_zero() -> Result<()> {
    let mut store = Store::new(Policy::Growable, 0);
    store.put_byte(7)?;
    store.put_byte(8)?;
    assert_eq!(store.as_bytes(), &[7, 8]);
    Ok(())
}

#[test]
fn test_growth_from_one_keeps_every_byte() -> Result<()> {
    let input: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();

    let mut growable = Store::new(Policy::Growable, 1);
    let mut fixed = Store::new(Policy::Fixed, 1000);
    for byte in &input {
        growable.put_byte(*byte)?;
        fixed.put_byte(*byte)?;
    }

    assert_eq!(growable.snapshot_bytes(), input);
    assert_eq!(fixed.snapshot_bytes(), input);

    growable.to_read();
    fixed.to_read();
    assert_eq!(growable, fixed);

    Ok(())
}

#[test]
fn test_fixed_rejects_overflow() -> Result<()> {
    let mut store = setup_written_store(Policy::Fixed, 4, &[1, 2, 3])?;

    let err = store.put_bytes(&[4, 5]).unwrap_err();
    assert!(matches!(
        err,
        Error::CapacityExceeded {
            requested: 2,
            available: 1,
            capacity: 4
        }
    ));

    // Nothing was written and the storage wasn't reallocated
    assert_eq!(store.cursor(), 3);
    assert_eq!(store.len(), 4);

    store.put_byte(4)?;
    assert!(store.put_byte(5).unwrap_err().is_capacity_exceeded());

    Ok(())
}

#[test]
fn test_wrong_mode() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 4, &[1])?;

    let err = store.take_bytes(1).unwrap_err();
    assert!(matches!(
        err,
        Error::WrongMode {
            expected: Mode::Read,
            found: Mode::Write
        }
    ));

    store.to_read();
    let err = store.put_byte(2).unwrap_err();
    assert!(matches!(
        err,
        Error::WrongMode {
            expected: Mode::Write,
            found: Mode::Read
        }
    ));

    Ok(())
}

#[test]
fn test_to_read_trims_and_resets() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 32, &[9, 8, 7])?;

    store.to_read();

    assert_eq!(store.mode(), Mode::Read);
    assert_eq!(store.policy(), Policy::Fixed);
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.len(), 3);
    assert_eq!(store.take_bytes(3)?, &[9, 8, 7]);

    Ok(())
}

#[test]
fn test_to_read_idempotent() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 8, &[1, 2, 3, 4])?;

    store.to_read();
    assert_eq!(store.take_byte()?, 1);

    // A second call neither truncates nor moves the cursor
    store.to_read();
    assert_eq!(store.cursor(), 1);
    assert_eq!(store.len(), 4);
    assert_eq!(store.take_bytes(3)?, &[2, 3, 4]);

    Ok(())
}

#[test]
fn test_to_write_appends() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 8, &[1, 2])?;
    store.to_read();

    store.to_write(Policy::Fixed, 2);
    assert_eq!(store.mode(), Mode::Write);
    assert_eq!(store.policy(), Policy::Fixed);
    assert_eq!(store.cursor(), 2);
    assert_eq!(store.len(), 4);

    store.put_bytes(&[3, 4])?;
    assert!(store.put_byte(5).unwrap_err().is_capacity_exceeded());

    // Already writing: policy and capacity stay as they are
    store.to_write(Policy::Growable, 100);
    assert_eq!(store.policy(), Policy::Fixed);
    assert_eq!(store.len(), 4);

    store.to_read();
    assert_eq!(store.as_bytes(), &[1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_to_write_default() -> Result<()> {
    let mut store = Store::from_vec(vec![1]);
    store.to_write_default();

    assert_eq!(store.policy(), Policy::Growable);
    assert_eq!(store.len(), 1 + DEFAULT_SIZE);
    assert_eq!(store.cursor(), 1);

    Ok(())
}

#[test]
fn test_snapshot_is_exact() -> Result<()> {
    let store = setup_written_store(Policy::Growable, 64, &[1, 2, 3])?;

    // Only the written range, never the spare capacity or a trailing byte
    assert_eq!(store.snapshot_bytes(), vec![1, 2, 3]);
    assert_eq!(store.clone().into_bytes(), vec![1, 2, 3]);

    let empty = Store::new(Policy::Fixed, 8);
    assert!(empty.snapshot_bytes().is_empty());

    Ok(())
}

#[test]
fn test_snapshot_in_read_mode() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 64, &[1, 2, 3])?;
    store.to_read();
    store.take_byte()?;

    assert_eq!(store.snapshot_bytes(), vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_seek() -> Result<()> {
    let mut store = Store::from_vec(vec![10, 20, 30, 40]);

    store.seek(2)?;
    assert_eq!(store.take_byte()?, 30);

    store.seek(-3)?;
    assert_eq!(store.take_byte()?, 10);

    store.seek(3)?;
    assert_eq!(store.cursor(), 4);

    let err = store.seek(1).unwrap_err();
    assert!(matches!(
        err,
        Error::Overflow {
            position: 4,
            requested: 1,
            len: 4
        }
    ));

    let err = store.seek(-5).unwrap_err();
    assert!(matches!(
        err,
        Error::Underflow {
            position: 4,
            delta: 5
        }
    ));

    assert_eq!(store.cursor(), 4);

    Ok(())
}

#[test]
fn test_seek_skips_while_writing() -> Result<()> {
    let mut store = Store::new(Policy::Fixed, 4);

    store.seek(2)?;
    store.put_bytes(&[1, 2])?;
    assert_eq!(store.as_bytes(), &[0, 0, 1, 2]);

    assert!(store.seek(1).unwrap_err().is_overflow());

    Ok(())
}

#[test]
fn test_rewind_overwrites() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 8, &[1, 2, 3])?;

    store.rewind();
    assert_eq!(store.mode(), Mode::Write);
    assert_eq!(store.policy(), Policy::Growable);

    store.put_byte(9)?;
    store.to_read();
    assert_eq!(store.as_bytes(), &[9]);

    store.take_byte()?;
    store.rewind();
    assert_eq!(store.take_byte()?, 9);

    Ok(())
}

#[test]
fn test_take_past_end() -> Result<()> {
    let mut store = Store::from_vec(vec![1, 2, 3]);

    let err = store.take_bytes(4).unwrap_err();
    assert!(matches!(
        err,
        Error::Overflow {
            position: 0,
            requested: 4,
            len: 3
        }
    ));

    assert_eq!(store.take_array::<3>()?, [1, 2, 3]);
    assert!(store.take_byte().unwrap_err().is_overflow());

    Ok(())
}

#[test]
fn test_from_prefix() -> Result<()> {
    let bytes = [1, 2, 3, 4, 5];

    let mut store = Store::from_prefix(&bytes, 3)?;
    assert_eq!(store.mode(), Mode::Read);
    assert_eq!(store.len(), 3);
    assert_eq!(store.take_bytes(3)?, &[1, 2, 3]);

    assert!(Store::from_prefix(&bytes, 6).unwrap_err().is_overflow());

    Ok(())
}

#[test]
fn test_from_reader() -> Result<()> {
    let bytes = vec![5, 6, 7, 8];

    let store = Store::from_reader(Cursor::new(&bytes), None)?;
    assert_eq!(store.as_bytes(), &[5, 6, 7, 8]);

    let store = Store::from_reader(Cursor::new(&bytes), Some(2))?;
    assert_eq!(store.as_bytes(), &[5, 6]);

    let err = Store::from_reader(Cursor::new(&bytes), Some(5)).unwrap_err();
    assert!(matches!(err, Error::IO(_)));

    Ok(())
}

#[test]
fn test_write_to() -> Result<()> {
    let store = setup_written_store(Policy::Growable, 16, &[1, 2, 3])?;

    let mut out = Vec::new();
    store.write_to(&mut out)?;
    assert_eq!(out, vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_save_and_open() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("store.bin");

    let store = setup_written_store(Policy::Growable, 2, &[1, 2, 3, 4, 5])?;
    store.save(&path)?;

    let mut opened = Store::open(&path, None)?;
    assert_eq!(opened.mode(), Mode::Read);
    assert_eq!(opened.cursor(), 0);
    assert_eq!(opened.take_bytes(5)?, &[1, 2, 3, 4, 5]);

    let prefix = Store::open(&path, Some(2))?;
    assert_eq!(prefix.as_bytes(), &[1, 2]);

    assert!(Store::open(&path, Some(6)).unwrap_err().is_overflow());

    Ok(())
}

#[test]
fn test_open_prefix_past_end() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("short.bin");
    std::fs::write(&path, [7_u8; 5])?;

    match Store::open(&path, Some(9)) {
        Err(Error::Overflow {
            position,
            requested,
            len,
        }) => {
            assert_eq!(position, 0);
            assert_eq!(requested, 9);
            assert_eq!(len, 5);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let store = Store::open(&path, Some(5))?;
    assert_eq!(store.as_bytes(), &[7; 5]);

    Ok(())
}

#[test]
fn test_open_missing_file() {
    let err = Store::open(std::path::Path::new("/nonexistent/rawbuf.bin"), None).unwrap_err();
    assert!(matches!(err, Error::IO(_)));
}

#[test]
fn test_open_empty_file() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("empty.bin");
    std::fs::write(&path, b"")?;

    let store = Store::open(&path, None)?;
    assert!(store.is_empty());
    assert!(Store::open(&path, Some(0))?.is_empty());

    Ok(())
}

#[test]
fn test_clone_is_independent() -> Result<()> {
    let mut store = setup_written_store(Policy::Growable, 4, &[1, 2])?;
    let copy = store.clone();

    store.rewind();
    store.put_byte(9)?;

    assert_eq!(copy.as_bytes(), &[1, 2]);
    assert_eq!(store.as_bytes(), &[9]);
    assert_ne!(store, copy);

    Ok(())
}

#[test]
fn test_equality_ignores_spare_capacity() -> Result<()> {
    let small = setup_written_store(Policy::Growable, 2, &[1, 2])?;
    let large = setup_written_store(Policy::Growable, 64, &[1, 2])?;
    assert_eq!(small, large);

    let fixed = setup_written_store(Policy::Fixed, 2, &[1, 2])?;
    assert_ne!(small, fixed);

    Ok(())
}
