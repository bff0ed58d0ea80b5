use std::io::Cursor;

use longbits::error::Error;
use longbits::LongBits;

#[test]
fn write_then_read() {
    let values = [0i64, -1, 150, 6547656755453442, i64::MIN];
    let mut writer = vec![];
    for value in values.iter() {
        LongBits::from(*value).zz_encode().write_to(&mut writer).unwrap();
    }

    let mut reader = Cursor::new(writer);
    for value in values.iter() {
        let bits = LongBits::read_from(&mut reader).unwrap().zz_decode();
        assert_eq!(i64::from(bits), *value);
    }
    assert_eq!(reader.position() as usize, reader.get_ref().len());
}

#[test]
fn read_does_not_consume_trailing_bytes() {
    let mut reader = Cursor::new(vec![0xAC, 0x02, 0x7F]);
    assert_eq!(u64::from(LongBits::read_from(&mut reader).unwrap()), 300);
    assert_eq!(reader.position(), 2);
}

#[test]
fn truncated_reader() {
    let bytes = LongBits::from(u64::MAX).to_vec();
    for length in 0..bytes.len() {
        let mut reader = Cursor::new(&bytes[..length]);
        let error = LongBits::read_from(&mut reader).unwrap_err();
        assert!(error.is_out_of_range());
    }
}

#[test]
fn overflown_reader() {
    let mut reader = Cursor::new(vec![0xFFu8; 12]);
    assert!(matches!(LongBits::read_from(&mut reader), Err(Error::Overflow)));
}

#[test]
fn display() {
    let error = LongBits::from_bytes(&[0x80u8][..], 0).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Out of range: varint starting at 0 is truncated: no byte at position 1"
    );
    assert_eq!(
        Error::Overflow.to_string(),
        "Invalid varint encoding: more than 64 bits"
    );
}
