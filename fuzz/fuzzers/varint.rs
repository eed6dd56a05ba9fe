#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| test_varint(data));

pub fn test_varint(data: &[u8]) {
    let Some(chunk) = data.get(..8) else {
        return;
    };
    let mut bytes = [0; 8];
    bytes.copy_from_slice(chunk);
    let unsigned = u64::from_le_bytes(bytes);
    let signed = i64::from_le_bytes(bytes);

    let varint = pbfint::int2str(unsigned);
    check_shape(&varint);
    assert_eq!(decode(&varint), unsigned);
    assert_eq!(pbfint::encoded_len_varint(unsigned), varint.len());

    let varint = pbfint::sint2str(signed);
    check_shape(&varint);
    let zigzag = decode(&varint);
    assert_eq!(((zigzag >> 1) as i64) ^ -((zigzag & 1) as i64), signed);
}

fn check_shape(varint: &[u8]) {
    assert!((1..=pbfint::MAX_VARINT_LEN).contains(&varint.len()));
    let (last, init) = varint.split_last().unwrap();
    assert!(init.iter().all(|byte| byte & 0x80 != 0), "{:?}", varint);
    assert_eq!(last & 0x80, 0, "{:?}", varint);
}

fn decode(varint: &[u8]) -> u64 {
    varint
        .iter()
        .enumerate()
        .fold(0, |value, (i, byte)| value | (u64::from(byte & 0x7F) << (i * 7)))
}
