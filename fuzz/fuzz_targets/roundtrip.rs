#![no_main]

use libfuzzer_sys::fuzz_target;
use berprim::PrimitiveContent;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return
    }
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&data[..16]);
    let value = i128::from_be_bytes(buf);

    let encoded = value.encode().unwrap();
    let decoded = berprim::decode(encoded.as_slice()).unwrap();
    assert_eq!(decoded.cast::<i128>(), Some(value));
});
