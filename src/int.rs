//! BER encoded integers.
//!
//! # BER Encoding
//!
//! In BER, an INTEGER is encoded as a primitive value with the content
//! octets providing a variable-length, big-endian, two's complement byte
//! sequence of that integer. Thus, the most significant bit of the first
//! octet serves as the sign bit. The content must be the shortest sequence
//! that still decodes to the original value: a leading 0x00 octet is only
//! present when the following octet would otherwise read as a sign bit,
//! and a leading 0xFF octet only when required to keep the value negative.
//!
//! This module provides the [`PrimitiveContent`] impls for all built-in
//! integer types plus the INTEGER decoder. The decoder reconstructs into
//! `i128`, the widest native integer.
//!
//! [`PrimitiveContent`]: ../encode/trait.PrimitiveContent.html

use std::mem;
use crate::decode::{DecodedValue, OctetView, Value};
use crate::encode::{ContentOctets, PrimitiveContent};
use crate::error::Error;
use crate::ident::Tag;


//------------ Content encoding ----------------------------------------------

/// Appends the minimal two's complement content of a signed value.
///
/// Octets are taken from the low end and the value shifted right
/// arithmetically until the remainder and the sign bit of the last octet
/// agree, then the octets are reversed into big-endian order.
pub(crate) fn append_signed(value: i128, content: &mut ContentOctets) {
    let start = content.len();
    let mut t = value;
    loop {
        let octet = t as u8;
        content.push(octet);
        t >>= 8;
        if (t == 0 && octet & 0x80 == 0) || (t == -1 && octet & 0x80 != 0) {
            break
        }
    }
    content[start..].reverse();
}

/// Appends the minimal two's complement content of an unsigned value.
///
/// Identical to the signed case except that a most significant octet with
/// its top bit set gains a leading zero octet so the value keeps reading
/// as non-negative.
pub(crate) fn append_unsigned(value: u128, content: &mut ContentOctets) {
    let start = content.len();
    let mut t = value;
    loop {
        content.push(t as u8);
        t >>= 8;
        if t == 0 {
            break
        }
    }
    if content.last().copied().unwrap_or(0) & 0x80 != 0 {
        content.push(0);
    }
    content[start..].reverse();
}

/// Appends the shortest big-endian form of an unsigned value.
///
/// Unlike [`append_unsigned`], the result carries no sign semantics; the
/// top bit of the first octet is plain magnitude. This is the form the
/// REAL mantissa and auxiliary counts use.
pub(crate) fn append_raw_unsigned(value: u128, content: &mut ContentOctets) {
    let bytes = value.to_be_bytes();
    let idx = (value.leading_zeros() / 8) as usize;
    if idx == bytes.len() {
        content.push(0)
    }
    else {
        content.extend_from_slice(&bytes[idx..])
    }
}


//------------ Macros for built-in integers ----------------------------------

macro_rules! signed_impl {
    ( $type:ident ) => {
        impl PrimitiveContent for $type {
            const TAG: Tag = Tag::INTEGER;

            fn append_content(&self, content: &mut ContentOctets) {
                append_signed(i128::from(*self), content)
            }
        }
    }
}

macro_rules! unsigned_impl {
    ( $type:ident ) => {
        impl PrimitiveContent for $type {
            const TAG: Tag = Tag::INTEGER;

            fn append_content(&self, content: &mut ContentOctets) {
                append_unsigned(u128::from(*self), content)
            }
        }
    }
}

signed_impl!(i8);
signed_impl!(i16);
signed_impl!(i32);
signed_impl!(i64);
signed_impl!(i128);

unsigned_impl!(u8);
unsigned_impl!(u16);
unsigned_impl!(u32);
unsigned_impl!(u64);
unsigned_impl!(u128);


//------------ Decoding ------------------------------------------------------

/// Decodes a complete INTEGER value from the view.
///
/// The view starts at the identifier octet; the dispatcher has already
/// checked that it carries the universal class and the INTEGER tag number.
/// Only the short length form is supported, the declared length must match
/// the remaining octets exactly, and the content must fit an `i128`.
pub(crate) fn decode_integer(
    view: &mut OctetView
) -> Result<DecodedValue, Error> {
    let _ident = view.take_octet()?;
    let length = view.take_octet()?;
    if length.bit::<7>() {
        return Err(Error::Unsupported(
            "only short form INTEGER lengths are implemented"
        ))
    }
    let len = length.sub_bits::<6, 0>() as usize;
    if len != view.remaining() {
        return Err(Error::Malformed(
            "declared length does not match the content octets"
        ))
    }
    if len == 0 {
        return Err(Error::Malformed("INTEGER without content octets"))
    }
    if len > mem::size_of::<i128>() {
        return Err(Error::Overflow(
            "INTEGER exceeds the widest native integer"
        ))
    }

    let first = view.take_octet()?.value();
    let neg = first & 0x80 != 0;
    let mut res = u128::from(if neg { !first } else { first });
    for _ in 1..len {
        let octet = view.take_octet()?.value();
        res = (res << 8) | u128::from(if neg { !octet } else { octet });
    }
    let res = if neg {
        // Two's complement: the complemented accumulation is |value| - 1.
        -(res as i128) - 1
    }
    else {
        res as i128
    };
    Ok(DecodedValue::new(Value::Integer(res)))
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::decode::decode;

    fn assert_encodes<P: PrimitiveContent>(value: P, expected: &[u8]) {
        assert_eq!(value.encode().unwrap().as_slice(), expected);
    }

    #[test]
    fn encode_signed_builtins() {
        assert_encodes(0i64, b"\x02\x01\x00");
        assert_encodes(42i64, b"\x02\x01\x2a");
        assert_encodes(127i64, b"\x02\x01\x7f");
        assert_encodes(128i64, b"\x02\x02\x00\x80");
        assert_encodes(256i64, b"\x02\x02\x01\x00");
        assert_encodes(-1i64, b"\x02\x01\xff");
        assert_encodes(-128i64, b"\x02\x01\x80");
        assert_encodes(-129i64, b"\x02\x02\xff\x7f");
        assert_encodes(-256i64, b"\x02\x02\xff\x00");
        assert_encodes(-257i64, b"\x02\x02\xfe\xff");
        assert_encodes(
            i64::MAX, b"\x02\x08\x7f\xff\xff\xff\xff\xff\xff\xff"
        );
        assert_encodes(
            i64::MIN, b"\x02\x08\x80\x00\x00\x00\x00\x00\x00\x00"
        );
        assert_encodes(-1i8, b"\x02\x01\xff");
        assert_encodes(i16::MIN, b"\x02\x02\x80\x00");
        assert_encodes(
            i128::MIN,
            b"\x02\x10\x80\x00\x00\x00\x00\x00\x00\x00\
              \x00\x00\x00\x00\x00\x00\x00\x00"
        );
    }

    #[test]
    fn encode_unsigned_builtins() {
        assert_encodes(0u8, b"\x02\x01\x00");
        assert_encodes(127u8, b"\x02\x01\x7f");
        assert_encodes(128u8, b"\x02\x02\x00\x80");
        assert_encodes(255u8, b"\x02\x02\x00\xff");
        assert_encodes(256u16, b"\x02\x02\x01\x00");
        assert_encodes(0xdeadu32, b"\x02\x03\x00\xde\xad");
        assert_encodes(
            u64::MAX,
            b"\x02\x09\x00\xff\xff\xff\xff\xff\xff\xff\xff"
        );
        assert_encodes(
            u128::MAX,
            b"\x02\x11\x00\xff\xff\xff\xff\xff\xff\xff\xff\
              \xff\xff\xff\xff\xff\xff\xff\xff"
        );
    }

    #[test]
    fn decode_integer() {
        fn decoded(src: &[u8]) -> i128 {
            decode(src).unwrap().cast::<i128>().unwrap()
        }

        assert_eq!(decoded(b"\x02\x01\x2a"), 42);
        assert_eq!(decoded(b"\x02\x01\x00"), 0);
        assert_eq!(decoded(b"\x02\x01\xff"), -1);
        assert_eq!(decoded(b"\x02\x01\x80"), -128);
        assert_eq!(decoded(b"\x02\x02\x00\x80"), 128);
        assert_eq!(decoded(b"\x02\x02\xff\x7f"), -129);
        // Redundant leading octets are accepted on the way in.
        assert_eq!(decoded(b"\x02\x03\x00\x00\x05"), 5);
        assert_eq!(decoded(b"\x02\x02\xff\xff"), -1);
    }

    #[test]
    fn decode_integer_failures() {
        assert!(matches!(
            decode(b"\x02\x81\x01\x2a"), Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            decode(b"\x02\x80\x2a\x00\x00"), Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            decode(b"\x02\x05\x00"), Err(Error::Malformed(_))
        ));
        assert!(matches!(
            decode(b"\x02\x01\x2a\x2b"), Err(Error::Malformed(_))
        ));
        assert!(matches!(
            decode(b"\x02\x00"), Err(Error::Malformed(_))
        ));
        assert!(matches!(
            decode(
                b"\x02\x11\x01\x00\x00\x00\x00\x00\x00\x00\x00\
                  \x00\x00\x00\x00\x00\x00\x00\x00"
            ),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn round_trip() {
        let values: &[i128] = &[
            0, 1, -1, 42, 127, 128, 129, 255, 256, -127, -128, -129, -255,
            -256, -257, 0x7fff, 0x8000, -0x8000, -0x8001,
            i64::MAX as i128, i64::MIN as i128,
            i128::MAX, i128::MIN,
        ];
        for &value in values {
            let encoded = value.encode().unwrap();
            assert_eq!(
                decode(encoded.as_slice()).unwrap().cast::<i128>(),
                Some(value),
                "round trip failed for {}", value
            );
        }
    }

    #[test]
    fn content_is_minimal() {
        for &value in &[
            0i128, 1, -1, 127, 128, -128, -129, 0xffff, -0x10000,
            i128::MAX, i128::MIN,
        ] {
            let encoded = value.encode().unwrap();
            let content = &encoded.as_slice()[2..];
            if content.len() > 1 {
                // Neither a redundant 0x00 nor a redundant 0xFF octet may
                // lead the content.
                assert!(
                    !(content[0] == 0 && content[1] & 0x80 == 0),
                    "redundant leading zero for {}", value
                );
                assert!(
                    !(content[0] == 0xff && content[1] & 0x80 != 0),
                    "redundant leading 0xff for {}", value
                );
            }
        }
    }
}
