//! Handling of primitive values encoded in BER.
//!
//! This crate encodes native Rust values – booleans, integers,
//! floating-point numbers, and byte strings – into the tag-length-value
//! octet sequences defined by the Basic Encoding Rules of ASN.1 and decodes
//! a restricted subset of such sequences back into typed values.
//!
//! Encoding is available through the [`PrimitiveContent`] trait which is
//! implemented for the built-in types. Its `encode` method produces an
//! [`EncodedBerObject`], the owned wire representation of a single
//! primitive value. Decoding starts at the [`decode`] function which
//! inspects the identifier octet of the input and dispatches to the decoder
//! registered for its universal tag number. Currently only INTEGER values
//! can be decoded.
//!
//! ```
//! use berprim::{decode, PrimitiveContent};
//!
//! let encoded = 42i64.encode().unwrap();
//! assert_eq!(encoded.as_slice(), &[0x02, 0x01, 0x2a]);
//!
//! let decoded = decode(encoded.as_slice()).unwrap();
//! assert_eq!(decoded.cast::<i128>(), Some(42));
//! ```
//!
//! Only the primitive, definite-length, single-octet-tag corner of BER is
//! covered: constructed values, indefinite length content, and multi-octet
//! tag numbers are recognized where the wire format requires it but not
//! processed.

pub use self::decode::{decode, DecodedValue, FromValue, OctetView, Value};
pub use self::encode::{ContentOctets, EncodedBerObject, PrimitiveContent};
pub use self::error::Error;
pub use self::ident::{Class, Ident, Tag};
pub use self::length::Length;
pub use self::octet::Octet;

pub mod decode;
pub mod encode;
pub mod error;
pub mod ident;
pub mod length;
pub mod octet;

mod int;
mod ostring;
mod real;
