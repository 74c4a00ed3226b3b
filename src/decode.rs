//! Decoding BER encoded data.
//!
//! Decoding starts at the [`decode`] function. It inspects the identifier
//! octet at the start of the input: values outside the universal class and
//! identifiers in the high-tag-number form are rejected, everything else
//! is dispatched through a fixed registry keyed by the tag number. The
//! registered decoder receives the complete input, identifier and length
//! octets included, and produces a [`DecodedValue`] holding one native
//! value behind a runtime type tag.
//!
//! The registry is built at compile time and read-only thereafter, so
//! concurrent decoding from any number of threads needs no coordination.
//! It currently contains a single entry for INTEGER.

use crate::error::Error;
use crate::ident::{Class, Ident, Tag};
use crate::int;
use crate::octet::Octet;


//------------ OctetView -----------------------------------------------------

/// A view over a sequence of encoded octets.
///
/// The view hands out octets from the front one at a time. It never owns
/// data; decoded values are copied out of it.
#[derive(Clone, Copy, Debug)]
pub struct OctetView<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> OctetView<'a> {
    /// Creates a new view over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        OctetView { data, pos: 0 }
    }

    /// Returns the number of octets left in the view.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the view is exhausted.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the octets left in the view.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of octets already taken from the view.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the next octet without taking it.
    pub fn peek_octet(&self) -> Option<Octet> {
        self.data.first().map(|&value| Octet::new(value))
    }

    /// Takes the next octet from the view.
    pub fn take_octet(&mut self) -> Result<Octet, Error> {
        match self.data.split_first() {
            Some((&first, tail)) => {
                self.data = tail;
                self.pos += 1;
                Ok(Octet::new(first))
            }
            None => Err(Error::Malformed("unexpected end of data")),
        }
    }
}


//------------ Value ---------------------------------------------------------

/// A native value produced by decoding.
///
/// The set of kinds is closed over what the registered decoders can
/// produce. More variants will appear as decoders are added.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// A decoded INTEGER.
    Integer(i128),
}


//------------ FromValue -----------------------------------------------------

/// A native type that can be retrieved from a decoded value.
///
/// Retrieval is by exact type: an implementation must only return its own
/// kind and never convert. The impl for `i128` retrieves decoded INTEGER
/// values.
pub trait FromValue: Sized {
    /// Returns the native value if `value` holds this exact type.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i128 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Integer(res) => Some(res),
        }
    }
}


//------------ DecodedValue --------------------------------------------------

/// A single decoded native value behind a runtime type tag.
///
/// The container owns its value for its own lifetime; it keeps no
/// reference to the input the value was decoded from. Retrieval via
/// [`cast`] requires naming the exact native type and returns nothing on a
/// mismatch rather than converting.
///
/// [`cast`]: #method.cast
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedValue {
    value: Value,
}

impl DecodedValue {
    /// Creates a container holding the given value.
    pub(crate) fn new(value: Value) -> Self {
        DecodedValue { value }
    }

    /// Returns the stored value if it is of the requested type.
    pub fn cast<T: FromValue>(&self) -> Option<T> {
        T::from_value(&self.value)
    }
}


//------------ Decoder registry ----------------------------------------------

type DecodeFn = fn(&mut OctetView) -> Result<DecodedValue, Error>;

/// The decoders by universal tag number.
///
/// Built once at compile time and read-only thereafter.
static DECODERS: &[(Tag, DecodeFn)] = &[
    (Tag::INTEGER, int::decode_integer),
];


//------------ decode --------------------------------------------------------

/// Decodes a single BER encoded value.
///
/// The universal tag number of the identifier octet selects the decoder;
/// the decoder then consumes the complete input including the identifier
/// and length octets. Values of any class other than universal and tag
/// numbers without a registered decoder fail with `Error::Unsupported`.
pub fn decode(data: &[u8]) -> Result<DecodedValue, Error> {
    let mut view = OctetView::new(data);
    let ident = match view.peek_octet() {
        Some(octet) => Ident::from_octet(octet),
        None => return Err(Error::Malformed("empty octet stream")),
    };
    if ident.class() != Class::Universal {
        return Err(Error::Unsupported(
            "only the universal class is supported"
        ))
    }
    if ident.is_high_tag() {
        return Err(Error::Unsupported(
            "multi-octet tag numbers are not supported"
        ))
    }
    let tag = ident.tag();
    match DECODERS.iter().find(|&&(key, _)| key == tag) {
        Some(&(_, decoder)) => decoder(&mut view),
        None => Err(Error::Unsupported("no decoder registered for the tag")),
    }
}


//============ Tests =========================================================
