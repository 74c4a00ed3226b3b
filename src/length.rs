//! The length octets.
//!
//! The length octets follow the identifier octets of an encoded value and
//! declare the number of content octets.
//!
//! # BER Encoding
//!
//! The length can be encoded in one of two basic ways. Which one is used is
//! determined by the most significant bit of the first octet. If it is not
//! set, the remaining bits of this first octet provide the definite length
//! directly. This is the short form, available for lengths up to 127.
//!
//! If the most significant bit is set, the remaining bits of the first
//! octet specify the number of octets that follow to encode the actual
//! length as a big-endian unsigned integer. If they specify that there are
//! zero more octets, i.e., the value of the first octet is 128, the length
//! is indefinite and the content is delimited by an end-of-value marker
//! instead. The value 0xFF is reserved.

use std::mem;
use crate::decode::OctetView;
use crate::error::Error;


//------------ Length --------------------------------------------------------

/// The length of the content octets of an encoded value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Length {
    /// The actual number of content octets.
    Definite(usize),

    /// The content is delimited by an end-of-value marker.
    ///
    /// This form is only recognized. None of the decoders in this crate
    /// process content encoded this way.
    Indefinite,
}

impl Length {
    /// Returns the length if it is definite.
    pub fn definite(self) -> Option<usize> {
        match self {
            Length::Definite(len) => Some(len),
            Length::Indefinite => None,
        }
    }

    /// Returns whether the length is indefinite.
    pub fn is_indefinite(self) -> bool {
        matches!(self, Length::Indefinite)
    }

    /// Takes the length octets from the beginning of a view.
    ///
    /// A definite length must fit `usize` or the function fails with
    /// `Error::Overflow`. The reserved first octet 0xFF fails with
    /// `Error::Malformed`.
    pub fn take_from(view: &mut OctetView) -> Result<Self, Error> {
        let first = view.take_octet()?;
        if !first.bit::<7>() {
            return Ok(Length::Definite(first.sub_bits::<6, 0>() as usize))
        }
        let count = first.sub_bits::<6, 0>() as usize;
        if count == 0 {
            return Ok(Length::Indefinite)
        }
        if count == 0x7f {
            return Err(Error::Malformed("reserved length octets"))
        }
        if count > mem::size_of::<usize>() {
            return Err(Error::Overflow(
                "length octets exceed the platform word"
            ))
        }
        let mut res = 0usize;
        for _ in 0..count {
            res = (res << 8) | usize::from(view.take_octet()?.value());
        }
        Ok(Length::Definite(res))
    }

    /// Returns the number of octets of the encoded form of the length.
    pub fn encoded_len(self) -> usize {
        match self {
            Length::Definite(len) if len < 0x80 => 1,
            Length::Definite(len) => {
                1 + mem::size_of::<usize>() - Self::encoded_start_idx(len)
            }
            Length::Indefinite => 1,
        }
    }

    /// Appends the encoded length to the end of `target`.
    pub fn append_encoded(self, target: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            Length::Definite(len) if len < 0x80 => {
                target.push(len as u8);
                Ok(())
            }
            Length::Definite(len) => {
                let idx = Self::encoded_start_idx(len);
                let count = mem::size_of::<usize>() - idx;
                // A usize never needs more than its own width in octets,
                // but the wire format caps the count at 126.
                if count >= 0x7f {
                    return Err(Error::Overflow(
                        "length needs more octets than the format allows"
                    ))
                }
                target.push(0x80 | count as u8);
                target.extend_from_slice(&len.to_be_bytes()[idx..]);
                Ok(())
            }
            Length::Indefinite => {
                target.push(0x80);
                Ok(())
            }
        }
    }

    /// Returns the index of the first non-zero octet of `len`.
    fn encoded_start_idx(len: usize) -> usize {
        (len.leading_zeros() / 8) as usize
    }
}


//============ Tests =========================================================
