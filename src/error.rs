//! Error handling.
//!
//! All failures in this crate are synchronous and surface through the
//! single [`Error`] type whose variants separate protocol violations from
//! unimplemented forms and capacity limits so that callers can branch on
//! the category.

use std::{error, fmt};


//------------ Error ---------------------------------------------------------

/// An error happening while encoding or decoding BER data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The data does not conform to the encoding rules.
    Malformed(&'static str),

    /// The data may well be correctly encoded but uses a form this crate
    /// does not implement.
    Unsupported(&'static str),

    /// A length does not fit the native types or the wire format.
    Overflow(&'static str),
}

impl Error {
    /// Returns the static message describing the error.
    pub fn message(self) -> &'static str {
        match self {
            Error::Malformed(msg) => msg,
            Error::Unsupported(msg) => msg,
            Error::Overflow(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Malformed(msg) => {
                write!(f, "malformed data: {}", msg)
            }
            Error::Unsupported(msg) => {
                write!(f, "unsupported encoding: {}", msg)
            }
            Error::Overflow(msg) => {
                write!(f, "overflow: {}", msg)
            }
        }
    }
}

impl error::Error for Error { }
