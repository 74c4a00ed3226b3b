//! Encoding values in BER.
//!
//! Every type that can be encoded as a single primitive value implements
//! the [`PrimitiveContent`] trait. It defines how the content octets of the
//! value are created; the identifier and length octets around them follow
//! from the type's tag and the content's size and are assembled by the
//! provided [`encode`] method into an [`EncodedBerObject`].
//!
//! The impls for the built-in integer types live in the integer module,
//! those for the floating point types in the real module, and those for
//! byte sequences in the octet-string module.
//!
//! [`encode`]: trait.PrimitiveContent.html#method.encode

use bytes::Bytes;
use smallvec::SmallVec;
use crate::decode::DecodedValue;
use crate::error::Error;
use crate::ident::{Ident, Tag};
use crate::length::Length;
use crate::octet::Octet;


//------------ ContentOctets -------------------------------------------------

/// A buffer accumulating the content octets of a single value.
///
/// Content of up to sixteen octets – enough for any native numeric value –
/// stays inline; longer content spills onto the heap.
pub type ContentOctets = SmallVec<[u8; 16]>;


//------------ PrimitiveContent ----------------------------------------------

/// A type that is encoded as a primitive value.
///
/// Implementing types declare their universal tag and how their content
/// octets are produced and receive the [`encode`] method in return.
///
/// [`encode`]: #method.encode
pub trait PrimitiveContent {
    /// The tag of an encoded value of this type.
    const TAG: Tag;

    /// Appends the content octets of the value to `content`.
    fn append_content(&self, content: &mut ContentOctets);

    //--- Provided methods

    /// Encodes the value into a complete BER object.
    ///
    /// The object consists of the identifier octet for a primitive value
    /// of the universal class with the type's tag, the length octets for
    /// the content's size, and the content octets themselves.
    fn encode(&self) -> Result<EncodedBerObject, Error> {
        let mut content = ContentOctets::new();
        self.append_content(&mut content);
        EncodedBerObject::assemble(Ident::universal(Self::TAG), &content)
    }
}


//--- impl for built-in types
//
//  See the integer, real, and octet-string modules for the impls for the
//  remaining built-in types.

impl PrimitiveContent for bool {
    const TAG: Tag = Tag::BOOLEAN;

    fn append_content(&self, content: &mut ContentOctets) {
        content.push(if *self { 0xff } else { 0 })
    }
}


//------------ EncodedBerObject ----------------------------------------------

/// An owned, complete BER encoding of a single primitive value.
///
/// The object holds the octet sequence identifier ∥ length ∥ content and
/// nothing else. It is produced fresh by each `encode` call and owned by
/// the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedBerObject {
    octets: Bytes,
}

impl EncodedBerObject {
    /// Assembles an object from an identifier octet and content octets.
    ///
    /// The length octets are derived from the content's size, using the
    /// short form whenever the content is shorter than 128 octets and the
    /// long form otherwise.
    pub fn assemble(ident: Ident, content: &[u8]) -> Result<Self, Error> {
        let length = Length::Definite(content.len());
        let mut octets = Vec::with_capacity(
            1 + length.encoded_len() + content.len()
        );
        octets.push(ident.octet().value());
        length.append_encoded(&mut octets)?;
        octets.extend_from_slice(content);
        Ok(EncodedBerObject { octets: octets.into() })
    }

    /// Returns the identifier octet of the object.
    pub fn ident(&self) -> Ident {
        // An object always starts with its identifier octet.
        Ident::from_octet(Octet::new(self.octets[0]))
    }

    /// Returns the complete octet sequence of the object.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns the number of octets of the object.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the object is empty.
    ///
    /// Since every object carries at least its identifier and length
    /// octets, this is always false.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Converts the object into its underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.octets
    }

    /// Decodes the object back into a native value.
    ///
    /// This runs the object through the regular decoding dispatch, so only
    /// values with a registered decoder can be recovered.
    pub fn decode(&self) -> Result<DecodedValue, Error> {
        crate::decode::decode(self.as_slice())
    }
}

impl AsRef<[u8]> for EncodedBerObject {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_bool() {
        assert_eq!(true.encode().unwrap().as_slice(), b"\x01\x01\xff");
        assert_eq!(false.encode().unwrap().as_slice(), b"\x01\x01\x00");
    }

    #[test]
    fn assemble() {
        let obj = EncodedBerObject::assemble(
            Ident::universal(Tag::OCTET_STRING), b"\x41\x42"
        ).unwrap();
        assert_eq!(obj.as_slice(), b"\x04\x02\x41\x42");
        assert_eq!(obj.ident(), Ident::universal(Tag::OCTET_STRING));
        assert_eq!(obj.len(), 4);
        assert!(!obj.is_empty());
        assert_eq!(obj.into_bytes().as_ref(), b"\x04\x02\x41\x42");
    }

    #[test]
    fn object_round_trip() {
        let encoded = 42i32.encode().unwrap();
        assert_eq!(encoded.decode().unwrap().cast::<i128>(), Some(42));
    }
}
