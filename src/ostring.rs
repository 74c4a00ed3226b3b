//! BER encoded OCTET STRING values.
//!
//! An octet string is a glorified `[u8]`: its content octets are the
//! string's octets verbatim. Only the primitive form is produced; the
//! constructed form that breaks a string into chunks is out of scope.

use bytes::Bytes;
use crate::encode::{ContentOctets, PrimitiveContent};
use crate::ident::Tag;


//--- PrimitiveContent

impl PrimitiveContent for &'_ [u8] {
    const TAG: Tag = Tag::OCTET_STRING;

    fn append_content(&self, content: &mut ContentOctets) {
        content.extend_from_slice(self)
    }
}

impl PrimitiveContent for Bytes {
    const TAG: Tag = Tag::OCTET_STRING;

    fn append_content(&self, content: &mut ContentOctets) {
        content.extend_from_slice(self.as_ref())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(
            b"AB".as_ref().encode().unwrap().as_slice(),
            b"\x04\x02\x41\x42"
        );
        assert_eq!(b"".as_ref().encode().unwrap().as_slice(), b"\x04\x00");
        assert_eq!(
            Bytes::from_static(b"AB").encode().unwrap().as_slice(),
            b"\x04\x02\x41\x42"
        );
    }

    #[test]
    fn length_form_boundary() {
        fn assert_header(content_len: usize, header: &[u8]) {
            let content = vec![0u8; content_len];
            let encoded = content.as_slice().encode().unwrap();
            assert_eq!(&encoded.as_slice()[..header.len()], header);
            assert_eq!(encoded.len(), header.len() + content_len);
        }

        assert_header(0, b"\x04\x00");
        assert_header(126, b"\x04\x7e");
        assert_header(127, b"\x04\x7f");
        assert_header(128, b"\x04\x81\x80");
        assert_header(256, b"\x04\x82\x01\x00");
    }
}
