//! The identifier octet of a BER encoded value.
//!
//! Each BER encoded value starts with the _identifier octets_ carrying the
//! class of the value, whether it uses primitive or constructed encoding,
//! and its tag number. This module provides [`Ident`], a typed view over a
//! single identifier octet, together with [`Class`] for the four tag
//! classes and [`Tag`] for the universal tag numbers.
//!
//! Tag numbers up to 30 fit into a single identifier octet. Larger numbers
//! continue into subsequent octets; this form is detected via
//! [`Ident::is_high_tag`] but not parsed.

use std::fmt;
use crate::octet::Octet;
use crate::pack_octet;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
///
/// The class is encoded in bits 7 and 6 of the identifier octet. Only the
/// universal class carries tag numbers with meanings fixed by the standard;
/// the other three classes take their meaning from a schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    /// The universal class, class bits 0.
    Universal,

    /// The application class, class bits 1.
    Application,

    /// The context-specific class, class bits 2.
    ContextSpecific,

    /// The private class, class bits 3.
    Private,
}

impl Class {
    /// Returns the class encoded by the two class bits.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Class::Universal,
            1 => Class::Application,
            2 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }

    /// Returns the two-bit encoding of the class.
    pub fn bits(self) -> u8 {
        match self {
            Class::Universal => 0,
            Class::Application => 1,
            Class::ContextSpecific => 2,
            Class::Private => 3,
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The number of a universal tag.
///
/// These numbers are assigned by clause 8 of X.680 and determine wire
/// compatibility with other BER and DER tooling. The type only represents
/// numbers that fit a single identifier octet, i.e., values up to 30.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Tag(u8);

/// # Constants for the Universal Tag Numbers
///
impl Tag {
    /// The tag number of the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Tag(1);

    /// The tag number of the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Tag(2);

    /// The tag number of the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Tag(3);

    /// The tag number of the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Tag(4);

    /// The tag number of the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Tag(5);

    /// The tag number of the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Tag(6);

    /// The tag number of the ObjectDescriptor type, UNIVERSAL 7.
    pub const OBJECT_DESCRIPTOR: Self = Tag(7);

    /// The tag number of the EXTERNAL and Instance-of types, UNIVERSAL 8.
    pub const EXTERNAL: Self = Tag(8);

    /// The tag number of the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Tag(9);

    /// The tag number of the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Tag(10);

    /// The tag number of the EMBEDDED PDV type, UNIVERSAL 11.
    pub const EMBEDDED_PDV: Self = Tag(11);

    /// The tag number of the UTF8String type, UNIVERSAL 12.
    pub const UTF8_STRING: Self = Tag(12);

    /// The tag number of the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Tag(13);

    /// The tag number of the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Tag(16);

    /// The tag number of the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Tag(17);

    /// The tag number of the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Tag(18);

    /// The tag number of the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Tag(19);

    /// The tag number of the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Tag(20);

    /// The tag number of the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Tag(21);

    /// The tag number of the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Tag(22);

    /// The tag number of the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Tag(23);

    /// The tag number of the GeneralizedTime type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Tag(24);

    /// The tag number of the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Tag(25);

    /// The tag number of the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Tag(26);

    /// The tag number of the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Tag(27);

    /// The tag number of the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Tag(28);

    /// The tag number of the CHARACTER STRING type, UNIVERSAL 29.
    pub const CHARACTER_STRING: Self = Tag(29);

    /// The tag number of the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Tag(30);
}

impl Tag {
    /// The largest tag number that fits a single identifier octet.
    pub const MAX_SINGLE_OCTET: u8 = 30;

    /// Creates a new tag with the given number.
    ///
    /// # Panics
    ///
    /// This function panics if the number is greater than
    /// `Tag::MAX_SINGLE_OCTET`.
    pub fn new(number: u8) -> Self {
        assert!(number <= Tag::MAX_SINGLE_OCTET);
        Tag(number)
    }

    /// Returns the number of the tag.
    pub fn number(self) -> u8 {
        self.0
    }
}


//--- Display and Debug

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::OBJECT_DESCRIPTOR => write!(f, "ObjectDescriptor"),
            Tag::EXTERNAL => write!(f, "EXTERNAL"),
            Tag::REAL => write!(f, "REAL"),
            Tag::ENUMERATED => write!(f, "ENUMERATED"),
            Tag::EMBEDDED_PDV => write!(f, "EMBEDDED PDV"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::RELATIVE_OID => write!(f, "RELATIVE-OID"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::NUMERIC_STRING => write!(f, "NumericString"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::TELETEX_STRING => write!(f, "TeletexString"),
            Tag::VIDEOTEX_STRING => write!(f, "VideotexString"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::UTC_TIME => write!(f, "UTCTime"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::GRAPHIC_STRING => write!(f, "GraphicString"),
            Tag::VISIBLE_STRING => write!(f, "VisibleString"),
            Tag::GENERAL_STRING => write!(f, "GeneralString"),
            Tag::UNIVERSAL_STRING => write!(f, "UniversalString"),
            Tag::CHARACTER_STRING => write!(f, "CHARACTER STRING"),
            Tag::BMP_STRING => write!(f, "BMPString"),
            tag => write!(f, "[UNIVERSAL {}]", tag.number()),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//------------ Ident ---------------------------------------------------------

/// The identifier octet of a BER encoded value.
///
/// The octet combines the class in bits 7 and 6, the constructed flag in
/// bit 5, and the tag number in bits 4 to 0. A tag number of all ones marks
/// the high-tag-number form in which the number continues in subsequent
/// octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ident(Octet);

impl Ident {
    /// The tag number marking the high-tag-number form.
    const HIGH_TAG_NUMBER: u8 = 0b11111;

    /// Creates an identifier octet from its three fields.
    pub fn new(class: Class, constructed: bool, tag: Tag) -> Self {
        Ident(pack_octet!(
            2: class.bits(),
            1: constructed as u8,
            5: tag.number()
        ))
    }

    /// Creates the identifier octet of a primitive value of the universal
    /// class.
    ///
    /// This is the form all encoders in this crate produce.
    pub fn universal(tag: Tag) -> Self {
        Ident::new(Class::Universal, false, tag)
    }

    /// Creates an identifier from an octet taken off the wire.
    pub fn from_octet(octet: Octet) -> Self {
        Ident(octet)
    }

    /// Returns the underlying octet.
    pub fn octet(self) -> Octet {
        self.0
    }

    /// Returns the class of the value.
    pub fn class(self) -> Class {
        Class::from_bits(self.0.sub_bits::<7, 6>())
    }

    /// Returns whether the value uses constructed encoding.
    pub fn is_constructed(self) -> bool {
        self.0.bit::<5>()
    }

    /// Returns the raw tag number field.
    pub fn number(self) -> u8 {
        self.0.sub_bits::<4, 0>()
    }

    /// Returns whether the tag number continues in subsequent octets.
    ///
    /// Parsing of the continuation octets is not implemented; callers must
    /// treat such identifiers as unsupported.
    pub fn is_high_tag(self) -> bool {
        self.number() == Ident::HIGH_TAG_NUMBER
    }

    /// Returns the tag of the value.
    ///
    /// # Panics
    ///
    /// This function panics for identifiers in the high-tag-number form.
    /// Check [`is_high_tag`] first.
    ///
    /// [`is_high_tag`]: #method.is_high_tag
    pub fn tag(self) -> Tag {
        Tag::new(self.number())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const CLASSES: &[Class] = &[
        Class::Universal, Class::Application, Class::ContextSpecific,
        Class::Private,
    ];

    #[test]
    fn field_round_trip() {
        for &class in CLASSES {
            for &constructed in &[false, true] {
                for number in 0..=Tag::MAX_SINGLE_OCTET {
                    let ident = Ident::new(
                        class, constructed, Tag::new(number)
                    );
                    assert_eq!(ident.class(), class);
                    assert_eq!(ident.is_constructed(), constructed);
                    assert_eq!(ident.number(), number);
                    assert_eq!(ident.tag(), Tag::new(number));
                    assert!(!ident.is_high_tag());
                }
            }
        }
    }

    #[test]
    fn wire_values() {
        assert_eq!(Ident::universal(Tag::INTEGER).octet().value(), 0x02);
        assert_eq!(Ident::universal(Tag::OCTET_STRING).octet().value(), 0x04);
        assert_eq!(Ident::universal(Tag::REAL).octet().value(), 0x09);
        assert_eq!(
            Ident::new(Class::Universal, true, Tag::SEQUENCE).octet().value(),
            0x30
        );
        assert_eq!(
            Ident::new(Class::ContextSpecific, false, Tag::new(2))
                .octet().value(),
            0x82
        );
    }

    #[test]
    fn high_tag_detection() {
        let ident = Ident::from_octet(Octet::new(0x1f));
        assert!(ident.is_high_tag());
        assert_eq!(ident.class(), Class::Universal);
        let ident = Ident::from_octet(Octet::new(0xff));
        assert!(ident.is_high_tag());
        assert_eq!(ident.class(), Class::Private);
    }

    #[test]
    fn tag_numbers() {
        // These values are fixed by X.680 and must not change.
        assert_eq!(Tag::BOOLEAN.number(), 1);
        assert_eq!(Tag::INTEGER.number(), 2);
        assert_eq!(Tag::BIT_STRING.number(), 3);
        assert_eq!(Tag::OCTET_STRING.number(), 4);
        assert_eq!(Tag::NULL.number(), 5);
        assert_eq!(Tag::OID.number(), 6);
        assert_eq!(Tag::REAL.number(), 9);
        assert_eq!(Tag::ENUMERATED.number(), 10);
        assert_eq!(Tag::UTF8_STRING.number(), 12);
        assert_eq!(Tag::SEQUENCE.number(), 16);
        assert_eq!(Tag::SET.number(), 17);
        assert_eq!(Tag::NUMERIC_STRING.number(), 18);
        assert_eq!(Tag::BMP_STRING.number(), 30);
    }

    #[test]
    #[should_panic]
    fn tag_number_too_large() {
        let _ = Tag::new(31);
    }
}
