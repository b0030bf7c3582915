use std::{cmp, fmt, io, str};

use fstr::FStr;

use crate::error::{Error, ParseError};

/// Represents a Universally Unique IDentifier.
///
/// Equality and hashing cover all 128 bits. Ordering compares the value as two signed 64-bit
/// halves, most significant half first, so that identifiers sort the same way they do in systems
/// that store UUIDs as a pair of two's-complement longs. This is not the lexicographic order of
/// the byte array or the hex string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Represents the variant field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,

    /// `10x`: the layout specified by RFC 4122 (the former IETF draft).
    Rfc4122,

    /// `110`: reserved for Microsoft Corporation backward compatibility.
    Microsoft,

    /// `111`: reserved for future definition.
    Future,
}

impl Variant {
    /// Returns the legacy numeric code of the variant (0, 2, 6, or 7), i.e., the value of the
    /// significant variant bits read as an unsigned integer.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Ncs => 0,
            Self::Rfc4122 => 2,
            Self::Microsoft => 6,
            Self::Future => 7,
        }
    }
}

/// Number of 100-nanosecond intervals between the Gregorian reform (1582-10-15) and the Unix
/// epoch.
pub(crate) const GREGORIAN_TO_UNIX_TICKS: u64 = 0x01b2_1dd2_1381_4000;

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_u64_pair(0x6ba7_b810_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_u64_pair(0x6ba7_b811_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_u64_pair(0x6ba7_b812_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self =
        Self::from_u64_pair(0x6ba7_b814_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from a 16-byte big-endian byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from the most and least significant 64-bit halves.
    pub const fn from_u64_pair(most: u64, least: u64) -> Self {
        Self((((most as u128) << 64) | least as u128).to_be_bytes())
    }

    /// Creates an object from the most and least significant halves given as signed integers.
    pub const fn from_i64_pair(most: i64, least: i64) -> Self {
        Self::from_u64_pair(most as u64, least as u64)
    }

    /// Returns the most significant 64 bits as a two's-complement integer.
    pub const fn most_significant_bits(&self) -> i64 {
        let b = &self.0;
        i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the least significant 64 bits as a two's-complement integer.
    pub const fn least_significant_bits(&self) -> i64 {
        let b = &self.0;
        i64::from_be_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Creates a time-based (version 1) object from its field values.
    ///
    /// Only the low 60 bits of `timestamp` and the low 14 bits of `clock_sequence` are used.
    pub const fn from_fields_v1(timestamp: u64, clock_sequence: i16, node: [u8; 6]) -> Self {
        let clock_sequence = clock_sequence as u16;
        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            0x80 | ((clock_sequence >> 8) as u8 & 0x3f),
            clock_sequence as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Reads exactly 16 bytes from `reader` and creates an object from them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedInput`] if the reader is exhausted before 16 bytes are read, or
    /// [`Error::Io`] if the reader fails otherwise.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self, Error> {
        let mut buffer = [0u8; 16];
        let mut filled = 0;
        while filled < buffer.len() {
            match reader.read(&mut buffer[filled..]) {
                Ok(0) => return Err(Error::TruncatedInput { read: filled }),
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(Error::Io(err)),
            }
        }
        Ok(Self(buffer))
    }

    /// Returns the version field (the top four bits of `time_hi_and_version`) as an integer in
    /// the range of 0 to 15.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant field (the top bits of `clock_seq_hi_and_reserved`).
    pub const fn variant(&self) -> Variant {
        let b = self.0[8];
        if b >> 7 == 0 {
            Variant::Ncs
        } else if b >> 6 == 0b10 {
            Variant::Rfc4122
        } else if b >> 5 == 0b110 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Returns the 60-bit timestamp, i.e., the number of 100-nanosecond intervals since
    /// 1582-10-15 00:00:00 UTC.
    ///
    /// The value is meaningful for time-based UUIDs only, though it is computed for any layout.
    pub const fn timestamp(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([b[6] & 0x0f, b[7], b[4], b[5], b[0], b[1], b[2], b[3]])
    }

    /// Returns the clock sequence, i.e., the low 14 bits of `clock_seq_hi_and_reserved` and
    /// `clock_seq_low`.
    pub const fn clock_sequence(&self) -> i16 {
        i16::from_be_bytes([self.0[8] & 0x3f, self.0[9]])
    }

    /// Returns the 48-bit node field as an integer.
    pub const fn node(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid1_state::Uuid;
    ///
    /// let x = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
    /// # Ok::<(), uuid1_state::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer holds ASCII characters only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns the URN representation, e.g., `urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6`.
    pub fn to_urn(&self) -> String {
        format!("urn:uuid:{}", self.encode())
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, optionally
    /// prefixed with `urn:uuid:` or `uuid:`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = strip_prefix(src);
        let len = src.chars().count();
        if len != 36 {
            return Err(ParseError::InvalidLength(len));
        }

        let mut dst = [0u8; 16];
        let mut nibbles = 0;
        for (pos, c) in src.chars().enumerate() {
            if pos == 8 || pos == 13 || pos == 18 || pos == 23 {
                if c != '-' {
                    return Err(ParseError::MisplacedHyphen(pos));
                }
                continue;
            }
            let digit = c.to_digit(16).ok_or(ParseError::InvalidCharacter(pos))? as u8;
            dst[nibbles / 2] |= if nibbles % 2 == 0 { digit << 4 } else { digit };
            nibbles += 1;
        }
        Ok(Self(dst))
    }
}

fn strip_prefix(src: &str) -> &str {
    for prefix in ["urn:uuid:", "uuid:"] {
        if let Some(head) = src.as_bytes().get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix.as_bytes()) {
                return &src[prefix.len()..];
            }
        }
    }
    src
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.most_significant_bits()
            .cmp(&other.most_significant_bits())
            .then_with(|| {
                self.least_significant_bits()
                    .cmp(&other.least_significant_bits())
            })
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::Error;
    use std::cmp::Ordering;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, i16, [u8; 6]), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: i16 = (1 << 14) - 1;

        &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, [0; 6]), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, MAX_UINT14, [0; 6]), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (0x1d8b207f8636b90, 0x3231, [0xe3, 0x3c, 0x9d, 0xf0, 0x47, 0xca]),
                "f8636b90-b207-11d8-b231-e33c9df047ca",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.timestamp(), fs.0);
            assert_eq!(from_fields.clock_sequence(), fs.1);
            assert_eq!(from_fields.node().to_be_bytes()[2..], fs.2);
            assert_eq!(from_fields.version(), 1);
            assert_eq!(from_fields.variant(), Variant::Rfc4122);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " b4f00409-cef8-4822-802c-deb20704c365",
            "b4f00409-cef8-4822-802c-deb20704c365 ",
            "+b4f00409-cef8-4822-802c-deb20704c365",
            "b4f00409cef84822802cdeb20704c365",
            "b4f00409-cef84822-802c-deb20704c365",
            "{b4f00409-cef8-4822-802c-deb20704c365}",
            "b4f00409-cef8-48 2-802c-deb20704c365",
            "b4f00409-cef8-4822-802c_deb20704c365",
            "urn:b4f00409-cef8-4822-802c-deb20704c365",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{e}");
        }
    }

    /// Classifies malformed input by cause
    #[test]
    fn classifies_malformed_input_by_cause() {
        use crate::ParseError;

        assert_eq!(
            "4F00409-CEF8-4822-802C-DEB20704C365".parse::<Uuid>(),
            Err(ParseError::InvalidLength(35))
        );
        assert_eq!(
            "FF4F00409-CEF8-4822-802C-DEB20704C365".parse::<Uuid>(),
            Err(ParseError::InvalidLength(37))
        );
        assert_eq!(
            "G4F00409-CEF8-4822-802C-DEB20704C365".parse::<Uuid>(),
            Err(ParseError::InvalidCharacter(0))
        );
        assert_eq!(
            "F4F00409-CEF8-4822-802CD-EB20704C365".parse::<Uuid>(),
            Err(ParseError::MisplacedHyphen(23))
        );
        assert_eq!(
            "uuid:F4F00409-CEF8-4822-802C-DEB20704C36é".parse::<Uuid>(),
            Err(ParseError::InvalidCharacter(35))
        );
    }

    /// Accepts URN and short prefixes
    #[test]
    fn accepts_urn_and_short_prefixes() {
        let baseline: Uuid = "B4F00409-CEF8-4822-802C-DEB20704C365".parse().unwrap();
        assert_eq!(
            "urn:uuid:B4F00409-CEF8-4822-802C-DEB20704C365".parse(),
            Ok(baseline)
        );
        assert_eq!(
            "URN:UUID:b4f00409-cef8-4822-802c-deb20704c365".parse(),
            Ok(baseline)
        );
        assert_eq!(
            "uuid:B4F00409-CEF8-4822-802C-DEB20704C365".parse(),
            Ok(baseline)
        );
        assert_eq!(
            baseline.to_urn(),
            "urn:uuid:b4f00409-cef8-4822-802c-deb20704c365"
        );
        assert_eq!(
            Uuid::MAX.to_string(),
            "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF".to_lowercase()
        );
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(Uuid::default(), Uuid::NIL);
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Constructs from signed halves
    #[test]
    fn constructs_from_signed_halves() {
        let e = Uuid::from_i64_pair(-5408818712298371038, -9210742281676209307);
        assert_eq!(e.to_string(), "b4f00409-cef8-4822-802c-deb20704c365");
        assert_eq!(e.most_significant_bits(), -5408818712298371038);
        assert_eq!(e.least_significant_bits(), -9210742281676209307);
    }

    /// Reads exactly sixteen bytes from a reader
    #[test]
    fn reads_exactly_sixteen_bytes_from_a_reader() {
        let e: Uuid = "b4f00409-cef8-4822-802c-deb20704c365".parse().unwrap();
        let mut source = e.as_bytes().to_vec();
        source.extend_from_slice(b"trailing");
        assert_eq!(Uuid::from_reader(&source[..]).unwrap(), e);

        match Uuid::from_reader(&e.as_bytes()[1..]) {
            Err(Error::TruncatedInput { read }) => assert_eq!(read, 15),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Extracts fields from known values
    #[test]
    fn extracts_fields_from_known_values() {
        let e: Uuid = "f8636b90-b207-11d8-b231-e33c9df047ca".parse().unwrap();
        assert_eq!(e.timestamp(), 133051936309210000);

        let e: Uuid = "547fa190-b209-11d8-bc4e-95ef8f69921e".parse().unwrap();
        assert_eq!(e.node(), 164856135782942);

        let e: Uuid = "c079ef59-f5b1-1801-a348-c38429e61be7".parse().unwrap();
        assert_eq!(e.clock_sequence(), 9032);
    }

    /// Reads version and variant bits
    #[test]
    fn reads_version_and_variant_bits() {
        for v in 1..=5u8 {
            let text = format!("3051a8d7-aea7-{v}801-e0bf-bc539dd60cf3");
            assert_eq!(text.parse::<Uuid>().unwrap().version(), v);
        }

        let cases = [
            ("d0e817e1-e4b1-1801-3fe6-b4b60ccecf9d", Variant::Ncs, 0),
            ("d0e817e1-e4b1-1801-bfe6-b4b60ccecf9d", Variant::Rfc4122, 2),
            ("d0e817e1-e4b1-1801-dfe6-b4b60ccecf9d", Variant::Microsoft, 6),
            ("d0e817e1-e4b1-1801-ffe6-b4b60ccecf9d", Variant::Future, 7),
        ];
        for (text, variant, code) in cases {
            let e: Uuid = text.parse().unwrap();
            assert_eq!(e.variant(), variant);
            assert_eq!(e.variant().code(), code);
        }
    }

    /// Compares as two signed halves
    #[test]
    fn compares_as_two_signed_halves() {
        let parse = |s: &str| s.parse::<Uuid>().unwrap();
        let baseline = parse("ffffffff-ffff-ffef-ffff-ffffffffffff");
        let less = parse("ffffffff-ffff-ffdf-ffff-ffffffffffff");
        let same = parse("ffffffff-ffff-ffef-ffff-ffffffffffff");
        let more = parse("ffffffff-ffff-ffff-ffff-ffffffffffff");
        assert_eq!(baseline.cmp(&less), Ordering::Greater);
        assert_eq!(baseline.cmp(&same), Ordering::Equal);
        assert_eq!(baseline.cmp(&more), Ordering::Less);

        // the sign bit makes "8..." sort before "0..."
        let negative = parse("80000000-0000-0000-0000-000000000000");
        let positive = parse("7fffffff-ffff-ffff-ffff-ffffffffffff");
        assert!(negative < Uuid::NIL);
        assert!(Uuid::NIL < positive);
        assert!(Uuid::MAX < Uuid::NIL);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from(e.to_bytes()), e);
            assert_eq!(
                Uuid::from_i64_pair(e.most_significant_bits(), e.least_significant_bits()),
                e
            );
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_urn()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }

    mod properties {
        use super::super::{Uuid, Variant};
        use proptest::prelude::*;

        proptest! {
            /// Round-trips bytes through the string form
            #[test]
            fn round_trips_bytes_through_the_string_form(bytes in any::<[u8; 16]>()) {
                let e = Uuid::from(bytes);
                prop_assert_eq!(e.to_bytes(), bytes);
                prop_assert_eq!(e.to_string().parse::<Uuid>().unwrap().to_bytes(), bytes);
            }

            /// Orders consistently with equality
            #[test]
            fn orders_consistently_with_equality(
                a in any::<u128>(),
                b in any::<u128>(),
                c in any::<u128>(),
            ) {
                let (a, b, c) = (Uuid::from(a), Uuid::from(b), Uuid::from(c));
                prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
                prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
                if a <= b && b <= c {
                    prop_assert!(a <= c);
                }
            }

            /// Derives version and variant from their own bits only
            #[test]
            fn derives_version_and_variant_from_their_own_bits_only(
                x in any::<u128>(),
                y in any::<u128>(),
            ) {
                const MASK: u128 = (0xf << 76) | (0xe0 << 56);
                let a = Uuid::from(x);
                let b = Uuid::from((y & !MASK) | (x & MASK));
                prop_assert_eq!(a.version(), b.version());
                prop_assert_eq!(a.variant(), b.variant());
                if a.variant() == Variant::Rfc4122 {
                    prop_assert_eq!(u128::from(a) >> 62 & 0b11, 0b10);
                }
            }
        }
    }
}
