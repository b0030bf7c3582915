use std::{fmt, hash, str};

use rand::Rng;

use crate::clock::uuid_time_now;

/// Clock sequences stay within `0..CLOCK_SEQUENCE_MODULUS`.
pub const CLOCK_SEQUENCE_MODULUS: i16 = 1 << 13;

/// Length in bytes of a node identifier.
pub const NODE_ID_LEN: usize = 6;

/// A 48-bit node identifier, historically an IEEE 802 MAC address.
///
/// The text form is six uppercase hex octets separated by hyphens, e.g. `02-00-4C-4F-4F-50`.
/// Parsing also accepts lowercase digits and colon separators.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct NodeId([u8; NODE_ID_LEN]);

impl NodeId {
    /// Creates a node identifier from its six octets.
    pub const fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Generates a random node identifier with the multicast bit set, so that it can never clash
    /// with the address of a real network adapter.
    ///
    /// The high-order bit of the first octet is set as well, as in identifiers found in existing
    /// state files.
    pub fn random() -> Self {
        let mut bytes: [u8; NODE_ID_LEN] = rand::random();
        bytes[0] |= 0x81;
        Self(bytes)
    }

    /// Returns a reference to the octets.
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }

    /// Returns the identifier as a 48-bit integer.
    pub const fn to_u64(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{e:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({self})")
    }
}

/// Error parsing an invalid node identifier string.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Hash, Debug)]
#[error("invalid node identifier: '{0}'")]
pub struct NodeIdParseError(String);

impl str::FromStr for NodeId {
    type Err = NodeIdParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = || NodeIdParseError(src.to_owned());
        let mut dst = [0u8; NODE_ID_LEN];
        let mut octets = src.split(|c: char| c == '-' || c == ':');
        for e in dst.iter_mut() {
            let octet = octets.next().ok_or_else(err)?;
            if octet.len() != 2 || !octet.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(err());
            }
            *e = u8::from_str_radix(octet, 16).map_err(|_| err())?;
        }
        match octets.next() {
            None => Ok(Self(dst)),
            Some(_) => Err(err()),
        }
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(src: [u8; NODE_ID_LEN]) -> Self {
        Self(src)
    }
}

impl From<NodeId> for [u8; NODE_ID_LEN] {
    fn from(src: NodeId) -> Self {
        src.0
    }
}

/// Returns a fresh random clock sequence in `1..CLOCK_SEQUENCE_MODULUS`.
pub fn new_clock_sequence() -> i16 {
    rand::thread_rng().gen_range(1..CLOCK_SEQUENCE_MODULUS)
}

/// A machine-local node record: the identifier plus the bookkeeping needed to issue time-based
/// UUIDs under it.
///
/// Two records are equal if and only if their identifiers are equal.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    id: NodeId,
    pub(crate) last_timestamp: u64,
    pub(crate) clock_sequence: i16,
}

impl Node {
    /// Length in bytes of the persisted form of a record.
    pub const RECORD_LEN: usize = 16;

    /// Creates a record for `id` with a random non-zero clock sequence, stamped with the current
    /// time.
    pub fn new(id: NodeId) -> Self {
        Self::with_state(id, uuid_time_now(), new_clock_sequence())
    }

    /// Creates a record with a random identifier.
    pub fn random() -> Self {
        Self::new(NodeId::random())
    }

    /// Creates a record from previously persisted values.
    pub const fn with_state(id: NodeId, last_timestamp: u64, clock_sequence: i16) -> Self {
        Self {
            id,
            last_timestamp,
            clock_sequence,
        }
    }

    /// Returns the node identifier.
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the last timestamp issued under this node, in UUID ticks.
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Returns the current clock sequence.
    pub const fn clock_sequence(&self) -> i16 {
        self.clock_sequence
    }

    /// Encodes the record as 6 identifier bytes, an 8-byte big-endian timestamp, and a 2-byte
    /// big-endian clock sequence.
    pub fn to_record(&self) -> [u8; Self::RECORD_LEN] {
        let mut record = [0u8; Self::RECORD_LEN];
        record[..6].copy_from_slice(self.id.as_bytes());
        record[6..14].copy_from_slice(&self.last_timestamp.to_be_bytes());
        record[14..].copy_from_slice(&self.clock_sequence.to_be_bytes());
        record
    }

    /// Decodes a record produced by [`Node::to_record`].
    pub fn from_record(record: &[u8; Self::RECORD_LEN]) -> Self {
        let mut id = [0u8; NODE_ID_LEN];
        id.copy_from_slice(&record[..6]);
        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&record[6..14]);
        Self {
            id: NodeId(id),
            last_timestamp: u64::from_be_bytes(timestamp),
            clock_sequence: i16::from_be_bytes([record[14], record[15]]),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl hash::Hash for Node {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
