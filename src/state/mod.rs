//! Persistence of node records
//!
//! A [`State`] loads and stores the set of [`Node`] records that a
//! [`NodeManager`](crate::NodeManager) draws from. Three backends are provided:
//!
//! | Backend                   | Source                         | `store`                      |
//! | ------------------------- | ------------------------------ | ---------------------------- |
//! | [`InMemoryState`]         | none, or nodes given in code   | kept in memory               |
//! | [`ReadOnlyResourceState`] | a file or embedded bytes       | `UnsupportedOperation` error |
//! | [`ReadWriteFileState`]    | a file, created on first store | atomic rewrite under a lock  |
//!
//! The persisted form is a headerless sequence of 16-byte records; see [`Node::to_record`].

use std::{collections::HashSet, fmt, path::Path, str};

use crate::error::Error;

mod file;
mod memory;
mod node;
mod resource;

pub use file::ReadWriteFileState;
pub use memory::InMemoryState;
pub use node::{new_clock_sequence, Node, NodeId, NodeIdParseError, CLOCK_SEQUENCE_MODULUS};
pub use resource::ReadOnlyResourceState;

/// A backing store of node records.
pub trait State {
    /// Loads the node records from the backing resource, replacing any previously loaded set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`] if the resource is corrupt, or missing where the backend requires
    /// it.
    fn load(&mut self) -> Result<(), Error>;

    /// Returns a copy of the currently loaded node records, in persisted order.
    fn nodes(&self) -> Vec<Node>;

    /// Replaces the stored node records with `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] on read-only backends, or [`Error::State`] if the
    /// records cannot be written.
    fn store(&mut self, nodes: &[Node]) -> Result<(), Error>;

    /// Returns `true` if [`State::store`] is supported.
    fn is_writable(&self) -> bool;
}

/// Decodes a headerless sequence of node records read from `origin`.
pub(crate) fn decode_records(bytes: &[u8], origin: &Path) -> Result<Vec<Node>, Error> {
    if bytes.len() % Node::RECORD_LEN != 0 {
        return Err(Error::state(
            origin,
            format!(
                "length {} is not a multiple of the {}-byte record size",
                bytes.len(),
                Node::RECORD_LEN
            ),
        ));
    }

    let nodes: Vec<Node> = bytes
        .chunks_exact(Node::RECORD_LEN)
        .map(|chunk| {
            let mut record = [0u8; Node::RECORD_LEN];
            record.copy_from_slice(chunk);
            Node::from_record(&record)
        })
        .collect();
    check_unique(&nodes, origin)?;
    Ok(nodes)
}

/// Encodes node records in persisted order.
pub(crate) fn encode_records(nodes: &[Node]) -> Vec<u8> {
    nodes.iter().flat_map(|node| node.to_record()).collect()
}

pub(crate) fn check_unique(nodes: &[Node], origin: &Path) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id()) {
            return Err(Error::state(
                origin,
                format!("duplicate node identifier {}", node.id()),
            ));
        }
    }
    Ok(())
}

/// The closed set of state backends selectable by configuration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StateKind {
    /// [`InMemoryState`]
    #[default]
    InMemory,

    /// [`ReadOnlyResourceState`]
    ReadOnly,

    /// [`ReadWriteFileState`]
    ReadWrite,
}

impl str::FromStr for StateKind {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "in_memory" | "memory" => Ok(Self::InMemory),
            "read-only" | "read_only" | "resource" => Ok(Self::ReadOnly),
            "read-write" | "read_write" | "file" => Ok(Self::ReadWrite),
            _ => Err(Error::Config {
                key: "state",
                value: src.to_owned(),
            }),
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InMemory => "in-memory",
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
        })
    }
}

/// A state backend chosen at run time from [`StateKind`].
#[derive(Debug)]
pub enum StateBackend {
    /// See [`InMemoryState`].
    InMemory(InMemoryState),

    /// See [`ReadOnlyResourceState`].
    ReadOnly(ReadOnlyResourceState),

    /// See [`ReadWriteFileState`].
    ReadWrite(ReadWriteFileState),
}

impl StateBackend {
    /// Creates the backend of `kind` over `path`. The path is ignored by the in-memory backend.
    pub fn new(kind: StateKind, path: &Path) -> Self {
        match kind {
            StateKind::InMemory => Self::InMemory(InMemoryState::new()),
            StateKind::ReadOnly => Self::ReadOnly(ReadOnlyResourceState::from_path(path)),
            StateKind::ReadWrite => Self::ReadWrite(ReadWriteFileState::new(path)),
        }
    }
}

impl Default for StateBackend {
    fn default() -> Self {
        Self::InMemory(InMemoryState::new())
    }
}

impl State for StateBackend {
    fn load(&mut self) -> Result<(), Error> {
        match self {
            Self::InMemory(s) => s.load(),
            Self::ReadOnly(s) => s.load(),
            Self::ReadWrite(s) => s.load(),
        }
    }

    fn nodes(&self) -> Vec<Node> {
        match self {
            Self::InMemory(s) => s.nodes(),
            Self::ReadOnly(s) => s.nodes(),
            Self::ReadWrite(s) => s.nodes(),
        }
    }

    fn store(&mut self, nodes: &[Node]) -> Result<(), Error> {
        match self {
            Self::InMemory(s) => s.store(nodes),
            Self::ReadOnly(s) => s.store(nodes),
            Self::ReadWrite(s) => s.store(nodes),
        }
    }

    fn is_writable(&self) -> bool {
        match self {
            Self::InMemory(s) => s.is_writable(),
            Self::ReadOnly(s) => s.is_writable(),
            Self::ReadWrite(s) => s.is_writable(),
        }
    }
}
