//! RFC 4122 UUIDs with persistent node and clock-sequence state
//!
//! ```rust
//! use uuid1_state::uuid1;
//!
//! let uuid = uuid1();
//! println!("{}", uuid); // e.g. "c5b1f5a2-3e18-11ef-9c1b-b3a6e1f0c2d4"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Time-based (version 1) identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|          clock_seq        |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - `time_low`, `time_mid`, and `time_hi` hold the low 32, middle 16, and high 12 bits of a
//!   60-bit timestamp counting 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field holds the clock sequence of the node.
//! - The 48-bit `node` field holds the node identifier.
//!
//! # Node state
//!
//! A [`UuidFactory`] issues time-based identifiers under a node drawn from a [`NodeManager`],
//! which loads node records from a [`state::State`] backend. Whenever the clock reports a tick
//! that is not later than the last one issued under a node, the clock sequence of the node is
//! incremented, so no two identifiers share a timestamp and clock sequence. The records can be
//! persisted to a file and reused by later runs:
//!
//! ```rust
//! use uuid1_state::{clock::ClockKind, state::StateKind, Config, UuidFactory};
//!
//! # let dir = tempfile::tempdir()?;
//! let config = Config {
//!     clock: ClockKind::ThreadLocal,
//!     state: StateKind::ReadWrite,
//!     state_path: Some(dir.path().join("uuid.state")),
//! };
//! let factory = UuidFactory::from_config(&config)?;
//! let uuid = factory.time_based();
//! assert_eq!(uuid.version(), 1);
//! factory.store()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The backends can also be chosen through the `UUID_CLOCK_IMPL`, `UUID_STATE_IMPL`, and
//! `UUID_STATE_FILE` environment variables; see [`Config::from_env`].
//!
//! # Other features
//!
//! This library also supports name-based (version 3 and 5) and random (version 4) UUIDs:
//!
//! ```rust
//! use uuid1_state::{uuid4, HashAlgorithm, Uuid};
//!
//! let uuid = Uuid::name_based("www.widgets.com", &Uuid::NAMESPACE_DNS, HashAlgorithm::Sha1);
//! assert_eq!(uuid.to_string(), "21f7f8de-8051-5b89-8680-0195ef798b6a");
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default factory behind [`uuid1()`] and [`uuid4()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of [`Uuid`] and [`Config`] via serde.
//! - `uuid`: enables conversion from/to the [uuid] crate's `Uuid` type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod uuid;
pub use uuid::{Uuid, Variant};

mod error;
pub use error::{Error, ParseError};

mod name;
pub use name::HashAlgorithm;

pub mod clock;
pub mod state;

mod node_manager;
pub use node_manager::NodeManager;

mod factory;
pub use factory::UuidFactory;

mod config;
pub use config::{
    Config, CLOCK_ENV_VAR, DEFAULT_STATE_FILE, STATE_ENV_VAR, STATE_FILE_ENV_VAR,
};

mod v4;

#[cfg(feature = "global_gen")]
mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4};
