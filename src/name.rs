//! Name-based (version 3 and 5) UUID construction

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::Uuid;

/// The hash algorithm used to derive a name-based UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum HashAlgorithm {
    /// MD5, producing version 3 UUIDs.
    ///
    /// MD5 is no longer collision resistant. Version 3 UUIDs stay deterministic, but should only
    /// be generated to interoperate with systems that already use them.
    #[default]
    Md5,

    /// SHA-1, producing version 5 UUIDs.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the UUID version number produced by this algorithm.
    pub const fn version(&self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }
}

impl Uuid {
    /// Creates a name-based UUID from a `name` within a `namespace`.
    ///
    /// The digest is computed over the 16 bytes of `namespace` followed by `name`. The first 16
    /// bytes of the digest are kept and the version and variant bits are overlaid on them. The
    /// same inputs always produce the same UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid1_state::{HashAlgorithm, Uuid};
    ///
    /// let uuid = Uuid::name_based("www.widgets.com", &Uuid::NAMESPACE_DNS, HashAlgorithm::Md5);
    /// assert_eq!(uuid.to_string(), "3d813cbb-47fb-32ba-91df-831e1593ac29");
    /// ```
    pub fn name_based(
        name: impl AsRef<[u8]>,
        namespace: &Uuid,
        algorithm: HashAlgorithm,
    ) -> Self {
        let mut bytes = [0u8; 16];
        match algorithm {
            HashAlgorithm::Md5 => {
                let digest = Md5::new()
                    .chain_update(namespace.as_bytes())
                    .chain_update(name.as_ref())
                    .finalize();
                bytes.copy_from_slice(&digest[..16]);
            }
            HashAlgorithm::Sha1 => {
                let digest = Sha1::new()
                    .chain_update(namespace.as_bytes())
                    .chain_update(name.as_ref())
                    .finalize();
                bytes.copy_from_slice(&digest[..16]);
            }
        }
        bytes[6] = (algorithm.version() << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from(bytes)
    }

    /// Creates a version 3 (MD5) name-based UUID. See [`HashAlgorithm::Md5`] for its caveat.
    pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::name_based(name, namespace, HashAlgorithm::Md5)
    }

    /// Creates a version 5 (SHA-1) name-based UUID.
    pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::name_based(name, namespace, HashAlgorithm::Sha1)
    }
}
