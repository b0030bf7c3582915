use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use super::{decode_records, Node, State};
use crate::error::Error;

#[derive(Clone, Debug)]
enum Source {
    Path(PathBuf),
    Bytes(Cow<'static, [u8]>),
}

/// A state read from a file or from bytes embedded in the program. The resource must exist, and
/// stores are rejected.
///
/// # Examples
///
/// ```rust
/// use uuid1_state::state::{ReadOnlyResourceState, State};
///
/// let mut state = ReadOnlyResourceState::from_bytes(&b""[..]);
/// state.load()?;
/// assert!(state.nodes().is_empty());
/// assert!(state.store(&[]).is_err());
/// # Ok::<(), uuid1_state::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ReadOnlyResourceState {
    source: Source,
    nodes: Vec<Node>,
}

impl ReadOnlyResourceState {
    /// Creates a state backed by the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::Path(path.as_ref().to_path_buf()),
            nodes: Vec::new(),
        }
    }

    /// Creates a state backed by `bytes`, typically obtained through `include_bytes!`.
    pub fn from_bytes(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            source: Source::Bytes(bytes.into()),
            nodes: Vec::new(),
        }
    }

    fn origin(&self) -> &Path {
        match &self.source {
            Source::Path(path) => path,
            Source::Bytes(_) => Path::new("<embedded>"),
        }
    }
}

impl State for ReadOnlyResourceState {
    fn load(&mut self) -> Result<(), Error> {
        let bytes = match &self.source {
            Source::Path(path) => Cow::Owned(fs::read(path).map_err(|e| {
                Error::state(path, format!("failed to read state resource: {e}"))
            })?),
            Source::Bytes(bytes) => Cow::Borrowed(bytes.as_ref()),
        };
        self.nodes = decode_records(&bytes, self.origin())?;
        tracing::debug!(
            origin = %self.origin().display(),
            nodes = self.nodes.len(),
            "loaded read-only UUID state"
        );
        Ok(())
    }

    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn store(&mut self, _nodes: &[Node]) -> Result<(), Error> {
        Err(Error::UnsupportedOperation(
            "cannot store nodes to a read-only state resource",
        ))
    }

    fn is_writable(&self) -> bool {
        false
    }
}
