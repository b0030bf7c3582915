use std::path::Path;

use super::{check_unique, Node, State};
use crate::error::Error;

/// A state that lives only as long as the process. Nothing is read at load time and stores are
/// kept in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryState {
    nodes: Vec<Node>,
}

impl InMemoryState {
    /// Creates an empty state.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a state pre-populated with `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`] if two records share an identifier.
    pub fn with_nodes(nodes: Vec<Node>) -> Result<Self, Error> {
        check_unique(&nodes, Path::new("<memory>"))?;
        Ok(Self { nodes })
    }
}

impl State for InMemoryState {
    fn load(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn store(&mut self, nodes: &[Node]) -> Result<(), Error> {
        check_unique(nodes, Path::new("<memory>"))?;
        self.nodes = nodes.to_vec();
        Ok(())
    }

    fn is_writable(&self) -> bool {
        true
    }
}
