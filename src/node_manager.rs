//! Node selection and clock-sequence bookkeeping

use std::cell::Cell;

use crate::{
    error::Error,
    state::{InMemoryState, Node, State, StateBackend, CLOCK_SEQUENCE_MODULUS},
};

/// Owns the node records of the running process and decides which one time-based UUIDs are issued
/// under.
///
/// A manager only exists in the initialized state: [`NodeManager::init`] loads the records from a
/// [`State`] and generates a random node if there are none. The records are owned by the manager
/// from then on; the state is used only to persist them again, through [`NodeManager::store`] or
/// when the manager is dropped.
///
/// # Node selection
///
/// A state may describe several nodes, e.g. one per generator instance sharing a host.
/// [`NodeManager::current_node`] returns the selected node, selecting the first record if no
/// selection has been made yet. [`NodeManager::next_available_node`] moves the selection to the
/// next record, wrapping around after the last one; the very first call selects the first
/// record.
///
/// # Clock regression
///
/// [`NodeManager::record_tick`] increments the clock sequence of the selected node (modulo
/// 2<sup>13</sup>) whenever the given tick is not greater than the last one recorded, and then
/// records the tick as the last timestamp, whichever direction the clock moved. No two calls thus
/// return the same pair of timestamp and clock sequence for a node unless the clock sequence wraps
/// around.
#[derive(Debug)]
pub struct NodeManager<S: State = StateBackend> {
    state: S,
    nodes: Vec<Node>,
    selected: Cell<Option<usize>>,
    dirty: bool,
}

impl<S: State> NodeManager<S> {
    /// Loads the node records from `state` and creates a manager over them.
    ///
    /// # Errors
    ///
    /// Returns the error of [`State::load`] if the records cannot be loaded.
    pub fn init(mut state: S) -> Result<Self, Error> {
        state.load()?;
        let mut nodes = state.nodes();
        let dirty = nodes.is_empty();
        if dirty {
            let node = Node::random();
            tracing::info!(node = %node.id(), "no node records found, generated a random node");
            nodes.push(node);
        }
        Ok(Self {
            state,
            nodes,
            selected: Cell::new(None),
            dirty,
        })
    }

    fn selected_index(&self) -> usize {
        let index = self.selected.get().unwrap_or(0);
        self.selected.set(Some(index));
        index
    }

    /// Returns the selected node without advancing the selection.
    pub fn current_node(&self) -> &Node {
        &self.nodes[self.selected_index()]
    }

    /// Advances the selection to the next node, cyclically, and returns it.
    pub fn next_available_node(&mut self) -> &Node {
        let index = match self.selected.get() {
            None => 0,
            Some(i) => (i + 1) % self.nodes.len(),
        };
        self.selected.set(Some(index));
        let node = &self.nodes[index];
        tracing::debug!(node = %node.id(), index, "selected node");
        node
    }

    /// Returns all node records in load order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Applies `tick` to the selected node and returns a snapshot of the node carrying the
    /// timestamp and clock sequence to issue a UUID with.
    pub fn record_tick(&mut self, tick: u64) -> Node {
        let index = self.selected_index();
        let node = &mut self.nodes[index];
        if tick <= node.last_timestamp {
            node.clock_sequence = (i32::from(node.clock_sequence) + 1)
                .rem_euclid(i32::from(CLOCK_SEQUENCE_MODULUS)) as i16;
            if tick < node.last_timestamp {
                tracing::debug!(
                    node = %node.id(),
                    tick,
                    last_timestamp = node.last_timestamp,
                    clock_sequence = node.clock_sequence,
                    "clock moved backwards, advanced clock sequence"
                );
            }
        }
        node.last_timestamp = tick;
        self.dirty = true;
        *node
    }

    /// Persists the node records through the state.
    ///
    /// # Errors
    ///
    /// Returns the error of [`State::store`], e.g. [`Error::UnsupportedOperation`] for a read-only
    /// state.
    pub fn store(&mut self) -> Result<(), Error> {
        self.state.store(&self.nodes)?;
        self.dirty = false;
        Ok(())
    }
}

impl NodeManager<InMemoryState> {
    /// Creates a manager over a single random node kept in memory. Nothing is loaded, so this
    /// cannot fail.
    pub fn in_memory() -> Self {
        Self {
            state: InMemoryState::new(),
            nodes: vec![Node::random()],
            selected: Cell::new(None),
            dirty: true,
        }
    }
}

impl<S: State> Drop for NodeManager<S> {
    fn drop(&mut self) {
        if self.dirty && self.state.is_writable() {
            if let Err(e) = self.store() {
                tracing::warn!(error = %e, "failed to persist node records");
            }
        }
    }
}
