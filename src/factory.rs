//! UUID factory combining a clock and a node manager

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    clock::{Clock, ClockBackend, SystemClock},
    config::Config,
    error::Error,
    name::HashAlgorithm,
    node_manager::NodeManager,
    state::{InMemoryState, Node, NodeId, State, StateBackend},
    Uuid,
};

/// Issues time-based, name-based, and random UUIDs.
///
/// A factory owns a [`Clock`] and a [`NodeManager`]. Time-based generation reads the clock,
/// applies the tick to the selected node, and assembles the UUID while holding one lock, so a
/// factory shared between threads never issues the same timestamp and clock sequence twice for a
/// node.
///
/// # Examples
///
/// ```rust
/// use uuid1_state::{Config, UuidFactory};
///
/// let factory = UuidFactory::from_config(&Config::default())?;
/// let uuid = factory.time_based();
/// println!("{}", uuid); // e.g. "c5b1f5a2-3e18-11ef-9c1b-b3a6e1f0c2d4"
/// assert_eq!(uuid.version(), 1);
/// assert_eq!(uuid.node(), factory.current_node().id().to_u64());
/// # Ok::<(), uuid1_state::Error>(())
/// ```
#[derive(Debug)]
pub struct UuidFactory<C: Clock = ClockBackend, S: State = StateBackend> {
    clock: C,
    manager: Mutex<NodeManager<S>>,
}

impl UuidFactory {
    /// Creates a factory with the clock and state backends chosen by `config`, loading the state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`] if the configured state cannot be loaded. Falling back to
    /// [`UuidFactory::in_memory`] is left to the caller.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        tracing::debug!(clock = %config.clock, state = %config.state, "creating UUID factory");
        let manager = NodeManager::init(config.state_backend())?;
        Ok(Self::new(config.clock_backend(), manager))
    }
}

impl UuidFactory<SystemClock, InMemoryState> {
    /// Creates a factory over the system clock and a single random node kept in memory.
    pub fn in_memory() -> Self {
        Self::new(SystemClock, NodeManager::in_memory())
    }
}

impl<C: Clock, S: State> UuidFactory<C, S> {
    /// Creates a factory from a clock and an initialized node manager.
    pub fn new(clock: C, manager: NodeManager<S>) -> Self {
        Self {
            clock,
            manager: Mutex::new(manager),
        }
    }

    /// Creates a factory from a clock and a state, loading the state.
    ///
    /// # Errors
    ///
    /// Returns the error of [`State::load`] if the state cannot be loaded.
    pub fn with_state(clock: C, state: S) -> Result<Self, Error> {
        Ok(Self::new(clock, NodeManager::init(state)?))
    }

    /// Acquires the node manager. A panic in another thread never leaves the manager in a torn
    /// state, so the lock is recovered from poisoning.
    fn lock(&self) -> MutexGuard<'_, NodeManager<S>> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generates a time-based (version 1) UUID under the selected node.
    pub fn time_based(&self) -> Uuid {
        let mut manager = self.lock();
        let node = manager.record_tick(self.clock.timestamp());
        Uuid::from_fields_v1(
            node.last_timestamp(),
            node.clock_sequence(),
            *node.id().as_bytes(),
        )
    }

    /// Generates a name-based (version 3 or 5) UUID. The factory state is not involved.
    pub fn name_based(
        &self,
        name: impl AsRef<[u8]>,
        namespace: &Uuid,
        algorithm: HashAlgorithm,
    ) -> Uuid {
        Uuid::name_based(name, namespace, algorithm)
    }

    /// Generates a random (version 4) UUID. The factory state is not involved.
    pub fn random(&self) -> Uuid {
        Uuid::new_v4()
    }

    /// Returns a snapshot of the node time-based UUIDs are currently issued under.
    pub fn current_node(&self) -> Node {
        *self.lock().current_node()
    }

    /// Moves time-based generation to the next node of the state and returns its identifier.
    ///
    /// The selection wraps around after the last node. If no node has been selected yet, neither
    /// by this method nor through [`UuidFactory::time_based`] or [`UuidFactory::current_node`],
    /// the first call selects the first node, which is the one time-based generation would have
    /// used anyway.
    pub fn next_available_node(&self) -> NodeId {
        self.lock().next_available_node().id()
    }

    /// Persists the node records through the state.
    ///
    /// # Errors
    ///
    /// Returns the error of [`State::store`].
    pub fn store(&self) -> Result<(), Error> {
        self.lock().store()
    }

    /// Consumes the factory and returns the node manager, which flushes its records when dropped.
    pub fn into_manager(self) -> NodeManager<S> {
        self.manager
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
