//! Default factory and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global factory, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a time-based (version 1) UUID object.
///
/// This function employs a global factory over the system clock and a random node kept in
/// memory. On Unix, this function replaces the node when the process ID changes (i.e., upon
/// process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid1_state::uuid1();
/// println!("{}", uuid); // e.g., "c5b1f5a2-3e18-11ef-9c1b-b3a6e1f0c2d4"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid1_state::uuid1().to_string();
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().0.time_based()
}

/// Generates a random (version 4) UUID object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid1_state::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    use rand::Rng as _;
    Uuid::from_random_bytes(lock_global_gen().get_mut().1.gen())
}

mod inner {
    use rand::SeedableRng as _;
    use rand_chacha::ChaCha12Rng;

    use crate::{clock::SystemClock, state::InMemoryState, UuidFactory};

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    ///
    /// The random number generator is seeded from the operating system each time the state is
    /// reset, which keeps a forked child from repeating the random values of its parent.
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        factory: UuidFactory<SystemClock, InMemoryState>,
        rng: ChaCha12Rng,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                factory: UuidFactory::in_memory(),
                rng: ChaCha12Rng::from_entropy(),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns mutable references to the inner factory and random number generator,
        /// resetting both on Unix if the process ID has changed.
        pub fn get_mut(
            &mut self,
        ) -> (&mut UuidFactory<SystemClock, InMemoryState>, &mut ChaCha12Rng) {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            (&mut self.factory, &mut self.rng)
        }
    }
}
