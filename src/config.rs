//! Selection of the clock and state backends

use std::path::{Path, PathBuf};

use crate::{
    clock::{ClockBackend, ClockKind},
    error::Error,
    state::{StateBackend, StateKind},
};

/// Environment variable naming the clock backend.
pub const CLOCK_ENV_VAR: &str = "UUID_CLOCK_IMPL";

/// Environment variable naming the state backend.
pub const STATE_ENV_VAR: &str = "UUID_STATE_IMPL";

/// Environment variable giving the path of a file-backed state.
pub const STATE_FILE_ENV_VAR: &str = "UUID_STATE_FILE";

/// State file used by the file-backed backends when no path is configured.
pub const DEFAULT_STATE_FILE: &str = "uuid.state";

/// Chooses the clock and state backends of a [`UuidFactory`](crate::UuidFactory).
///
/// The default configuration uses the system clock and an in-memory state, which needs no
/// resources at all.
///
/// # Examples
///
/// ```rust
/// use uuid1_state::{clock::ClockKind, state::StateKind, Config};
///
/// let config = Config {
///     clock: ClockKind::ThreadLocal,
///     state: StateKind::ReadWrite,
///     state_path: Some("/var/lib/app/uuid.state".into()),
/// };
/// assert_eq!(config.state_path().to_str(), Some("/var/lib/app/uuid.state"));
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Config {
    /// Clock backend.
    pub clock: ClockKind,

    /// State backend.
    pub state: StateKind,

    /// Path of the state file; [`DEFAULT_STATE_FILE`] if `None`.
    pub state_path: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the process environment. Unset variables fall back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable names an unknown backend.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable names an unknown backend.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(value) = lookup(CLOCK_ENV_VAR) {
            config.clock = value.parse()?;
        }
        if let Some(value) = lookup(STATE_ENV_VAR) {
            config.state = value.parse()?;
        }
        config.state_path = lookup(STATE_FILE_ENV_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Ok(config)
    }

    /// Returns the path of the state file.
    pub fn state_path(&self) -> &Path {
        self.state_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STATE_FILE))
    }

    /// Creates the configured clock backend.
    pub fn clock_backend(&self) -> ClockBackend {
        self.clock.into()
    }

    /// Creates the configured state backend. Nothing is read until the state is loaded.
    pub fn state_backend(&self) -> StateBackend {
        StateBackend::new(self.state, self.state_path())
    }
}
