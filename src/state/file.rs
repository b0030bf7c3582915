use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use fs2::FileExt;

use super::{decode_records, encode_records, Node, State};
use crate::error::Error;

/// Default number of attempts to take the store lock before giving up.
pub const DEFAULT_LOCK_ATTEMPTS: u32 = 50;

/// Default pause between two lock attempts.
pub const DEFAULT_LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(20);

/// A state backed by a file that is read at load time and rewritten at store time.
///
/// A missing file loads as an empty set and is created by the first store. Each store writes the
/// records to `<path>.tmp`, syncs it, and renames it over `<path>`, so the file is never observed
/// half-written. Stores take an exclusive advisory lock on `<path>.lock` first, which keeps two
/// processes sharing the file from writing at the same time. Lock acquisition is retried a bounded
/// number of times.
#[derive(Clone, Debug)]
pub struct ReadWriteFileState {
    path: PathBuf,
    nodes: Vec<Node>,
    lock_attempts: u32,
    lock_retry_interval: Duration,
}

impl ReadWriteFileState {
    /// Creates a state backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            nodes: Vec::new(),
            lock_attempts: DEFAULT_LOCK_ATTEMPTS,
            lock_retry_interval: DEFAULT_LOCK_RETRY_INTERVAL,
        }
    }

    /// Overrides how many times and how often the store lock is attempted.
    pub fn with_lock_policy(mut self, attempts: u32, retry_interval: Duration) -> Self {
        self.lock_attempts = attempts.max(1);
        self.lock_retry_interval = retry_interval;
        self
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Opens the lock file and takes an exclusive lock on it. The lock is released when the
    /// returned file is dropped.
    fn lock_exclusive(&self) -> Result<File, Error> {
        let lock_path = self.sibling("lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| Error::state(&lock_path, format!("failed to open lock file: {e}")))?;

        let mut attempt = 1;
        loop {
            match FileExt::try_lock_exclusive(&file) {
                Ok(()) => return Ok(file),
                Err(e) if attempt >= self.lock_attempts => {
                    return Err(Error::state(
                        &lock_path,
                        format!("failed to acquire exclusive lock after {attempt} attempts: {e}"),
                    ));
                }
                Err(_) => {
                    tracing::debug!(
                        path = %lock_path.display(),
                        attempt,
                        "state file is locked, retrying"
                    );
                    attempt += 1;
                    thread::sleep(self.lock_retry_interval);
                }
            }
        }
    }

    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let temp_path = self.sibling("tmp");
        let result = (|| {
            let mut file = File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

impl State for ReadWriteFileState {
    fn load(&mut self) -> Result<(), Error> {
        self.nodes = match fs::read(&self.path) {
            Ok(bytes) => decode_records(&bytes, &self.path)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no UUID state file yet");
                Vec::new()
            }
            Err(e) => {
                return Err(Error::state(
                    &self.path,
                    format!("failed to read state file: {e}"),
                ))
            }
        };
        tracing::debug!(
            path = %self.path.display(),
            nodes = self.nodes.len(),
            "loaded UUID state"
        );
        Ok(())
    }

    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn store(&mut self, nodes: &[Node]) -> Result<(), Error> {
        super::check_unique(nodes, &self.path)?;
        let _lock = self.lock_exclusive()?;
        self.write_atomically(&encode_records(nodes))
            .map_err(|e| Error::state(&self.path, format!("failed to write state file: {e}")))?;
        self.nodes = nodes.to_vec();
        tracing::debug!(
            path = %self.path.display(),
            nodes = nodes.len(),
            "stored UUID state"
        );
        Ok(())
    }

    fn is_writable(&self) -> bool {
        true
    }
}
