//! Timestamp sources for time-based UUIDs
//!
//! A [`Clock`] returns the number of 100-nanosecond intervals elapsed since 1582-10-15 00:00:00
//! UTC. Clocks are monotonic on a best-effort basis only; detecting and compensating for a clock
//! that moves backward is the job of [`NodeManager`](crate::NodeManager).

use std::{cell::Cell, fmt, str, time};

use crate::{error::Error, uuid::GREGORIAN_TO_UNIX_TICKS};

/// A source of UUID timestamps.
pub trait Clock {
    /// Returns the current time in 100-nanosecond ticks since the UUID epoch.
    fn timestamp(&self) -> u64;
}

/// Returns the current system time in 100-nanosecond ticks since the UUID epoch.
pub(crate) fn uuid_time_now() -> u64 {
    let since_unix = time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .expect("clock may have gone backwards");
    GREGORIAN_TO_UNIX_TICKS + (since_unix.as_nanos() / 100) as u64
}

/// A clock that reads the system time directly, without any compensation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> u64 {
        uuid_time_now()
    }
}

thread_local! {
    static LAST_TICK: Cell<u64> = const { Cell::new(0) };
}

/// A clock that keeps a last-seen tick per calling thread and never returns the same or a smaller
/// tick twice on one thread.
///
/// When the system time has not advanced since the previous call on the same thread (or has moved
/// backward), the previous tick plus one is returned instead. No state is shared between threads.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ThreadLocalClock;

impl ThreadLocalClock {
    fn next_tick(now: u64) -> u64 {
        LAST_TICK.with(|last| {
            let tick = now.max(last.get() + 1);
            last.set(tick);
            tick
        })
    }
}

impl Clock for ThreadLocalClock {
    fn timestamp(&self) -> u64 {
        Self::next_tick(uuid_time_now())
    }
}

/// The closed set of clock implementations selectable by configuration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClockKind {
    /// [`SystemClock`]
    #[default]
    System,

    /// [`ThreadLocalClock`]
    ThreadLocal,
}

impl str::FromStr for ClockKind {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "thread-local" | "thread_local" | "thread" => Ok(Self::ThreadLocal),
            _ => Err(Error::Config {
                key: "clock",
                value: src.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::System => "system",
            Self::ThreadLocal => "thread-local",
        })
    }
}

/// A clock chosen at run time from [`ClockKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClockBackend {
    /// See [`SystemClock`].
    System(SystemClock),

    /// See [`ThreadLocalClock`].
    ThreadLocal(ThreadLocalClock),
}

impl From<ClockKind> for ClockBackend {
    fn from(kind: ClockKind) -> Self {
        match kind {
            ClockKind::System => Self::System(SystemClock),
            ClockKind::ThreadLocal => Self::ThreadLocal(ThreadLocalClock),
        }
    }
}

impl Default for ClockBackend {
    fn default() -> Self {
        ClockKind::default().into()
    }
}

impl Clock for ClockBackend {
    fn timestamp(&self) -> u64 {
        match self {
            Self::System(c) => c.timestamp(),
            Self::ThreadLocal(c) => c.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ClockBackend, ClockKind, SystemClock, ThreadLocalClock};
    use std::thread;

    /// Returns up-to-date timestamp
    #[test]
    fn returns_up_to_date_timestamp() {
        // February 2004
        const LOWER_BOUND: u64 = 132962443266870000;
        assert!(SystemClock.timestamp() > LOWER_BOUND);
        assert!(ThreadLocalClock.timestamp() > LOWER_BOUND);

        let unix_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;
        let uuid_ms = ((SystemClock.timestamp() - 0x01b2_1dd2_1381_4000) / 10_000) as i64;
        assert!((unix_ms - uuid_ms).abs() < 16);
    }

    /// Returns strictly increasing ticks per thread
    #[test]
    fn returns_strictly_increasing_ticks_per_thread() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    let mut prev = ThreadLocalClock.timestamp();
                    for _ in 0..100_000 {
                        let curr = ThreadLocalClock.timestamp();
                        assert!(prev < curr);
                        prev = curr;
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }

    /// Advances past the last tick when time stands still or goes back
    #[test]
    fn advances_past_the_last_tick_when_time_stands_still_or_goes_back() {
        thread::spawn(|| {
            assert_eq!(ThreadLocalClock::next_tick(1_000), 1_000);
            assert_eq!(ThreadLocalClock::next_tick(1_000), 1_001);
            assert_eq!(ThreadLocalClock::next_tick(500), 1_002);
            assert_eq!(ThreadLocalClock::next_tick(2_000), 2_000);
        })
        .join()
        .unwrap();
    }

    /// Parses clock kinds
    #[test]
    fn parses_clock_kinds() {
        assert_eq!("system".parse::<ClockKind>().unwrap(), ClockKind::System);
        assert_eq!(
            "Thread-Local".parse::<ClockKind>().unwrap(),
            ClockKind::ThreadLocal
        );
        assert!("native".parse::<ClockKind>().is_err());
        assert_eq!(ClockKind::ThreadLocal.to_string(), "thread-local");
        assert!(matches!(
            ClockBackend::from(ClockKind::ThreadLocal),
            ClockBackend::ThreadLocal(_)
        ));
        assert!(matches!(ClockBackend::default(), ClockBackend::System(_)));
    }
}
