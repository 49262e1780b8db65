use std::mem;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use anyhow::Result;
use errno::errno;
use libc::{self, timespec, CLOCK_MONOTONIC};

/// A wall clock sample paired with a monotonic clock reading taken at
/// the same instant, used to place kernel timestamps in wall time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reference {
    pub wall: SystemTime,
    pub mono: u64,
}

impl Reference {
    pub fn new(wall: SystemTime, mono: u64) -> Self {
        Self { wall, mono }
    }

    pub fn now() -> Result<Self> {
        let wall = SystemTime::now();
        let mono = monotonic()?;
        Ok(Self { wall, mono })
    }

    /// Wall time of monotonic timestamp `ts`. A timestamp ahead of the
    /// reference maps to the reference itself.
    pub fn absolute(&self, ts: u64) -> SystemTime {
        let delta = Duration::from_nanos(self.mono.saturating_sub(ts));
        self.wall.checked_sub(delta).unwrap_or(UNIX_EPOCH)
    }
}

/// Current `CLOCK_MONOTONIC` time in nanoseconds, the clock behind
/// `bpf_ktime_get_ns`.
pub fn monotonic() -> Result<u64> {
    unsafe {
        let mut ts: timespec = mem::zeroed();
        match libc::clock_gettime(CLOCK_MONOTONIC, &mut ts) {
            0 => Ok(ts.tv_sec as u64 * 1_000_000_000 + ts.tv_nsec as u64),
            _ => Err(errno())?,
        }
    }
}
