// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timing and memory measurement helpers
//!
//! Memory figures come from the operating system's view of the process
//! (resident set size). They include allocator caching and any background
//! activity, so a delta is an advisory figure, not an exact attribution of
//! the measured code path.

use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};

/// Elapsed time between two instants, zero if `end` precedes `start`
#[must_use]
pub fn elapsed_between(start: Instant, end: Instant) -> Duration {
    end.saturating_duration_since(start)
}

/// Memory growth between two samples, clamped at zero
#[must_use]
pub const fn memory_delta(before: u64, after: u64) -> u64 {
    after.saturating_sub(before)
}

/// Point-in-time sample of the memory currently in use
pub trait MemoryProbe {
    /// Bytes currently used by the process
    fn used_bytes(&self) -> u64;
}

impl<F> MemoryProbe for F
where
    F: Fn() -> u64,
{
    fn used_bytes(&self) -> u64 {
        self()
    }
}

/// Resident memory of the current process, read through `sysinfo`
#[derive(Debug, Clone, Copy)]
pub struct ProcessMemoryProbe {
    pid: Pid,
}

impl ProcessMemoryProbe {
    /// Probe for the running process
    #[must_use]
    pub fn new() -> Self {
        Self {
            pid: Pid::from_u32(std::process::id()),
        }
    }
}

impl Default for ProcessMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn used_bytes(&self) -> u64 {
        let mut system = System::new_with_specifics(RefreshKind::nothing());
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(self.pid).map_or(0, sysinfo::Process::memory)
    }
}
