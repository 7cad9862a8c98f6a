//! Named wall-clock timers for the harness.
//!
//! Timers are identified by name and accumulate total time and call count
//! across invocations. The harness resets the registry before each timed
//! operation and prints the relevant named timers afterwards.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{LazyLock, Mutex};
use std::time::{Duration, Instant};

/// Name of the whole-vector ciphertext multiplication timer.
pub const MULTIPLY: &str = "multiply";
/// Name of the per-slot ciphertext multiplication timer.
pub const MULTIPLY_SLOT: &str = "multiply.slot";
/// Name of the whole-vector full-state bootstrap timer.
pub const REFRESH: &str = "refresh";
/// Name of the per-slot full-state bootstrap timer.
pub const REFRESH_SLOT: &str = "refresh.slot";
/// Name of the whole-vector message-only bootstrap timer.
pub const EXTRACT: &str = "extract";
/// Name of the per-slot message-only bootstrap timer.
pub const EXTRACT_SLOT: &str = "extract.slot";

/// Accumulated statistics of one named timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerStats {
    /// Total time spent under this name.
    pub total: Duration,
    /// Number of completed measurements.
    pub calls: u64,
}

impl TimerStats {
    /// Returns the average duration per completed measurement.
    #[inline]
    pub fn per_call(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls as u32
        }
    }
}

/// A set of named accumulating timers.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: Mutex<HashMap<&'static str, TimerStats>>,
}

impl TimerRegistry {
    /// Create a new empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one completed measurement to the named timer.
    pub fn record(&self, name: &'static str, elapsed: Duration) {
        let mut timers = self.timers.lock().unwrap();
        let stats = timers.entry(name).or_default();
        stats.total += elapsed;
        stats.calls += 1;
    }

    /// Returns the statistics of the named timer.
    ///
    /// A timer that never fired reports zero time and zero calls.
    pub fn stats(&self, name: &str) -> TimerStats {
        self.timers
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or_default()
    }

    /// Clears every timer, totals and counts alike.
    pub fn reset_all(&self) {
        self.timers.lock().unwrap().clear();
    }

    /// Starts a measurement recorded into this registry when dropped.
    #[inline]
    pub fn start(&self, name: &'static str) -> Timer<'_> {
        Timer {
            registry: self,
            name,
            start: Instant::now(),
        }
    }

    /// Writes the named timer as total, call count and per-call average.
    pub fn print_named(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        let stats = self.stats(name);
        writeln!(
            out,
            "  {}: {:?} / {} calls, {:?} per call",
            name,
            stats.total,
            stats.calls,
            stats.per_call()
        )
    }
}

/// A running measurement, recorded into its registry on drop.
///
/// Overlapping and nested timers are independent of each other.
#[derive(Debug)]
pub struct Timer<'a> {
    registry: &'a TimerRegistry,
    name: &'static str,
    start: Instant,
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.registry.record(self.name, self.start.elapsed());
    }
}

static GLOBAL: LazyLock<TimerRegistry> = LazyLock::new(TimerRegistry::new);

/// Returns the process-global timer registry.
#[inline]
pub fn global() -> &'static TimerRegistry {
    &GLOBAL
}

/// Starts a measurement on the global registry.
#[inline]
pub fn start(name: &'static str) -> Timer<'static> {
    global().start(name)
}

/// Clears every timer of the global registry.
#[inline]
pub fn reset_all_timers() {
    global().reset_all()
}

/// Returns the global statistics of the named timer.
#[inline]
pub fn timer_stats(name: &str) -> TimerStats {
    global().stats(name)
}

/// Prints one named timer of the global registry.
#[inline]
pub fn print_named_timer(out: &mut dyn Write, name: &str) -> io::Result<()> {
    global().print_named(out, name)
}

/// Runs the closure, timing it on the global registry.
#[inline]
pub fn time<R>(name: &'static str, f: impl FnOnce() -> R) -> R {
    let _timer = start(name);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let registry = TimerRegistry::new();

        {
            let _timer = registry.start("op");
        }
        {
            let _timer = registry.start("op");
        }

        let stats = registry.stats("op");
        assert_eq!(stats.calls, 2);
        assert!(stats.total >= stats.per_call());
    }

    #[test]
    fn test_unknown_timer_is_zero() {
        let registry = TimerRegistry::new();

        assert_eq!(registry.stats("never"), TimerStats::default());
        assert_eq!(registry.stats("never").per_call(), Duration::ZERO);
    }

    #[test]
    fn test_reset_all() {
        let registry = TimerRegistry::new();
        registry.record("a", Duration::from_millis(5));
        registry.record("b", Duration::from_millis(7));

        registry.reset_all();

        assert_eq!(registry.stats("a"), TimerStats::default());
        assert_eq!(registry.stats("b"), TimerStats::default());
    }

    #[test]
    fn test_nested_timers_are_independent() {
        let registry = TimerRegistry::new();

        {
            let _outer = registry.start("outer");
            let _inner = registry.start("inner");
        }

        assert_eq!(registry.stats("outer").calls, 1);
        assert_eq!(registry.stats("inner").calls, 1);
        // the inner guard drops first, so the outer total covers it
        assert!(registry.stats("outer").total >= registry.stats("inner").total);
    }

    #[test]
    fn test_per_call_average() {
        let registry = TimerRegistry::new();
        registry.record("avg", Duration::from_millis(4));
        registry.record("avg", Duration::from_millis(8));

        assert_eq!(registry.stats("avg").per_call(), Duration::from_millis(6));
    }

    #[test]
    fn test_print_named() {
        let registry = TimerRegistry::new();
        registry.record("printed", Duration::from_millis(3));

        let mut out = Vec::new();
        registry.print_named(&mut out, "printed").unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.contains("printed"));
        assert!(line.contains("1 calls"));
    }

    #[test]
    fn test_time_returns_closure_value() {
        let value = time("timing.test.closure", || 21 * 2);

        assert_eq!(value, 42);
        assert_eq!(timer_stats("timing.test.closure").calls, 1);
    }
}
