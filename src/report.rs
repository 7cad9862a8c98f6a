//! Machine-readable timing reports.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::TimingError;
use crate::timing::TimerRegistry;

/// Captured statistics of one named timer.
#[derive(Debug, Clone, Serialize)]
pub struct TimerReport {
    /// Timer name.
    pub name: String,
    /// Accumulated seconds.
    pub seconds: f64,
    /// Number of completed measurements.
    pub calls: u64,
}

/// One timed section of the harness run.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    /// Section label.
    pub name: String,
    /// The named timers printed for this section.
    pub timers: Vec<TimerReport>,
}

impl SectionReport {
    /// Captures the named timers from the registry.
    pub fn capture(registry: &TimerRegistry, name: &str, timers: &[&str]) -> Self {
        let timers = timers
            .iter()
            .map(|&timer| {
                let stats = registry.stats(timer);
                TimerReport {
                    name: timer.to_string(),
                    seconds: stats.total.as_secs_f64(),
                    calls: stats.calls,
                }
            })
            .collect();
        Self {
            name: name.to_string(),
            timers,
        }
    }
}

/// The full harness report.
#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    /// Parameter preset the run used.
    pub preset: String,
    /// Number of slots of the packed vector.
    pub slots: usize,
    /// One entry per timed operation.
    pub sections: Vec<SectionReport>,
}

impl TimingReport {
    /// Renders the report as a TOML string.
    pub fn to_toml_string(&self) -> Result<String, TimingError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the report to `path`, overwriting any previous file.
    pub fn write_to(&self, path: &Path) -> Result<(), TimingError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_capture_reads_registry() {
        let registry = TimerRegistry::new();
        registry.record("captured", Duration::from_millis(250));
        registry.record("captured", Duration::from_millis(250));

        let section = SectionReport::capture(&registry, "section", &["captured", "missing"]);

        assert_eq!(section.timers.len(), 2);
        assert_eq!(section.timers[0].calls, 2);
        assert!((section.timers[0].seconds - 0.5).abs() < 1e-9);
        assert_eq!(section.timers[1].calls, 0);
    }

    #[test]
    fn test_toml_shape() {
        let registry = TimerRegistry::new();
        registry.record("shaped", Duration::from_millis(1));

        let report = TimingReport {
            preset: "default".to_string(),
            slots: 16,
            sections: vec![SectionReport::capture(&registry, "section", &["shaped"])],
        };

        let rendered = report.to_toml_string().unwrap();
        assert!(rendered.contains("preset = \"default\""));
        assert!(rendered.contains("slots = 16"));
        assert!(rendered.contains("[[sections]]"));
        assert!(rendered.contains("seconds"));
    }
}
